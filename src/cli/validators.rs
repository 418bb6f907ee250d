//! CLI argument validators.
//!
//! Shared validation functions for CLI argument parsing.

/// Parse and validate a bounded float value.
///
/// # Arguments
///
/// * `s` - The string to parse
/// * `min` - Minimum allowed value (inclusive)
/// * `max` - Maximum allowed value (exclusive)
/// * `name` - Name of the parameter for error messages
pub fn parse_bounded_float(s: &str, min: f64, max: f64, name: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    if !(min..max).contains(&value) {
        return Err(format!(
            "{name} must be at least {min} and below {max}, got {value}"
        ));
    }

    Ok(value)
}

/// Parse and validate a minimum normalized box size (0.0 to below 1.0).
pub fn parse_percent(s: &str) -> Result<f64, String> {
    parse_bounded_float(s, 0.0, 1.0, "percent")
}

/// Parse a strictly positive pixel count.
pub fn parse_pixels(s: &str) -> Result<u32, String> {
    let value: u32 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid pixel count"))?;

    if value == 0 {
        return Err("pixel count must be at least 1".to_string());
    }

    Ok(value)
}

/// Parse a strictly positive count.
pub fn parse_count(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid count"))?;

    if value == 0 {
        return Err("count must be at least 1".to_string());
    }

    Ok(value)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_percent_valid() {
        assert_eq!(parse_percent("0.015").ok(), Some(0.015));
        assert_eq!(parse_percent("0").ok(), Some(0.0));
        assert_eq!(parse_percent("0.99").ok(), Some(0.99));
    }

    #[test]
    fn test_parse_percent_invalid() {
        assert!(parse_percent("1.0").is_err());
        assert!(parse_percent("-0.1").is_err());
        assert!(parse_percent("abc").is_err());
    }

    #[test]
    fn test_parse_bounded_float_messages() {
        let err = parse_bounded_float("5", 0.0, 1.0, "test").unwrap_err();
        assert!(err.contains("test must be at least"));
        let err = parse_bounded_float("x", 0.0, 1.0, "test").unwrap_err();
        assert!(err.contains("not a valid number"));
    }

    #[test]
    fn test_parse_pixels() {
        assert_eq!(parse_pixels("512").ok(), Some(512));
        assert!(parse_pixels("0").is_err());
        assert!(parse_pixels("-3").is_err());
        assert!(parse_pixels("1.5").is_err());
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("20").ok(), Some(20));
        assert!(parse_count("0").is_err());
    }
}
