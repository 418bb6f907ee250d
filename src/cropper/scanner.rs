//! Sliding-window scan over the image plane.

use crate::annotation::PixelBox;

/// A square crop window with its top-left corner at `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Window {
    /// Left edge in pixels.
    pub x: u32,
    /// Top edge in pixels.
    pub y: u32,
    /// Side length in pixels.
    pub size: u32,
}

impl Window {
    /// Whether `bbox` lies entirely inside this window, edges included.
    #[must_use]
    pub fn captures(&self, bbox: &PixelBox) -> bool {
        let x = f64::from(self.x);
        let y = f64::from(self.y);
        let size = f64::from(self.size);
        bbox.xmin >= x && bbox.ymin >= y && bbox.xmax <= x + size && bbox.ymax <= y + size
    }
}

/// A window that fully contains at least one qualifying box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapturedWindow {
    /// The window itself.
    pub window: Window,
    /// Number of qualifying boxes fully inside the window.
    pub captured: usize,
}

/// Row-major iterator over every window that fits entirely in the image.
///
/// Rows advance by `stride` from `y = 0` while `y + size <= height`, and
/// within a row `x` advances the same way while `x + size <= width`.
/// Partial edge windows are never produced. The scan is a pure function of
/// its inputs, so cloning or rebuilding it replays the same sequence.
#[derive(Debug, Clone)]
pub struct WindowScan {
    width: u64,
    height: u64,
    size: u32,
    stride: u32,
    next: Option<(u32, u32)>,
}

impl WindowScan {
    /// Whether the scan produces no windows at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.next.is_none()
    }
}

impl Iterator for WindowScan {
    type Item = Window;

    fn next(&mut self) -> Option<Window> {
        let (x, y) = self.next?;
        let size = u64::from(self.size);
        let stride = u64::from(self.stride);

        let next_x = u64::from(x) + stride;
        self.next = if next_x + size <= self.width {
            u32::try_from(next_x).ok().map(|nx| (nx, y))
        } else {
            let next_y = u64::from(y) + stride;
            if next_y + size <= self.height {
                u32::try_from(next_y).ok().map(|ny| (0, ny))
            } else {
                None
            }
        };

        Some(Window {
            x,
            y,
            size: self.size,
        })
    }
}

/// Enumerate all in-bounds windows of `size` pixels stepped by `stride`.
///
/// Yields nothing when `size` exceeds either image dimension, or when
/// `size` or `stride` is zero.
#[must_use]
pub fn scan_windows(width: u32, height: u32, size: u32, stride: u32) -> WindowScan {
    let fits = size > 0 && stride > 0 && size <= width && size <= height;
    WindowScan {
        width: u64::from(width),
        height: u64::from(height),
        size,
        stride,
        next: fits.then_some((0, 0)),
    }
}

/// Windows from [`scan_windows`] that fully contain at least one of `boxes`.
///
/// Partial overlap does not count. The result is lazy and, like the
/// underlying scan, restartable by cloning.
pub fn captured_windows(
    width: u32,
    height: u32,
    size: u32,
    stride: u32,
    boxes: &[PixelBox],
) -> impl Iterator<Item = CapturedWindow> + Clone + '_ {
    scan_windows(width, height, size, stride).filter_map(move |window| {
        let captured = boxes.iter().filter(|b| window.captures(b)).count();
        (captured > 0).then_some(CapturedWindow { window, captured })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pbox(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> PixelBox {
        PixelBox {
            xmin,
            ymin,
            xmax,
            ymax,
        }
    }

    #[test]
    fn test_non_overlapping_tiling() {
        let windows: Vec<_> = scan_windows(100, 100, 50, 50).map(|w| (w.x, w.y)).collect();
        assert_eq!(windows, vec![(0, 0), (50, 0), (0, 50), (50, 50)]);
    }

    #[test]
    fn test_no_partial_edge_windows() {
        let windows: Vec<_> = scan_windows(120, 70, 50, 50).collect();
        assert_eq!(windows.len(), 2);
        for w in &windows {
            assert!(w.x + w.size <= 120);
            assert!(w.y + w.size <= 70);
        }
    }

    #[test]
    fn test_overlapping_stride() {
        let xs: Vec<_> = scan_windows(100, 50, 50, 25).map(|w| w.x).collect();
        assert_eq!(xs, vec![0, 25, 50]);
    }

    #[test]
    fn test_crop_larger_than_image_is_empty() {
        assert!(scan_windows(40, 100, 50, 50).is_empty());
        assert_eq!(scan_windows(100, 40, 50, 50).count(), 0);
    }

    #[test]
    fn test_exact_fit_single_window() {
        let windows: Vec<_> = scan_windows(64, 64, 64, 8).collect();
        assert_eq!(
            windows,
            vec![Window {
                x: 0,
                y: 0,
                size: 64
            }]
        );
    }

    #[test]
    fn test_zero_stride_is_empty() {
        assert_eq!(scan_windows(100, 100, 50, 0).count(), 0);
    }

    #[test]
    fn test_captures_boundaries() {
        let window = Window {
            x: 10,
            y: 10,
            size: 50,
        };
        assert!(window.captures(&pbox(10.0, 10.0, 60.0, 60.0)));
        assert!(!window.captures(&pbox(9.0, 10.0, 40.0, 40.0)));
        assert!(!window.captures(&pbox(20.0, 20.0, 60.5, 40.0)));
        assert!(!window.captures(&pbox(20.0, 9.99, 30.0, 30.0)));
    }

    #[test]
    fn test_captured_windows_counts_boxes() {
        let boxes = [pbox(10.0, 10.0, 40.0, 40.0), pbox(5.0, 5.0, 20.0, 20.0)];
        let captured: Vec<_> = captured_windows(100, 100, 50, 50, &boxes).collect();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].window.x, 0);
        assert_eq!(captured[0].captured, 2);
    }

    #[test]
    fn test_box_straddling_windows_is_not_captured() {
        let boxes = [pbox(40.0, 40.0, 60.0, 60.0)];
        assert_eq!(captured_windows(100, 100, 50, 50, &boxes).count(), 0);
    }

    #[test]
    fn test_scan_is_restartable() {
        let boxes = [pbox(10.0, 10.0, 40.0, 40.0), pbox(60.0, 60.0, 90.0, 90.0)];
        let scan = captured_windows(100, 100, 50, 25, &boxes);
        let first: Vec<_> = scan.clone().collect();
        let second: Vec<_> = scan.collect();
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }
}
