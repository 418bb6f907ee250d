//! Normalized and pixel-space bounding boxes.

/// A bounding box as stored in an annotation file.
///
/// All four coordinates are fractions of the image width/height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedBox {
    /// Object class id.
    pub class_id: u32,
    /// Box center, fraction of image width.
    pub center_x: f64,
    /// Box center, fraction of image height.
    pub center_y: f64,
    /// Box width, fraction of image width.
    pub width: f64,
    /// Box height, fraction of image height.
    pub height: f64,
}

impl NormalizedBox {
    /// Whether this box is of class `class_id` and both its normalized
    /// width and height strictly exceed `percent`.
    ///
    /// The two dimensions are tested independently; area is not used.
    #[must_use]
    pub fn qualifies(&self, class_id: u32, percent: f64) -> bool {
        self.class_id == class_id && self.width > percent && self.height > percent
    }

    /// Convert to pixel corners for an image of `image_width` x `image_height`.
    #[must_use]
    pub fn to_pixel(&self, image_width: u32, image_height: u32) -> PixelBox {
        let w = f64::from(image_width);
        let h = f64::from(image_height);
        let half_w = self.width * w / 2.0;
        let half_h = self.height * h / 2.0;
        let cx = self.center_x * w;
        let cy = self.center_y * h;
        PixelBox {
            xmin: cx - half_w,
            ymin: cy - half_h,
            xmax: cx + half_w,
            ymax: cy + half_h,
        }
    }
}

/// A bounding box in pixel coordinates of one image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelBox {
    /// Left edge.
    pub xmin: f64,
    /// Top edge.
    pub ymin: f64,
    /// Right edge.
    pub xmax: f64,
    /// Bottom edge.
    pub ymax: f64,
}

impl PixelBox {
    /// Integer corners `(x1, y1, x2, y2)`, truncated toward zero.
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn truncated(&self) -> (i32, i32, i32, i32) {
        (
            self.xmin as i32,
            self.ymin as i32,
            self.xmax as i32,
            self.ymax as i32,
        )
    }
}
