/// A 2D axis-aligned rectangle represented by minimum and maximum points.
///
/// Used for column regions in both coordinate spaces the crate deals
/// with: normalized page fractions in [0,1] and pixel positions on a
/// rendered page image. Coordinates are `f64`; pixel quantization only
/// happens at the [`Bbox::pixel_origin`] / [`Bbox::pixel_size`] boundary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bbox {
    /// The minimum point of the rectangle (top-left in image space).
    pub min: glam::DVec2,
    /// The maximum point of the rectangle (bottom-right in image space).
    pub max: glam::DVec2,
}

impl Bbox {
    /// Creates a new rectangle from minimum and maximum points.
    ///
    /// # Example
    /// ```
    /// use glam::DVec2;
    /// use glass_core::geometry::Bbox;
    /// let bbox = Bbox::new(DVec2::new(0.0, 0.0), DVec2::new(10.0, 5.0));
    /// assert_eq!(bbox.width(), 10.0);
    /// ```
    pub fn new(min: glam::DVec2, max: glam::DVec2) -> Self {
        Self { min, max }
    }

    /// Creates a new rectangle from a minimum point and size vector.
    ///
    /// # Example
    /// ```
    /// use glam::DVec2;
    /// use glass_core::geometry::Bbox;
    /// let bbox = Bbox::new_from_min_size(DVec2::new(1.0, 2.0), DVec2::new(5.0, 3.0));
    /// assert_eq!(bbox.max, DVec2::new(6.0, 5.0));
    /// ```
    pub fn new_from_min_size(min: glam::DVec2, size: glam::DVec2) -> Self {
        Self {
            min,
            max: min + size,
        }
    }

    /// Creates a rectangle spanning `[x_start, x_end]` horizontally and
    /// `[y_start, y_end]` vertically.
    ///
    /// This is the natural constructor for a column region: horizontal
    /// extent from the template, vertical extent from the table band.
    pub fn from_spans(x_start: f64, x_end: f64, y_start: f64, y_end: f64) -> Self {
        Self {
            min: glam::DVec2::new(x_start, y_start),
            max: glam::DVec2::new(x_end, y_end),
        }
    }

    /// Width of the rectangle.
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Height of the rectangle.
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Size of the rectangle as a vector (width, height).
    pub fn size(&self) -> glam::DVec2 {
        self.max - self.min
    }

    /// Area of the rectangle (width x height).
    pub fn area(&self) -> f64 {
        let length = self.max - self.min;

        length.x * length.y
    }

    /// Scales both corners by a uniform factor.
    ///
    /// Scaling by image width/height maps a normalized rectangle into
    /// pixel space; scaling by a display factor maps full-resolution
    /// pixels into the widget's canvas.
    ///
    /// # Example
    /// ```
    /// use glam::DVec2;
    /// use glass_core::geometry::Bbox;
    /// let unit = Bbox::new(DVec2::new(0.1, 0.2), DVec2::new(0.3, 0.4));
    /// let scaled = unit.scale(100.0);
    /// assert_eq!(scaled.min, DVec2::new(10.0, 20.0));
    /// assert_eq!(scaled.max, DVec2::new(30.0, 40.0));
    /// ```
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            min: self.min * factor,
            max: self.max * factor,
        }
    }

    /// Clamps the rectangle to stay within the specified bounds.
    ///
    /// Used to keep overlay drawing inside the page image when a column
    /// extends past an edge.
    pub fn clamp(&self, min_bounds: glam::DVec2, max_bounds: glam::DVec2) -> Self {
        Self {
            min: self.min.max(min_bounds),
            max: self.max.min(max_bounds),
        }
    }

    /// Top-left corner floored to whole pixels.
    pub fn pixel_origin(&self) -> (i32, i32) {
        (self.min.x.floor() as i32, self.min.y.floor() as i32)
    }

    /// Size floored to whole pixels.
    ///
    /// A degenerate rectangle (inverted or empty on either axis) floors
    /// to a zero or negative span; callers decide whether to skip it.
    pub fn pixel_size(&self) -> (i32, i32) {
        (
            self.width().floor() as i32,
            self.height().floor() as i32,
        )
    }
}
