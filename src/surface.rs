#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

/// A point in either screen (client) or surface pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Mapping from on-screen client coordinates to surface pixel coordinates.
///
/// The surface has a fixed pixel grid independent of its displayed CSS size,
/// so pointer positions must be rescaled by the surface-pixel-per-CSS-pixel
/// ratio on each axis. Skipping this produces offset or stretched strokes
/// whenever the canvas is displayed at a size other than its pixel
/// dimensions.
///
/// `rect_left` / `rect_top` are the canvas bounding rectangle's origin in CSS
/// pixels; `scale_x` / `scale_y` are the per-axis ratios.
#[derive(Debug, Clone, Copy)]
pub struct Mapping {
    pub rect_left: f64,
    pub rect_top: f64,
    pub scale_x: f64,
    pub scale_y: f64,
}

impl Default for Mapping {
    fn default() -> Self {
        Self { rect_left: 0.0, rect_top: 0.0, scale_x: 1.0, scale_y: 1.0 }
    }
}

impl Mapping {
    /// Build a mapping for a surface of `surface_w` × `surface_h` device
    /// pixels displayed inside the given bounding rectangle.
    ///
    /// A zero displayed extent (canvas not laid out yet) falls back to a 1:1
    /// scale on that axis.
    #[must_use]
    pub fn new(
        surface_w: u32,
        surface_h: u32,
        rect_left: f64,
        rect_top: f64,
        displayed_w: f64,
        displayed_h: f64,
    ) -> Self {
        let scale_x = if displayed_w > 0.0 {
            f64::from(surface_w) / displayed_w
        } else {
            1.0
        };
        let scale_y = if displayed_h > 0.0 {
            f64::from(surface_h) / displayed_h
        } else {
            1.0
        };
        Self { rect_left, rect_top, scale_x, scale_y }
    }

    /// Convert a client-space point (CSS pixels) to surface pixel
    /// coordinates.
    #[must_use]
    pub fn to_surface(&self, client: Point) -> Point {
        Point {
            x: (client.x - self.rect_left) * self.scale_x,
            y: (client.y - self.rect_top) * self.scale_y,
        }
    }
}
