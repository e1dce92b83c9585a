use foundation::math::Vec2;

/// Current drawing-surface dimensions in CSS-style logical pixels, plus the
/// device pixel ratio for crisp rasterization.
///
/// Renderers must query this at the start of every frame rather than caching
/// it: the host layout can change between frames.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub width_px: f64,
    pub height_px: f64,
    pub device_pixel_ratio: f64,
}

impl Viewport {
    pub fn new(width_px: f64, height_px: f64, device_pixel_ratio: f64) -> Self {
        Self {
            width_px,
            height_px,
            device_pixel_ratio,
        }
    }

    /// Physical backing-store width (logical width times pixel ratio).
    pub fn physical_width(&self) -> f64 {
        self.width_px * self.device_pixel_ratio
    }

    pub fn physical_height(&self) -> f64 {
        self.height_px * self.device_pixel_ratio
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width_px / 2.0, self.height_px / 2.0)
    }

    /// A degenerate viewport cannot be drawn to or hit-tested against.
    pub fn is_degenerate(&self) -> bool {
        self.width_px <= 0.0 || self.height_px <= 0.0
    }
}
