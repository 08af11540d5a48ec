use crate::constants::MAX_PIXEL_RATIO;
use glam::Vec2;

/// Window size in CSS pixels together with the device pixel ratio.
///
/// Width and height are always at least 1 so that aspect ratios and pointer
/// normalisation never divide by zero.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewportState {
    pub width: u32,
    pub height: u32,
    pub device_pixel_ratio: f64,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            width: 1,
            height: 1,
            device_pixel_ratio: 1.0,
        }
    }
}

impl ViewportState {
    /// Builds a viewport from raw window metrics (`innerWidth`, `innerHeight`,
    /// `devicePixelRatio`), clamping degenerate values.
    pub fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        Self {
            width: clamp_extent(width),
            height: clamp_extent(height),
            device_pixel_ratio,
        }
    }

    #[inline]
    pub fn width_f32(&self) -> f32 {
        self.width as f32
    }

    #[inline]
    pub fn height_f32(&self) -> f32 {
        self.height as f32
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width_f32() / self.height_f32()
    }

    /// Pixel ratio used for render target sizing, capped at [`MAX_PIXEL_RATIO`].
    pub fn render_pixel_ratio(&self) -> f64 {
        let dpr = if self.device_pixel_ratio.is_finite() && self.device_pixel_ratio > 0.0 {
            self.device_pixel_ratio
        } else {
            1.0
        };
        dpr.min(MAX_PIXEL_RATIO)
    }

    /// Backing store size of the canvas in physical pixels.
    pub fn backing_size(&self) -> (u32, u32) {
        let r = self.render_pixel_ratio();
        let w = (self.width as f64 * r).ceil() as u32;
        let h = (self.height as f64 * r).ceil() as u32;
        (w.max(1), h.max(1))
    }

    /// Converts client pixel coordinates to normalized device coordinates
    /// (+y up, matching the projection used by [`crate::CameraState`]).
    #[inline]
    pub fn pointer_to_ndc(&self, x: f32, y: f32) -> Vec2 {
        Vec2::new(
            x / self.width_f32() * 2.0 - 1.0,
            -(y / self.height_f32() * 2.0 - 1.0),
        )
    }
}

fn clamp_extent(v: f64) -> u32 {
    if v.is_finite() {
        v.round().max(1.0) as u32
    } else {
        1
    }
}
