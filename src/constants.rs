//! Page wiring and input tuning for the web front-end.
//!
//! Element ids and the image selector can be overridden per page through
//! `data-*` attributes on the container element (see
//! [`SketchConfig::with_overrides_from`]).

// Pixels per line for `WheelEvent.deltaMode == DOM_DELTA_LINE`
pub const WHEEL_LINE_HEIGHT_PX: f32 = 16.0;

// Touch drags scroll faster than the finger moves
pub const TOUCH_SCROLL_MULTIPLIER: f32 = 2.0;

pub const PRELOAD_TIMEOUT_MS: i32 = 4000;

/// Offscreen scene format. WebGL2 only renders to float targets with
/// `EXT_color_buffer_float`, so the GL backend gets an 8-bit target.
pub fn scene_format(backend: wgpu::Backend) -> wgpu::TextureFormat {
    match backend {
        wgpu::Backend::Gl => wgpu::TextureFormat::Rgba8Unorm,
        _ => wgpu::TextureFormat::Rgba16Float,
    }
}

#[derive(Clone, Debug)]
pub struct SketchConfig {
    /// Element that receives the canvas.
    pub container_id: String,
    /// Scroll container; translated by the scroll offset every frame.
    pub content_id: String,
    pub image_selector: String,
    pub preload_timeout_ms: i32,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            container_id: "container".to_string(),
            content_id: "content".to_string(),
            image_selector: "img".to_string(),
            preload_timeout_ms: PRELOAD_TIMEOUT_MS,
        }
    }
}

impl SketchConfig {
    /// Reads `data-content`, `data-images` and `data-preload-timeout` from the
    /// container element. Missing or unparsable values keep the defaults.
    pub fn with_overrides_from(mut self, container: &web_sys::Element) -> Self {
        if let Some(id) = container.get_attribute("data-content") {
            self.content_id = id;
        }
        if let Some(selector) = container.get_attribute("data-images") {
            self.image_selector = selector;
        }
        if let Some(ms) = container
            .get_attribute("data-preload-timeout")
            .and_then(|v| v.trim().parse::<i32>().ok())
            .filter(|ms| *ms >= 0)
        {
            self.preload_timeout_ms = ms;
        }
        self
    }
}
