// Host-side tests for tuning constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/constants.rs"]
mod constants;

use constants::*;
use planes_core::constants as core;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(WHEEL_LINE_HEIGHT_PX > 0.0);
    assert!(TOUCH_SCROLL_MULTIPLIER >= 1.0);
    assert!(PRELOAD_TIMEOUT_MS > 0);

    // Camera frustum must contain the z = 0 image plane
    assert!(core::CAMERA_NEAR < core::CAMERA_Z && core::CAMERA_Z < core::CAMERA_FAR);

    // Easing factors are fractions
    assert!(core::SCROLL_EASE > 0.0 && core::SCROLL_EASE <= 1.0);
    assert!(core::SCROLL_SPEED_SMOOTHING > 0.0 && core::SCROLL_SPEED_SMOOTHING <= 1.0);

    // Mask edges are ordered
    assert!(core::MASK_EDGE_LOW < core::MASK_EDGE_HIGH);
    assert!(core::AREA_EDGE_END < core::AREA_EDGE_START);
}

#[test]
fn default_config_targets_standard_markup() {
    let c = SketchConfig::default();
    assert_eq!(c.container_id, "container");
    assert_eq!(c.content_id, "content");
    assert_eq!(c.image_selector, "img");
    assert_eq!(c.preload_timeout_ms, 4000);
}

#[test]
fn webgl_fallback_renders_scene_into_8bit_target() {
    assert_eq!(scene_format(wgpu::Backend::Gl), wgpu::TextureFormat::Rgba8Unorm);
    assert_eq!(
        scene_format(wgpu::Backend::BrowserWebGpu),
        wgpu::TextureFormat::Rgba16Float
    );
}
