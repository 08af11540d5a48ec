//! Full-screen wipe pass parameters and a host-side reference of its maths.
//!
//! The fragment stage samples noise at `(uv * 10, time)`, biases it with a
//! vertical band near the top of the screen, thresholds the sum into a mask
//! and mixes white with the (scroll-sheared) scene colour through that mask.

use crate::constants::{
    AREA_EDGE_END, AREA_EDGE_START, MASK_EDGE_HIGH, MASK_EDGE_LOW, NOISE_SCALE, SHEAR_STRENGTH,
};
use crate::noise::cnoise;
use glam::{Vec2, Vec3, Vec4};

/// Uniform block of the wipe pass. Layout matches `Post` in `post.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PostUniforms {
    pub resolution: [f32; 2],
    pub time: f32,
    pub scroll_speed: f32,
}

/// The single post-process pass. Created once, mutated every frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PostProcessState {
    uniforms: PostUniforms,
}

impl PostProcessState {
    pub fn new(backing_size: (u32, u32)) -> Self {
        let mut state = Self::default();
        state.set_resolution(backing_size);
        state
    }

    pub fn set_frame(&mut self, elapsed: f32, scroll_speed: f32) {
        self.uniforms.time = elapsed;
        self.uniforms.scroll_speed = scroll_speed;
    }

    pub fn set_resolution(&mut self, (width, height): (u32, u32)) {
        self.uniforms.resolution = [width as f32, height as f32];
    }

    #[inline]
    pub fn uniforms(&self) -> &PostUniforms {
        &self.uniforms
    }
}

/// GLSL `smoothstep`, including reversed edges (`edge0 > edge1`).
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Vertical bias in [-1, 1]: -1 at the top edge, +1 below the band.
#[inline]
pub fn area(uv_y: f32) -> f32 {
    smoothstep(AREA_EDGE_START, AREA_EDGE_END, uv_y) * 2.0 - 1.0
}

/// Noise remapped to roughly [0, 1].
#[inline]
pub fn noise_field(uv: Vec2, time: f32) -> f32 {
    0.5 * (cnoise(Vec3::new(uv.x * NOISE_SCALE, uv.y * NOISE_SCALE, time)) + 1.0)
}

/// Binary-ish reveal mask from the combined noise + area value.
#[inline]
pub fn reveal_mask(noise_plus_area: f32) -> f32 {
    smoothstep(MASK_EDGE_LOW, MASK_EDGE_HIGH, noise_plus_area)
}

/// Horizontal shear toward the screen centre, scaled by scroll speed.
#[inline]
pub fn sheared_uv(uv: Vec2, area: f32, scroll_speed: f32) -> Vec2 {
    Vec2::new(uv.x - (uv.x - 0.5) * SHEAR_STRENGTH * area * scroll_speed, uv.y)
}

/// Output colour for one fragment; `sample` reads the scene at a GL-style uv
/// (origin bottom-left).
pub fn wipe_fragment(
    uv: Vec2,
    uniforms: &PostUniforms,
    sample: impl Fn(Vec2) -> Vec4,
) -> Vec4 {
    let a = area(uv.y);
    let n = reveal_mask(noise_field(uv, uniforms.time) + a);
    let color = sample(sheared_uv(uv, a, uniforms.scroll_speed));
    Vec4::ONE.lerp(color, n)
}
