use crate::constants::{HOVER_DURATION_SEC, POINTER_UV_DEFAULT};
use crate::hover::{HoverEvent, HoverState};
use glam::Vec2;

/// Per-mesh uniform block. Layout matches `Plane` in `plane.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PlaneUniforms {
    pub offset: [f32; 2],
    pub pointer_uv: [f32; 2],
    pub time: f32,
    pub hovered: f32,
    pub progress: f32,
    pub _pad: f32,
}

impl Default for PlaneUniforms {
    fn default() -> Self {
        Self {
            offset: [0.0, 0.0],
            pointer_uv: POINTER_UV_DEFAULT,
            time: 0.0,
            hovered: 0.0,
            progress: 0.0,
            _pad: 0.0,
        }
    }
}

/// Shared material description: one shader program, default uniform values.
///
/// Every mesh gets its own [`PlaneMaterial`] from [`MaterialTemplate::instantiate`];
/// the uniform blocks are plain values and never alias each other.
#[derive(Clone, Debug)]
pub struct MaterialTemplate {
    pub shader: &'static str,
    defaults: PlaneUniforms,
    hover_duration: f32,
}

impl Default for MaterialTemplate {
    fn default() -> Self {
        Self {
            shader: crate::PLANE_WGSL,
            defaults: PlaneUniforms::default(),
            hover_duration: HOVER_DURATION_SEC,
        }
    }
}

impl MaterialTemplate {
    pub fn instantiate(&self) -> PlaneMaterial {
        PlaneMaterial {
            uniforms: self.defaults,
            hover: HoverState::new(self.hover_duration),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlaneMaterial {
    pub uniforms: PlaneUniforms,
    pub hover: HoverState,
}

impl PlaneMaterial {
    #[inline]
    pub fn set_offset(&mut self, offset: Vec2) {
        self.uniforms.offset = offset.to_array();
    }

    #[inline]
    pub fn set_pointer_uv(&mut self, uv: Vec2) {
        self.uniforms.pointer_uv = uv.to_array();
    }

    pub fn apply_hover(&mut self, event: HoverEvent, now: f32) {
        self.hover.apply(event, now);
    }

    /// Pushes the frame time and the sampled hover pair into the uniforms.
    pub fn tick(&mut self, now: f32) {
        let (hovered, progress) = self.hover.sample(now);
        self.uniforms.time = now;
        self.uniforms.hovered = hovered;
        self.uniforms.progress = progress;
    }
}
