// Shared fakes for the host-side scene tests.
#![allow(dead_code)]

use planes_core::{
    BoundingBox, ImageId, MeshFactory, MeshRelease, PlaneGeometry, PlaneMaterial, PlaneScene,
    PlanesError, SceneRenderer, ScrollProvider, StaticImage,
};

pub fn image(top: f32, left: f32, width: f32, height: f32) -> StaticImage {
    StaticImage {
        bbox: BoundingBox {
            top,
            left,
            width,
            height,
        },
        width_attr: None,
    }
}

/// Hands out increasing handle numbers and remembers what was released.
#[derive(Default)]
pub struct CountingFactory {
    pub created: usize,
    pub released: Vec<u32>,
    next: u32,
}

impl MeshRelease for CountingFactory {
    type Handle = u32;

    fn release_mesh(&mut self, handle: u32) {
        self.released.push(handle);
    }
}

impl MeshFactory<StaticImage> for CountingFactory {
    fn create_mesh(
        &mut self,
        _id: ImageId,
        _source: &StaticImage,
        _geometry: &PlaneGeometry,
        _material: &PlaneMaterial,
    ) -> Result<u32, PlanesError> {
        self.created += 1;
        self.next += 1;
        Ok(self.next)
    }
}

/// Snapshot of what the renderer was handed on each call.
#[derive(Default)]
pub struct RecordingRenderer {
    pub frames: Vec<RenderedFrame>,
}

pub struct RenderedFrame {
    pub positions: Vec<glam::Vec2>,
    pub offsets: Vec<[f32; 2]>,
    pub post_time: f32,
    pub post_speed: f32,
}

impl SceneRenderer<u32> for RecordingRenderer {
    type Error = ();

    fn render(&mut self, scene: &PlaneScene<u32>) -> Result<(), ()> {
        self.frames.push(RenderedFrame {
            positions: scene.records().iter().map(|r| r.position).collect(),
            offsets: scene
                .records()
                .iter()
                .map(|r| r.material.uniforms.offset)
                .collect(),
            post_time: scene.post().uniforms().time,
            post_speed: scene.post().uniforms().scroll_speed,
        });
        Ok(())
    }
}

/// Scroll provider that jumps by `step` on every advance and reports a
/// velocity that changes once it has advanced, so tests can tell which value
/// was read.
pub struct SteppingScroll {
    pub offset: f32,
    pub step: f32,
    pub advances: u32,
}

impl SteppingScroll {
    pub fn new(step: f32) -> Self {
        Self {
            offset: 0.0,
            step,
            advances: 0,
        }
    }
}

impl ScrollProvider for SteppingScroll {
    fn advance(&mut self) {
        self.offset += self.step;
        self.advances += 1;
    }

    fn offset(&self) -> f32 {
        self.offset
    }

    fn velocity(&self) -> f32 {
        self.advances as f32
    }
}
