//! Per-frame orchestration of the plane scene.
//!
//! The frontend owns one [`PlaneScene`] and calls, once per animation frame:
//! [`PlaneScene::handle_events`] with whatever its DOM callbacks queued, then
//! [`PlaneScene::resize`] if that returned a viewport, then
//! [`PlaneScene::frame`].

use crate::camera::CameraState;
use crate::hover::HoverEvent;
use crate::image::{ImageId, ImageRecord, ImageSource};
use crate::layout::position_all;
use crate::material::MaterialTemplate;
use crate::post::PostProcessState;
use crate::raycast::update_pointer_uv;
use crate::registry::{ImageRegistry, MeshFactory, MeshRelease};
use crate::scroll::ScrollProvider;
use crate::viewport::ViewportState;
use fnv::FnvHashMap;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SceneEvent {
    /// Pointer position in canvas CSS pixels (top-left origin).
    PointerMove { x: f32, y: f32 },
    Hover { image: ImageId, event: HoverEvent },
    Resize(ViewportState),
}

/// The rasterizer seam. Called once per frame after every uniform is final.
pub trait SceneRenderer<H> {
    type Error;

    fn render(&mut self, scene: &PlaneScene<H>) -> Result<(), Self::Error>;
}

#[derive(Debug)]
pub struct PlaneScene<H> {
    viewport: ViewportState,
    camera: CameraState,
    registry: ImageRegistry<H>,
    post: PostProcessState,
    pointer_px: Option<Vec2>,
    last_hit: Option<ImageId>,
    frame_index: u64,
}

impl<H> PlaneScene<H> {
    pub fn new(viewport: ViewportState) -> Self {
        Self::with_template(viewport, MaterialTemplate::default())
    }

    pub fn with_template(viewport: ViewportState, template: MaterialTemplate) -> Self {
        Self {
            camera: CameraState::new(&viewport),
            post: PostProcessState::new(viewport.backing_size()),
            registry: ImageRegistry::new(template),
            viewport,
            pointer_px: None,
            last_hit: None,
            frame_index: 0,
        }
    }

    /// Applies queued input. Pointer moves keep the latest position, hover
    /// events keep the latest per image, and the last resize (if any) is
    /// returned for the caller to pass to [`PlaneScene::resize`] together with
    /// a fresh snapshot of the image boxes.
    pub fn handle_events<I>(&mut self, events: I, now: f32) -> Option<ViewportState>
    where
        I: IntoIterator<Item = SceneEvent>,
    {
        let mut hovers: FnvHashMap<ImageId, HoverEvent> = FnvHashMap::default();
        let mut resize = None;
        for event in events {
            match event {
                SceneEvent::PointerMove { x, y } => self.pointer_px = Some(Vec2::new(x, y)),
                SceneEvent::Hover { image, event } => {
                    hovers.insert(image, event);
                }
                SceneEvent::Resize(viewport) => resize = Some(viewport),
            }
        }
        for (id, event) in hovers {
            match self.registry.get_mut(id) {
                Some(record) => record.material.apply_hover(event, now),
                None => log::trace!("dropping {event:?} for unknown image {id:?}"),
            }
        }
        resize
    }

    /// Adopts a new viewport and rebuilds every mesh from `sources`.
    /// Returns the number of meshes built.
    pub fn resize<S, F>(
        &mut self,
        viewport: ViewportState,
        sources: &[S],
        factory: &mut F,
        scroll_offset: f32,
    ) -> usize
    where
        S: ImageSource,
        F: MeshFactory<S, Handle = H>,
    {
        self.viewport = viewport;
        self.camera.update(&viewport);
        self.post.set_resolution(viewport.backing_size());
        let built = self.registry.refresh(sources, factory);
        self.last_hit = None;
        position_all(self.registry.records_mut(), &self.viewport, scroll_offset);
        log::info!(
            "viewport {}x{} @{:.2}x, fov {:.2}°, {} planes",
            viewport.width,
            viewport.height,
            viewport.render_pixel_ratio(),
            self.camera.fov_degrees,
            built
        );
        built
    }

    pub fn dispose<F>(&mut self, factory: &mut F) -> usize
    where
        F: MeshRelease<Handle = H> + ?Sized,
    {
        self.last_hit = None;
        self.registry.dispose_all(factory)
    }

    /// One frame: raycast, post uniforms, material time, scroll advance,
    /// reposition, render. Post uniforms read the velocity before the
    /// scroll provider advances.
    pub fn frame<S, R>(
        &mut self,
        elapsed: f32,
        scroll: &mut S,
        renderer: &mut R,
    ) -> Result<(), R::Error>
    where
        S: ScrollProvider + ?Sized,
        R: SceneRenderer<H> + ?Sized,
    {
        let ray = self.camera.ray_from_ndc(self.pointer_ndc());
        self.last_hit = update_pointer_uv(self.registry.records_mut(), &ray);

        self.post.set_frame(elapsed, scroll.velocity());

        for record in self.registry.records_mut() {
            record.material.tick(elapsed);
        }

        scroll.advance();
        position_all(self.registry.records_mut(), &self.viewport, scroll.offset());

        self.frame_index += 1;
        renderer.render(self)
    }

    /// Pointer in NDC; the centre of the screen until the first move.
    pub fn pointer_ndc(&self) -> Vec2 {
        self.pointer_px
            .map(|p| self.viewport.pointer_to_ndc(p.x, p.y))
            .unwrap_or(Vec2::ZERO)
    }

    #[inline]
    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    #[inline]
    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    #[inline]
    pub fn post(&self) -> &PostProcessState {
        &self.post
    }

    #[inline]
    pub fn registry(&self) -> &ImageRegistry<H> {
        &self.registry
    }

    #[inline]
    pub fn records(&self) -> &[ImageRecord<H>] {
        self.registry.records()
    }

    /// Image under the pointer as of the last frame.
    #[inline]
    pub fn last_hit(&self) -> Option<ImageId> {
        self.last_hit
    }

    #[inline]
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Nothing;

    impl SceneRenderer<()> for Nothing {
        type Error = ();

        fn render(&mut self, _scene: &PlaneScene<()>) -> Result<(), ()> {
            Ok(())
        }
    }

    struct Still;

    impl ScrollProvider for Still {
        fn advance(&mut self) {}
        fn offset(&self) -> f32 {
            0.0
        }
        fn velocity(&self) -> f32 {
            0.0
        }
    }

    #[test]
    fn last_resize_wins() {
        let mut scene: PlaneScene<()> = PlaneScene::new(ViewportState::new(800.0, 600.0, 1.0));
        let a = ViewportState::new(640.0, 480.0, 1.0);
        let b = ViewportState::new(1024.0, 768.0, 2.0);
        let events = [
            SceneEvent::Resize(a),
            SceneEvent::PointerMove { x: 10.0, y: 10.0 },
            SceneEvent::Resize(b),
        ];
        assert_eq!(scene.handle_events(events, 0.0), Some(b));
    }

    #[test]
    fn pointer_defaults_to_centre() {
        let mut scene: PlaneScene<()> = PlaneScene::new(ViewportState::new(800.0, 600.0, 1.0));
        assert_eq!(scene.pointer_ndc(), Vec2::ZERO);
        scene.handle_events([SceneEvent::PointerMove { x: 0.0, y: 0.0 }], 0.0);
        assert_eq!(scene.pointer_ndc(), Vec2::new(-1.0, 1.0));
    }

    #[test]
    fn empty_scene_still_renders() {
        let mut scene: PlaneScene<()> = PlaneScene::new(ViewportState::new(800.0, 600.0, 1.0));
        assert!(scene.frame(0.5, &mut Still, &mut Nothing).is_ok());
        assert_eq!(scene.frame_index(), 1);
        assert_eq!(scene.post().uniforms().time, 0.5);
        assert_eq!(scene.last_hit(), None);
    }
}
