use crate::constants::SketchConfig;
use crate::dom;
use crate::events::hover::HoverListeners;
use crate::events::EventQueue;
use crate::render::{GpuState, PlaneMesh};
use planes_core::{ElapsedClock, PlaneScene, SceneEvent, ScrollProvider, SmoothScroll, ViewportState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: PlaneScene<PlaneMesh>,
    pub gpu: GpuState,
    pub events: EventQueue,
    pub scroll: Rc<RefCell<SmoothScroll>>,
    pub hover_listeners: HoverListeners,

    pub canvas: web::HtmlCanvasElement,
    pub content: web::HtmlElement,
    pub config: SketchConfig,
    pub clock: ElapsedClock,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = self.clock.elapsed_secs();

        let pending: Vec<SceneEvent> = self.events.borrow_mut().drain(..).collect();
        if let Some(viewport) = self.scene.handle_events(pending, now) {
            self.rebuild(viewport);
        }

        let mut scroll = self.scroll.borrow_mut();
        match self.scene.frame(now, &mut *scroll, &mut self.gpu) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("surface lost or outdated; reconfiguring");
                self.gpu.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("render error: out of memory");
            }
            Err(e) => log::warn!("render error: {:?}", e),
        }
        dom::apply_scroll_transform(&self.content, &*scroll);
    }

    /// Re-measures every image and rebuilds all meshes for `viewport`.
    pub fn rebuild(&mut self, viewport: ViewportState) {
        dom::sync_canvas_backing_size(&self.canvas, &viewport);
        let change = self
            .scroll
            .borrow_mut()
            .set_limit(dom::scroll_limit(&self.content, &viewport));
        // content is still translated by the pre-clamp offset until the
        // transform below runs
        let images = dom::collect_images(&self.content, &self.config.image_selector, &change);
        dom::apply_scroll_transform(&self.content, &*self.scroll.borrow());
        self.scene.resize(viewport, &images, &mut self.gpu, change.clamped);
        self.hover_listeners.rebind(&images, &self.events);
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement, viewport: &ViewportState) -> anyhow::Result<GpuState> {
    let gpu = GpuState::new(canvas, viewport.backing_size()).await?;
    log::info!("WebGPU ready");
    Ok(gpu)
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(closure) = tick.borrow().as_ref() {
        let _ = w.request_animation_frame(closure.as_ref().unchecked_ref());
    }
}
