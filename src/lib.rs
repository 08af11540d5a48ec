#![cfg(target_arch = "wasm32")]
use planes_core::{ElapsedClock, PlaneScene, SmoothScroll};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod preload;
mod render;

use constants::SketchConfig;
use preload::Readiness;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("planes-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let defaults = SketchConfig::default();
    let container = document
        .get_element_by_id(&defaults.container_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", defaults.container_id))?;
    let config = defaults.with_overrides_from(&container);
    let content: web::HtmlElement = document
        .get_element_by_id(&config.content_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", config.content_id))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let images = dom::query_images(&content, &config.image_selector);
    match preload::wait_until_ready(&document, &images, config.preload_timeout_ms).await {
        Readiness::Ready => log::info!("{} images and fonts ready", images.len()),
        Readiness::TimedOut => log::warn!(
            "preload still pending after {}ms; starting anyway",
            config.preload_timeout_ms
        ),
        Readiness::Failed(e) => log::warn!("preload failed ({}); starting anyway", e),
    }

    let viewport = dom::viewport_from_window(&window);
    let canvas = dom::create_canvas(&document, &container)?;
    dom::sync_canvas_backing_size(&canvas, &viewport);
    let gpu = frame::init_gpu(&canvas, &viewport).await?;

    let events: events::EventQueue = Rc::new(RefCell::new(VecDeque::new()));
    let scroll = Rc::new(RefCell::new(SmoothScroll::new(dom::scroll_limit(
        &content, &viewport,
    ))));
    events::pointer::wire_pointermove(&window, &canvas, &events);
    events::window::wire_resize(&window, &events);
    events::window::wire_scroll_input(&window, &scroll);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene: PlaneScene::new(viewport),
        gpu,
        events,
        scroll,
        hover_listeners: Default::default(),
        canvas,
        content,
        config,
        clock: ElapsedClock::new(),
    }));
    frame_ctx.borrow_mut().rebuild(viewport);
    frame::start_loop(frame_ctx);
    Ok(())
}
