use super::EventQueue;
use crate::input;
use planes_core::SceneEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer moves anywhere in the window, reported relative to the canvas.
pub fn wire_pointermove(window: &web::Window, canvas: &web::HtmlCanvasElement, queue: &EventQueue) {
    let canvas = canvas.clone();
    let queue = queue.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_css(&ev, &canvas);
        super::push(&queue, SceneEvent::PointerMove { x: pos.x, y: pos.y });
    }) as Box<dyn FnMut(_)>);
    let _ = window.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}
