use super::EventQueue;
use crate::dom;
use crate::input::{self, TouchState};
use planes_core::{SceneEvent, SmoothScroll};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_resize(window: &web::Window, queue: &EventQueue) {
    let queue = queue.clone();
    let closure = Closure::wrap(Box::new(move || {
        if let Some(w) = web::window() {
            super::push(&queue, SceneEvent::Resize(dom::viewport_from_window(&w)));
        }
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Wheel and touch-drag deltas feed the virtual scroll target.
pub fn wire_scroll_input(window: &web::Window, scroll: &Rc<RefCell<SmoothScroll>>) {
    let scroll_wheel = scroll.clone();
    let wheel = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        let vh = web::window()
            .map(|w| dom::viewport_from_window(&w).height_f32())
            .unwrap_or(1.0);
        scroll_wheel
            .borrow_mut()
            .add_delta(input::wheel_delta_px(&ev, vh));
    }) as Box<dyn FnMut(_)>);
    let _ = window.add_event_listener_with_callback("wheel", wheel.as_ref().unchecked_ref());
    wheel.forget();

    let touch = Rc::new(RefCell::new(TouchState::default()));

    let touch_start = touch.clone();
    let start = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        touch_start.borrow_mut().last_y = input::first_touch_y(&ev);
    }) as Box<dyn FnMut(_)>);
    let _ = window.add_event_listener_with_callback("touchstart", start.as_ref().unchecked_ref());
    start.forget();

    let touch_move = touch;
    let scroll_touch = scroll.clone();
    let moved = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if let Some(y) = input::first_touch_y(&ev) {
            let delta = touch_move.borrow_mut().drag_to(y);
            scroll_touch.borrow_mut().add_delta(delta);
        }
    }) as Box<dyn FnMut(_)>);
    let _ = window.add_event_listener_with_callback("touchmove", moved.as_ref().unchecked_ref());
    moved.forget();
}
