use super::EventQueue;
use crate::dom::DomImage;
use planes_core::{HoverEvent, ImageId, SceneEvent};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Bound {
    element: web::HtmlImageElement,
    enter: Closure<dyn FnMut()>,
    leave: Closure<dyn FnMut()>,
}

/// Per-image `pointerenter`/`pointerleave` listeners. Rebound on every mesh
/// rebuild; the previous closures are detached and dropped.
#[derive(Default)]
pub struct HoverListeners {
    bound: Vec<Bound>,
}

impl HoverListeners {
    pub fn rebind(&mut self, images: &[DomImage], queue: &EventQueue) {
        self.clear();
        self.bound.reserve(images.len());
        for (index, image) in images.iter().enumerate() {
            let id = ImageId(index);
            let enter = hover_closure(queue, id, HoverEvent::Enter);
            let leave = hover_closure(queue, id, HoverEvent::Leave);
            let el = &image.element;
            let _ = el.add_event_listener_with_callback("pointerenter", enter.as_ref().unchecked_ref());
            let _ = el.add_event_listener_with_callback("pointerleave", leave.as_ref().unchecked_ref());
            self.bound.push(Bound {
                element: el.clone(),
                enter,
                leave,
            });
        }
    }

    pub fn clear(&mut self) {
        for b in self.bound.drain(..) {
            let _ = b
                .element
                .remove_event_listener_with_callback("pointerenter", b.enter.as_ref().unchecked_ref());
            let _ = b
                .element
                .remove_event_listener_with_callback("pointerleave", b.leave.as_ref().unchecked_ref());
        }
    }
}

impl Drop for HoverListeners {
    fn drop(&mut self) {
        self.clear();
    }
}

fn hover_closure(queue: &EventQueue, image: ImageId, event: HoverEvent) -> Closure<dyn FnMut()> {
    let queue = queue.clone();
    Closure::wrap(Box::new(move || {
        super::push(&queue, SceneEvent::Hover { image, event });
    }) as Box<dyn FnMut()>)
}
