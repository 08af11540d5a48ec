use crate::constants::{TOUCH_SCROLL_MULTIPLIER, WHEEL_LINE_HEIGHT_PX};
use glam::Vec2;
use web_sys as web;

/// Pointer position relative to the canvas, in CSS pixels.
#[inline]
pub fn pointer_canvas_css(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}

/// Wheel delta normalised to pixels.
pub fn wheel_delta_px(ev: &web::WheelEvent, viewport_height: f32) -> f32 {
    let dy = ev.delta_y() as f32;
    match ev.delta_mode() {
        web::WheelEvent::DOM_DELTA_LINE => dy * WHEEL_LINE_HEIGHT_PX,
        web::WheelEvent::DOM_DELTA_PAGE => dy * viewport_height,
        _ => dy,
    }
}

#[derive(Default, Clone, Copy)]
pub struct TouchState {
    pub last_y: Option<f32>,
}

impl TouchState {
    /// Scroll delta for a finger now at `y`; dragging up scrolls down.
    pub fn drag_to(&mut self, y: f32) -> f32 {
        let delta = self
            .last_y
            .map(|last| (last - y) * TOUCH_SCROLL_MULTIPLIER)
            .unwrap_or(0.0);
        self.last_y = Some(y);
        delta
    }
}

pub fn first_touch_y(ev: &web::TouchEvent) -> Option<f32> {
    ev.touches().get(0).map(|t| t.client_y() as f32)
}
