use crate::image::{effective_width, BoundingBox, ImageRecord};
use crate::viewport::ViewportState;
use glam::Vec2;

/// Maps a DOM box (top-left origin, +y down) into the camera-centred world
/// (origin at the viewport centre, +y up), shifted by the scroll offset.
pub fn plane_position(
    bbox: &BoundingBox,
    width_attr: Option<f32>,
    viewport: &ViewportState,
    scroll_offset: f32,
) -> Vec2 {
    let y = scroll_offset - bbox.top + viewport.height_f32() / 2.0 - bbox.height / 2.0;
    let x = bbox.left - viewport.width_f32() / 2.0 + effective_width(bbox, width_attr) / 2.0;
    Vec2::new(x, y)
}

/// Repositions every mesh for this frame's scroll offset.
pub fn position_all<H>(records: &mut [ImageRecord<H>], viewport: &ViewportState, scroll_offset: f32) {
    for record in records.iter_mut() {
        let p = plane_position(&record.bbox, record.width_attr, viewport, scroll_offset);
        record.position = p;
        record.material.set_offset(p);
    }
}
