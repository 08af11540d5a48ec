use planes_core::{
    parse_width_attribute, BoundingBox, ImageSource, LimitChange, ScrollProvider, ViewportState,
};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn viewport_from_window(window: &web::Window) -> ViewportState {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    ViewportState::new(w, h, window.device_pixel_ratio())
}

/// Sizes the canvas to the viewport in CSS pixels and its backing store to
/// the capped device pixel ratio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, viewport: &ViewportState) {
    let (w_px, h_px) = viewport.backing_size();
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    let style = canvas.style();
    let _ = style.set_property("width", &format!("{}px", viewport.width));
    let _ = style.set_property("height", &format!("{}px", viewport.height));
}

pub fn create_canvas(
    document: &web::Document,
    container: &web::Element,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("create canvas: {:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let style = canvas.style();
    let _ = style.set_property("display", "block");
    // hover is detected on the images underneath
    let _ = style.set_property("pointer-events", "none");
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("append canvas: {:?}", e))?;
    Ok(canvas)
}

/// A tracked `<img>` with its layout captured at collection time.
#[derive(Clone, Debug)]
pub struct DomImage {
    pub element: web::HtmlImageElement,
    bbox: BoundingBox,
    width_attr: Option<f32>,
}

impl ImageSource for DomImage {
    fn bounding_box(&self) -> BoundingBox {
        self.bbox
    }

    fn width_attribute(&self) -> Option<f32> {
        self.width_attr
    }
}

pub fn query_images(root: &web::Element, selector: &str) -> Vec<web::HtmlImageElement> {
    let list = match root.query_selector_all(selector) {
        Ok(l) => l,
        Err(e) => {
            log::warn!("invalid image selector {:?}: {:?}", selector, e);
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::HtmlImageElement>().ok())
        .collect()
}

/// Snapshot of every image under `root` in document order. Boxes are in
/// document coordinates: the content is still translated by `-change.applied`,
/// so that offset is added back to the client rect.
pub fn collect_images(root: &web::Element, selector: &str, change: &LimitChange) -> Vec<DomImage> {
    query_images(root, selector)
        .into_iter()
        .map(|element| {
            let rect = element.get_bounding_client_rect();
            let bbox = BoundingBox {
                top: change.document_top(rect.top() as f32),
                left: rect.left() as f32,
                width: rect.width() as f32,
                height: rect.height() as f32,
            };
            let width_attr = parse_width_attribute(element.get_attribute("width").as_deref());
            DomImage {
                element,
                bbox,
                width_attr,
            }
        })
        .collect()
}

pub fn apply_scroll_transform(content: &web::HtmlElement, scroll: &dyn ScrollProvider) {
    let _ = content
        .style()
        .set_property("transform", &format!("translate3d(0, {:.3}px, 0)", -scroll.offset()));
}

/// How far the content can scroll before its bottom edge meets the viewport.
pub fn scroll_limit(content: &web::Element, viewport: &ViewportState) -> f32 {
    (content.scroll_height() as f32 - viewport.height_f32()).max(0.0)
}
