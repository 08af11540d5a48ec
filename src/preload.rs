//! Start-up gate: wait for images to decode and web fonts to load, but never
//! longer than the configured timeout.

use js_sys::{Array, Promise};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

const TIMEOUT_SENTINEL: &str = "preload-timeout";

#[derive(Debug, PartialEq)]
pub enum Readiness {
    Ready,
    TimedOut,
    Failed(String),
}

fn timeout_promise(ms: i32) -> Promise {
    Promise::new(&mut |resolve, _reject| {
        if let Some(w) = web::window() {
            let _ = w.set_timeout_with_callback_and_timeout_and_arguments_1(
                &resolve,
                ms,
                &JsValue::from_str(TIMEOUT_SENTINEL),
            );
        }
    })
}

pub async fn wait_until_ready(
    document: &web::Document,
    images: &[web::HtmlImageElement],
    timeout_ms: i32,
) -> Readiness {
    let pending = Array::new();
    for img in images {
        pending.push(&img.decode());
    }
    match document.fonts().ready() {
        Ok(fonts) => {
            pending.push(&fonts);
        }
        Err(e) => log::warn!("document.fonts.ready unavailable: {:?}", e),
    }
    let all = Promise::all(&pending);
    let race = Promise::race(&Array::of2(&all, &timeout_promise(timeout_ms)));
    match JsFuture::from(race).await {
        Ok(v) if v.as_string().as_deref() == Some(TIMEOUT_SENTINEL) => Readiness::TimedOut,
        Ok(_) => Readiness::Ready,
        Err(e) => Readiness::Failed(format!("{:?}", e)),
    }
}
