use tracing::debug;
use vitrine_common::lazy_images::{on_intersection, LazyAction};
use wasm_bindgen_x::prelude::*;
use wasm_bindgen_x::JsCast;

use crate::dom;
use crate::error::BindError;
use crate::listener::Binding;
use crate::PageContext;

pub const IMAGE_SELECTOR: &str = "img[data-src]";
pub const DEFERRED_SRC_ATTR: &str = "data-src";

/// Observer plus the closure it calls; disconnects on drop
struct ImageObserver {
    observer: web_sys_x::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys_x::Array, web_sys_x::IntersectionObserver)>,
}

impl Drop for ImageObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn handle_entries(entries: js_sys_x::Array, observer: web_sys_x::IntersectionObserver) {
    for entry in entries.iter() {
        let Ok(entry) = entry.dyn_into::<web_sys_x::IntersectionObserverEntry>() else {
            continue;
        };
        let img = entry.target();
        let data_src = img.get_attribute(DEFERRED_SRC_ATTR);
        match on_intersection(entry.is_intersecting(), data_src.as_deref()) {
            LazyAction::Wait => {}
            LazyAction::Load(src) => {
                dom::set_attr(&img, "src", &src);
                dom::remove_attr(&img, DEFERRED_SRC_ATTR);
                observer.unobserve(&img);
                debug!(%src, "Deferred image loaded");
            }
            LazyAction::Unobserve => observer.unobserve(&img),
        }
    }
}

pub fn bind(ctx: &PageContext) -> Result<Option<Binding>, BindError> {
    let images = dom::query_all(&ctx.document, IMAGE_SELECTOR);
    if images.is_empty() {
        return Ok(None);
    }
    let supported = js_sys_x::Reflect::has(&ctx.window, &JsValue::from_str("IntersectionObserver"))
        .unwrap_or(false);
    if !supported {
        debug!("IntersectionObserver unavailable, images keep their placeholder");
        return Ok(None);
    }

    let callback: Closure<dyn FnMut(js_sys_x::Array, web_sys_x::IntersectionObserver)> =
        Closure::wrap(Box::new(handle_entries) as Box<dyn FnMut(_, _)>);
    let observer = web_sys_x::IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
    for img in &images {
        observer.observe(img);
    }
    debug!(count = images.len(), "Observing deferred images");

    let mut binding = Binding::new();
    binding.retain(ImageObserver {
        observer,
        _callback: callback,
    });
    Ok(Some(binding))
}
