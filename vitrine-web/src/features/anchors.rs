use std::rc::Rc;

use tracing::debug;
use vitrine_common::anchors::{anchor_target, scroll_destination};
use vitrine_common::SiteConfig;
use wasm_bindgen_x::JsValue;

use crate::dom;
use crate::error::BindError;
use crate::listener::{listen_once, Binding, EventListener};
use crate::PageContext;

pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

fn scroll_to_anchor(
    window: &web_sys_x::Window,
    document: &web_sys_x::Document,
    config: &SiteConfig,
    href: &str,
    event: &web_sys_x::Event,
) {
    let Some(target) = anchor_target(href).and_then(|id| document.get_element_by_id(id)) else {
        return;
    };
    event.prevent_default();

    let top = scroll_destination(
        target.get_bounding_client_rect().top(),
        window.scroll_y().unwrap_or(0.0),
        config.anchor_header_offset_px,
    );
    let options = web_sys_x::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web_sys_x::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);

    // Address bar follows the fragment without a jump or reload
    if let Ok(history) = window.history() {
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(href));
    }

    dom::set_attr(&target, "tabindex", "-1");
    dom::focus(&target);
    let blurred = target.clone();
    listen_once(&target, "blur", move || dom::remove_attr(&blurred, "tabindex"));

    debug!(%href, top, "Scrolled to anchor");
}

pub fn bind(ctx: &PageContext) -> Result<Option<Binding>, BindError> {
    let anchors = dom::query_all(&ctx.document, ANCHOR_SELECTOR);
    if anchors.is_empty() {
        return Ok(None);
    }

    let mut binding = Binding::new();
    for anchor in anchors {
        let window = ctx.window.clone();
        let document = ctx.document.clone();
        let config = Rc::clone(&ctx.config);
        let link = anchor.clone();
        binding.listen(EventListener::new(&anchor, "click", move |event| {
            if let Some(href) = link.get_attribute("href") {
                scroll_to_anchor(&window, &document, &config, &href, &event);
            }
        }));
    }
    Ok(Some(binding))
}
