use vitrine_common::keyboard::{is_skip_to_main, Key};
use wasm_bindgen_x::JsCast;

use crate::dom;
use crate::error::BindError;
use crate::listener::{Binding, EventListener};
use crate::PageContext;

pub const MAIN_CONTENT_ID: &str = "main-content";

/// Alt+M / Cmd+M skip-to-content shortcut
pub fn bind(ctx: &PageContext) -> Result<Option<Binding>, BindError> {
    if ctx.document.get_element_by_id(MAIN_CONTENT_ID).is_none() {
        return Ok(None);
    }

    let document = ctx.document.clone();
    let mut binding = Binding::new();
    binding.listen(EventListener::new(&ctx.document, "keydown", move |event| {
        let Some(key_event) = event.dyn_ref::<web_sys_x::KeyboardEvent>() else {
            return;
        };
        let key = Key::parse(&key_event.key());
        if !is_skip_to_main(key, key_event.alt_key(), key_event.meta_key()) {
            return;
        }
        event.prevent_default();
        if let Some(main) = document.get_element_by_id(MAIN_CONTENT_ID) {
            dom::set_attr(&main, "tabindex", "-1");
            dom::focus(&main);
        }
    }));
    Ok(Some(binding))
}
