use tracing::debug;
use vitrine_common::nav::legacy_target;

use crate::dom;
use crate::error::BindError;
use crate::listener::{Binding, EventListener};
use crate::PageContext;

/// Call-to-action buttons from before they became links
pub const BUTTON_SELECTOR: &str = "button.cta-button, button.cta-button-red, button.service-button";

pub fn bind(ctx: &PageContext) -> Result<Option<Binding>, BindError> {
    let buttons = dom::query_all(&ctx.document, BUTTON_SELECTOR);
    if buttons.is_empty() {
        return Ok(None);
    }

    let mut binding = Binding::new();
    for button in buttons {
        let window = ctx.window.clone();
        let el = button.clone();
        binding.listen(EventListener::new(&button, "click", move |_| {
            let data_href = el.get_attribute("data-href");
            if let Some(href) = legacy_target(data_href.as_deref()) {
                debug!(%href, "Legacy button navigation");
                let _ = window.location().set_href(href);
            }
        }));
    }
    Ok(Some(binding))
}
