use tracing::debug;
use vitrine_common::nav::active_link;

use crate::dom::{self, ACTIVE_CLASS};
use crate::error::BindError;
use crate::listener::Binding;
use crate::PageContext;

pub const LINK_SELECTOR: &str = ".nav-list a";
pub const ITEM_SELECTOR: &str = ".nav-item";

/// Mark the nav entry for the current page. Runs once; nothing to listen to.
pub fn bind(ctx: &PageContext) -> Result<Option<Binding>, BindError> {
    let entries: Vec<(web_sys_x::Element, web_sys_x::Element, String)> =
        dom::query_all(&ctx.document, LINK_SELECTOR)
            .into_iter()
            .filter_map(|anchor| {
                let href = anchor.get_attribute("href")?;
                let item = anchor.closest(ITEM_SELECTOR).ok().flatten()?;
                Some((anchor, item, href))
            })
            .collect();
    if entries.is_empty() {
        return Ok(None);
    }

    let current = ctx.window.location().pathname()?;

    for (anchor, item, _) in &entries {
        dom::set_class(item, ACTIVE_CLASS, false);
        dom::remove_attr(anchor, "aria-current");
    }

    let active = active_link(&current, entries.iter().map(|(_, _, href)| Some(href.as_str())));
    if let Some((anchor, item, href)) = active.and_then(|i| entries.get(i)) {
        dom::set_class(item, ACTIVE_CLASS, true);
        dom::set_attr(anchor, "aria-current", "page");
        debug!(path = %current, %href, "Active nav link");
    }

    Ok(Some(Binding::new()))
}
