use chrono::Datelike;

use crate::dom;
use crate::error::BindError;
use crate::listener::Binding;
use crate::PageContext;

pub const YEAR_SELECTOR: &str = ".copyright-year";

/// Fill in the copyright year
pub fn bind(ctx: &PageContext) -> Result<Option<Binding>, BindError> {
    let elements = dom::query_all(&ctx.document, YEAR_SELECTOR);
    if elements.is_empty() {
        return Ok(None);
    }
    let year = chrono::Local::now().year().to_string();
    for el in &elements {
        el.set_text_content(Some(&year));
    }
    Ok(Some(Binding::new()))
}
