use std::cell::RefCell;
use std::rc::Rc;

use vitrine_common::header::HeaderState;

use crate::dom::{self, SCROLLED_CLASS};
use crate::error::BindError;
use crate::listener::{Binding, EventListener};
use crate::PageContext;

pub const HEADER_ID: &str = "header";

pub fn bind(ctx: &PageContext) -> Result<Option<Binding>, BindError> {
    let Some(header) = ctx.document.get_element_by_id(HEADER_ID) else {
        return Ok(None);
    };

    let state = Rc::new(RefCell::new(HeaderState::new()));
    let update = {
        let window = ctx.window.clone();
        let config = ctx.config.clone();
        move || {
            if let Some(scrolled) = state.borrow_mut().update(dom::viewport(&window), &config) {
                dom::set_class(&header, SCROLLED_CLASS, scrolled);
            }
        }
    };
    update();

    let update = Rc::new(update);
    let mut binding = Binding::new();
    for event_name in ["scroll", "resize"] {
        let update = update.clone();
        binding.listen(EventListener::passive(&ctx.window, event_name, move |_| {
            update()
        }));
    }
    Ok(Some(binding))
}
