//! Contact form submission guard
//!
//! There is no backend: a valid submission only shows a confirmation and
//! clears the form.

use std::rc::Rc;

use tracing::{debug, info, warn};
use vitrine_common::form::{validate_required, SubmitOutcome};
use vitrine_common::SiteConfig;
use wasm_bindgen_x::JsCast;

use crate::dom::{self, ERROR_CLASS};
use crate::error::BindError;
use crate::listener::{Binding, EventListener};
use crate::timer::Timeout;
use crate::PageContext;

pub const FORM_ID: &str = "contact-form";
pub const SUCCESS_CLASS: &str = "form-success";

fn field_value(field: &web_sys_x::Element) -> String {
    if let Some(input) = field.dyn_ref::<web_sys_x::HtmlInputElement>() {
        input.value()
    } else if let Some(textarea) = field.dyn_ref::<web_sys_x::HtmlTextAreaElement>() {
        textarea.value()
    } else if let Some(select) = field.dyn_ref::<web_sys_x::HtmlSelectElement>() {
        select.value()
    } else {
        field.text_content().unwrap_or_default()
    }
}

fn show_confirmation(
    document: &web_sys_x::Document,
    form: &web_sys_x::HtmlFormElement,
    text: &str,
    dismiss_ms: u32,
) -> Result<(), BindError> {
    let message = document.create_element("div")?;
    message.set_class_name(SUCCESS_CLASS);
    dom::set_attr(&message, "role", "alert");
    message.set_text_content(Some(text));
    form.insert_adjacent_element("beforebegin", &message)?;

    dom::set_attr(&message, "tabindex", "-1");
    dom::focus(&message);

    if let Some(timer) = Timeout::new(dismiss_ms, move || message.remove()) {
        timer.forget();
    }
    Ok(())
}

fn on_submit(
    document: &web_sys_x::Document,
    form: &web_sys_x::HtmlFormElement,
    config: &SiteConfig,
) -> Result<(), BindError> {
    let fields = dom::query_all_in(form, "[required]");
    let values: Vec<String> = fields.iter().map(field_value).collect();
    let validation = validate_required(values.iter().map(String::as_str));

    for (field, invalid) in fields.iter().zip(&validation.invalid) {
        if *invalid {
            dom::set_attr(field, "aria-invalid", "true");
        } else {
            dom::remove_attr(field, "aria-invalid");
        }
        dom::set_class(field, ERROR_CLASS, *invalid);
    }

    match validation.outcome(config) {
        SubmitOutcome::FocusInvalid(index) => {
            debug!(
                invalid = validation.invalid_count(),
                "Contact form has empty required fields"
            );
            if let Some(field) = fields.get(index) {
                dom::focus(field);
            }
        }
        SubmitOutcome::Confirm {
            message,
            dismiss_ms,
        } => {
            show_confirmation(document, form, message, dismiss_ms)?;
            form.reset();
            info!("Contact form submitted");
        }
    }
    Ok(())
}

pub fn bind(ctx: &PageContext) -> Result<Option<Binding>, BindError> {
    let Some(form) = ctx
        .document
        .get_element_by_id(FORM_ID)
        .and_then(|el| el.dyn_into::<web_sys_x::HtmlFormElement>().ok())
    else {
        return Ok(None);
    };

    let document = ctx.document.clone();
    let config = Rc::clone(&ctx.config);
    let target = form.clone();
    let mut binding = Binding::new();
    binding.listen(EventListener::new(&target, "submit", move |event| {
        event.prevent_default();
        if let Err(e) = on_submit(&document, &form, &config) {
            warn!("Contact form handling failed: {}", e);
        }
    }));
    Ok(Some(binding))
}
