use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;
use vitrine_common::parallax::{background_position, parallax_offset, FrameCoalescer};
use wasm_bindgen_x::prelude::*;
use wasm_bindgen_x::JsCast;

use crate::dom;
use crate::error::BindError;
use crate::listener::{Binding, EventListener};
use crate::PageContext;

pub const SECTION_SELECTOR: &str = ".hero-mining, .page-hero";
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

struct Parallax {
    window: web_sys_x::Window,
    sections: Vec<web_sys_x::HtmlElement>,
    factor: f64,
    frames: RefCell<FrameCoalescer>,
}

impl Parallax {
    fn apply(&self) {
        let scroll_y = self.window.scroll_y().unwrap_or(0.0);
        let position = background_position(parallax_offset(scroll_y, self.factor));
        for section in &self.sections {
            let _ = section
                .style()
                .set_property("background-position", &position);
        }
    }

    fn on_scroll(self: &Rc<Self>) {
        if !self.frames.borrow_mut().request() {
            return;
        }
        let this = self.clone();
        let frame = Closure::once(move || {
            this.frames.borrow_mut().frame_ran();
            this.apply();
        })
        .into_js_value();
        if self
            .window
            .request_animation_frame(frame.unchecked_ref())
            .is_err()
        {
            self.frames.borrow_mut().frame_ran();
        }
    }
}

fn prefers_reduced_motion(window: &web_sys_x::Window) -> bool {
    window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .is_some_and(|query| query.matches())
}

pub fn bind(ctx: &PageContext) -> Result<Option<Binding>, BindError> {
    let sections: Vec<web_sys_x::HtmlElement> = dom::query_all(&ctx.document, SECTION_SELECTOR)
        .into_iter()
        .filter_map(|el| el.dyn_into::<web_sys_x::HtmlElement>().ok())
        .collect();
    if sections.is_empty() {
        return Ok(None);
    }
    if prefers_reduced_motion(&ctx.window) {
        debug!("Reduced motion requested, parallax disabled");
        return Ok(None);
    }

    let parallax = Rc::new(Parallax {
        window: ctx.window.clone(),
        sections,
        factor: ctx.config.parallax_factor,
        frames: RefCell::new(FrameCoalescer::new()),
    });
    parallax.apply();

    let mut binding = Binding::new();
    binding.listen(EventListener::passive(&ctx.window, "scroll", move |_| {
        parallax.on_scroll()
    }));
    Ok(Some(binding))
}
