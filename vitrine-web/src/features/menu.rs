use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;
use vitrine_common::config::Labels;
use vitrine_common::keyboard::Key;
use vitrine_common::{MenuEvent, MenuState};

use crate::dom::{self, ACTIVE_CLASS};
use crate::error::BindError;
use crate::listener::{Binding, EventListener};
use crate::PageContext;

pub const TOGGLE_ID: &str = "mobile-menu-toggle";
pub const NAV_ID: &str = "nav";

struct MobileMenu {
    state: MenuState,
    toggle: web_sys_x::Element,
    nav: web_sys_x::Element,
    labels: Labels,
}

impl MobileMenu {
    fn handle(&mut self, event: MenuEvent) {
        let transition = self.state.handle(event);
        if transition.changed {
            self.apply();
            debug!(open = self.state.is_open(), ?event, "Mobile menu");
        }
        if transition.restore_focus {
            dom::focus(&self.toggle);
        }
    }

    fn apply(&self) {
        let p = self.state.presentation(&self.labels);
        dom::set_class(&self.toggle, ACTIVE_CLASS, p.active);
        dom::set_class(&self.nav, ACTIVE_CLASS, p.active);
        dom::set_bool_attr(&self.toggle, "aria-expanded", p.aria_expanded);
        dom::set_attr(&self.toggle, "aria-label", p.aria_label);
    }
}

pub fn bind(ctx: &PageContext) -> Result<Option<Binding>, BindError> {
    let (Some(toggle), Some(nav)) = (
        ctx.document.get_element_by_id(TOGGLE_ID),
        ctx.document.get_element_by_id(NAV_ID),
    ) else {
        return Ok(None);
    };

    let menu = Rc::new(RefCell::new(MobileMenu {
        state: MenuState::new(),
        toggle: toggle.clone(),
        nav,
        labels: ctx.config.labels.clone(),
    }));
    menu.borrow().apply();

    let mut binding = Binding::new();

    let m = menu.clone();
    binding.listen(EventListener::new(&toggle, "click", move |_| {
        m.borrow_mut().handle(MenuEvent::Toggle);
    }));

    let m = menu.clone();
    binding.listen(EventListener::new(&ctx.document, "click", move |event| {
        let mut menu = m.borrow_mut();
        if !dom::event_within(&event, &menu.nav) && !dom::event_within(&event, &menu.toggle) {
            menu.handle(MenuEvent::OutsideClick);
        }
    }));

    let m = menu;
    binding.listen(EventListener::new(&ctx.document, "keydown", move |event| {
        use wasm_bindgen_x::JsCast;
        let Some(key_event) = event.dyn_ref::<web_sys_x::KeyboardEvent>() else {
            return;
        };
        if Key::parse(&key_event.key()) == Key::Escape {
            m.borrow_mut().handle(MenuEvent::Escape);
        }
    }));

    Ok(Some(binding))
}
