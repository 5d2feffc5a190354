//! Navigation dropdowns
//!
//! Every `.nav-item.dropdown` gets its own state record plus the close timer
//! that belongs to it. The timer callback only holds a weak reference and
//! hands its ticket back to the state, which decides whether the close still
//! applies.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::debug;
use vitrine_common::dropdown::TimerCommand;
use vitrine_common::keyboard::Key;
use vitrine_common::{Breakpoint, CloseTicket, DropdownEffect, DropdownState};
use wasm_bindgen_x::JsCast;

use crate::dom::{self, ACTIVE_CLASS, OPEN_CLASS};
use crate::error::BindError;
use crate::listener::{Binding, EventListener};
use crate::timer::Timeout;
use crate::PageContext;

pub const ITEM_SELECTOR: &str = ".nav-item.dropdown";
pub const TOGGLE_SELECTOR: &str = ".dropdown-toggle";
pub const MENU_SELECTOR: &str = ".dropdown-menu";

struct NavDropdown {
    state: DropdownState,
    close_timer: Option<Timeout>,
    close_delay_ms: u32,
    item: web_sys_x::Element,
    toggle: web_sys_x::Element,
    menu: web_sys_x::Element,
}

impl NavDropdown {
    fn apply(&self) {
        let p = self.state.presentation();
        dom::set_class(&self.item, OPEN_CLASS, p.item_open);
        dom::set_class(&self.menu, ACTIVE_CLASS, p.menu_active);
        dom::set_bool_attr(&self.toggle, "aria-expanded", p.aria_expanded);
    }
}

type Shared = Rc<RefCell<NavDropdown>>;

/// Feed one transition result back to the page and the timer
fn run(
    shared: &Shared,
    step: impl FnOnce(&mut DropdownState) -> DropdownEffect,
) -> DropdownEffect {
    let mut dropdown = shared.borrow_mut();
    let effect = step(&mut dropdown.state);
    if effect.changed {
        dropdown.apply();
    }
    match effect.timer {
        TimerCommand::Keep => {}
        TimerCommand::Cancel => dropdown.close_timer = None,
        TimerCommand::Schedule(ticket) => {
            let weak = Rc::downgrade(shared);
            let delay = dropdown.close_delay_ms;
            // Replacing the handle drops (and cancels) any older timer
            dropdown.close_timer = Timeout::new(delay, move || close_elapsed(&weak, ticket));
        }
    }
    effect
}

fn close_elapsed(weak: &Weak<RefCell<NavDropdown>>, ticket: CloseTicket) {
    let Some(shared) = weak.upgrade() else {
        return;
    };
    // The running timer stays in `close_timer` until the next schedule or
    // cancel; dropping it from inside its own callback is not allowed.
    let effect = run(&shared, |state| state.close_timer_fired(ticket));
    if effect.changed {
        debug!("Dropdown closed after hover grace delay");
    }
}

fn on(
    shared: &Shared,
    step: fn(&mut DropdownState) -> DropdownEffect,
) -> impl FnMut(web_sys_x::Event) {
    let shared = shared.clone();
    move |_| {
        run(&shared, step);
    }
}

pub fn bind(ctx: &PageContext) -> Result<Option<Binding>, BindError> {
    let breakpoint_px = ctx.config.breakpoint_px;
    let mut dropdowns: Vec<Shared> = Vec::new();
    let mut binding = Binding::new();

    for item in dom::query_all(&ctx.document, ITEM_SELECTOR) {
        let (Some(toggle), Some(menu)) = (
            dom::query_in(&item, TOGGLE_SELECTOR),
            dom::query_in(&item, MENU_SELECTOR),
        ) else {
            debug!("Dropdown item without toggle or menu, skipping");
            continue;
        };

        let breakpoint = Breakpoint::for_width(dom::inner_width(&ctx.window), breakpoint_px);
        let shared = Rc::new(RefCell::new(NavDropdown {
            state: DropdownState::new(breakpoint),
            close_timer: None,
            close_delay_ms: ctx.config.dropdown_close_delay_ms,
            item: item.clone(),
            toggle: toggle.clone(),
            menu: menu.clone(),
        }));
        shared.borrow().apply();

        let s = shared.clone();
        binding.listen(EventListener::new(&toggle, "click", move |event| {
            if run(&s, DropdownState::activate).prevent_default {
                event.prevent_default();
            }
        }));

        let s = shared.clone();
        binding.listen(EventListener::new(&toggle, "keydown", move |event| {
            let Some(key_event) = event.dyn_ref::<web_sys_x::KeyboardEvent>() else {
                return;
            };
            if !Key::parse(&key_event.key()).activates() {
                return;
            }
            if run(&s, DropdownState::activate).prevent_default {
                event.prevent_default();
            }
        }));

        binding.listen(EventListener::new(
            &item,
            "mouseenter",
            on(&shared, DropdownState::pointer_enter_item),
        ));
        binding.listen(EventListener::new(
            &item,
            "mouseleave",
            on(&shared, DropdownState::pointer_leave),
        ));
        // Moving from the submenu back up to the toggle never leaves the item,
        // so the item's mouseenter doesn't fire
        binding.listen(EventListener::new(
            &toggle,
            "mouseenter",
            on(&shared, DropdownState::pointer_enter_toggle),
        ));
        binding.listen(EventListener::new(
            &menu,
            "mouseenter",
            on(&shared, DropdownState::pointer_enter_menu),
        ));
        binding.listen(EventListener::new(
            &menu,
            "mouseleave",
            on(&shared, DropdownState::pointer_leave),
        ));

        dropdowns.push(shared);
    }

    if dropdowns.is_empty() {
        return Ok(None);
    }
    let dropdowns = Rc::new(dropdowns);

    let all = dropdowns.clone();
    binding.listen(EventListener::new(&ctx.document, "click", move |event| {
        for shared in all.iter() {
            let item = shared.borrow().item.clone();
            if !dom::event_within(&event, &item) {
                run(shared, DropdownState::outside_click);
            }
        }
    }));

    let all = dropdowns;
    let window = ctx.window.clone();
    binding.listen(EventListener::passive(&ctx.window, "resize", move |_| {
        let breakpoint = Breakpoint::for_width(dom::inner_width(&window), breakpoint_px);
        for shared in all.iter() {
            run(shared, |state| state.sync_viewport(breakpoint));
        }
    }));

    Ok(Some(binding))
}
