//! Listener ownership
//!
//! A JavaScript listener backed by a Rust `Closure` only works while the
//! closure is alive. Instead of `Closure::forget()`, every listener here is
//! owned by an [`EventListener`] that removes itself on drop, and all the
//! listeners of one feature are grouped in a [`Binding`]. The page keeps the
//! bindings for its lifetime; dropping them detaches everything.

use wasm_bindgen_x::prelude::*;
use wasm_bindgen_x::JsCast;

/// An event listener on any target that removes itself when dropped.
pub struct EventListener {
    target: web_sys_x::EventTarget,
    event_name: &'static str,
    callback: Closure<dyn FnMut(web_sys_x::Event)>,
}

impl EventListener {
    /// Attaches a listener to `target`.
    pub fn new(
        target: &web_sys_x::EventTarget,
        event_name: &'static str,
        callback: impl FnMut(web_sys_x::Event) + 'static,
    ) -> Self {
        Self::with_options(target, event_name, false, callback)
    }

    /// Attaches a passive listener. Used for scroll and resize, which never
    /// call `preventDefault`.
    pub fn passive(
        target: &web_sys_x::EventTarget,
        event_name: &'static str,
        callback: impl FnMut(web_sys_x::Event) + 'static,
    ) -> Self {
        Self::with_options(target, event_name, true, callback)
    }

    fn with_options(
        target: &web_sys_x::EventTarget,
        event_name: &'static str,
        passive: bool,
        callback: impl FnMut(web_sys_x::Event) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(web_sys_x::Event)> = Closure::wrap(Box::new(callback));

        let options = web_sys_x::AddEventListenerOptions::new();
        options.set_passive(passive);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event_name,
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .ok();

        Self {
            target: target.clone(),
            event_name,
            callback,
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// Attach a listener that runs at most once and then lets the browser
/// release it. Nothing to drop, so it is not tracked in a [`Binding`].
pub fn listen_once(
    target: &web_sys_x::EventTarget,
    event_name: &str,
    callback: impl FnOnce() + 'static,
) {
    let callback = Closure::once(callback).into_js_value();
    let options = web_sys_x::AddEventListenerOptions::new();
    options.set_once(true);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            event_name,
            callback.unchecked_ref(),
            &options,
        )
        .ok();
}

/// Everything one feature attached to the page
#[derive(Default)]
pub struct Binding {
    listeners: Vec<EventListener>,
    retained: Vec<Box<dyn std::any::Any>>,
}

impl Binding {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listen(&mut self, listener: EventListener) {
        self.listeners.push(listener);
    }

    /// Keep a JS-backed resource (observer, closure) alive with the binding
    pub fn retain<T: 'static>(&mut self, value: T) {
        self.retained.push(Box::new(value));
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}
