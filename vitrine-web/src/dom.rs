//! DOM helpers shared by the feature binders

use vitrine_common::Viewport;
use wasm_bindgen_x::JsCast;

pub const ACTIVE_CLASS: &str = "active";
pub const OPEN_CLASS: &str = "open";
pub const SCROLLED_CLASS: &str = "scrolled";
pub const ERROR_CLASS: &str = "error";

/// All elements matching `selector` in the document. An invalid selector
/// yields nothing.
pub fn query_all(document: &web_sys_x::Document, selector: &str) -> Vec<web_sys_x::Element> {
    document
        .query_selector_all(selector)
        .map(|list| elements(&list))
        .unwrap_or_default()
}

/// All elements matching `selector` below `root`
pub fn query_all_in(root: &web_sys_x::Element, selector: &str) -> Vec<web_sys_x::Element> {
    root.query_selector_all(selector)
        .map(|list| elements(&list))
        .unwrap_or_default()
}

pub fn query_in(root: &web_sys_x::Element, selector: &str) -> Option<web_sys_x::Element> {
    root.query_selector(selector).ok().flatten()
}

fn elements(list: &web_sys_x::NodeList) -> Vec<web_sys_x::Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web_sys_x::Element>().ok())
        .collect()
}

pub fn set_class(element: &web_sys_x::Element, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}

pub fn set_attr(element: &web_sys_x::Element, name: &str, value: &str) {
    let _ = element.set_attribute(name, value);
}

pub fn set_bool_attr(element: &web_sys_x::Element, name: &str, value: bool) {
    set_attr(element, name, if value { "true" } else { "false" });
}

pub fn remove_attr(element: &web_sys_x::Element, name: &str) {
    let _ = element.remove_attribute(name);
}

pub fn focus(element: &web_sys_x::Element) {
    if let Some(el) = element.dyn_ref::<web_sys_x::HtmlElement>() {
        let _ = el.focus();
    }
}

/// Whether the event target lies inside `container` (or is it)
pub fn event_within(event: &web_sys_x::Event, container: &web_sys_x::Element) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<web_sys_x::Node>().ok())
        .is_some_and(|node| container.contains(Some(&node)))
}

pub fn inner_width(window: &web_sys_x::Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0)
}

pub fn viewport(window: &web_sys_x::Window) -> Viewport {
    Viewport::new(inner_width(window), window.scroll_y().unwrap_or(0.0))
}
