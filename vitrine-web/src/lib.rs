//! vitrine-web - Browser bindings for the site's navigation chrome
//!
//! Looks up the page's elements, attaches listeners, and writes back the
//! presentation computed by `vitrine-common`. Every feature is optional: if
//! its elements are missing from the page it is simply not bound.

pub mod dom;
pub mod error;
pub mod features;
pub mod listener;
pub mod logging;
pub mod timer;

use std::cell::RefCell;
use std::rc::Rc;

use error::BindError;
use listener::Binding;
use tracing::{debug, info, warn};
use vitrine_common::{ConfigError, SiteConfig};

/// Element holding an optional JSON override of [`SiteConfig`]
pub const CONFIG_ELEMENT_ID: &str = "vitrine-config";

/// Handles shared by every feature binder
pub struct PageContext {
    pub window: web_sys_x::Window,
    pub document: web_sys_x::Document,
    pub config: Rc<SiteConfig>,
}

type Binder = fn(&PageContext) -> Result<Option<Binding>, BindError>;

const BINDERS: &[(&str, Binder)] = &[
    ("menu", features::menu::bind),
    ("dropdown", features::dropdown::bind),
    ("anchors", features::anchors::bind),
    ("legacy_buttons", features::buttons::bind),
    ("keyboard", features::keyboard::bind),
    ("contact_form", features::form::bind),
    ("lazy_images", features::lazy_images::bind),
    ("header", features::header::bind),
    ("parallax", features::parallax::bind),
    ("nav", features::nav::bind),
    ("footer", features::footer::bind),
];

/// All bindings of the current page view
pub struct Page {
    bindings: Vec<(&'static str, Binding)>,
}

impl Page {
    pub fn bind(ctx: &PageContext) -> Self {
        let mut bindings = Vec::new();
        for (name, bind) in BINDERS {
            match bind(ctx) {
                Ok(Some(binding)) => {
                    debug!(
                        feature = name,
                        listeners = binding.listener_count(),
                        "Feature bound"
                    );
                    bindings.push((*name, binding));
                }
                Ok(None) => debug!(feature = name, "Feature not present on this page"),
                Err(e) => warn!(feature = name, "Failed to bind feature: {}", e),
            }
        }
        Self { bindings }
    }

    pub fn features(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.bindings.iter().map(|(name, _)| *name)
    }
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

/// Read the page's config override, falling back to defaults
pub fn load_config(document: &web_sys_x::Document) -> (SiteConfig, Option<ConfigError>) {
    let Some(json) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return (SiteConfig::default(), None);
    };
    match SiteConfig::from_json(&json) {
        Ok(config) => (config, None),
        Err(e) => (SiteConfig::default(), Some(e)),
    }
}

/// Entry point: configure logging, then bind once the document is parsed.
pub fn start() {
    let Some(window) = web_sys_x::window() else {
        logging::init("info");
        warn!("{}", BindError::NoWindow);
        return;
    };
    let Some(document) = window.document() else {
        logging::init("info");
        warn!("{}", BindError::NoDocument);
        return;
    };

    let (config, config_error) = load_config(&document);
    logging::init(&config.log_level);
    if let Some(e) = config_error {
        warn!("Ignoring page config, using defaults: {}", e);
    }

    let ctx = PageContext {
        window,
        document,
        config: Rc::new(config),
    };

    if ctx.document.ready_state() == "loading" {
        debug!("Document still loading, deferring bindings");
        let target = ctx.document.clone();
        listener::listen_once(&target, "DOMContentLoaded", move || install(ctx));
    } else {
        install(ctx);
    }
}

fn install(ctx: PageContext) {
    let page = Page::bind(&ctx);
    info!(
        "vitrine ready: {}",
        page.features().collect::<Vec<_>>().join(", ")
    );
    PAGE.with(|slot| *slot.borrow_mut() = Some(page));
}
