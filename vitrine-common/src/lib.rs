//! vitrine-common - View state for the site's navigation chrome
//!
//! Pure state records and transition functions. Nothing here touches the DOM;
//! the web crate reads the environment, feeds events in, and writes the
//! resulting presentation back to the page.

pub mod anchors;
pub mod config;
pub mod dropdown;
pub mod form;
pub mod header;
pub mod keyboard;
pub mod lazy_images;
pub mod menu;
pub mod nav;
pub mod parallax;
pub mod viewport;

pub use config::{ConfigError, Labels, SiteConfig};
pub use dropdown::{CloseTicket, DropdownEffect, DropdownPresentation, DropdownState};
pub use menu::{MenuEvent, MenuPresentation, MenuState};
pub use viewport::{Breakpoint, Viewport};
