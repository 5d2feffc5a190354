//! One binder per page feature. Each returns `Ok(None)` when the page has
//! nothing for it to attach to.

pub mod anchors;
pub mod buttons;
pub mod dropdown;
pub mod footer;
pub mod form;
pub mod header;
pub mod keyboard;
pub mod lazy_images;
pub mod menu;
pub mod nav;
pub mod parallax;
