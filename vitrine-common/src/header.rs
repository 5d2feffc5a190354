use crate::config::SiteConfig;
use crate::viewport::Viewport;

/// Whether the sticky header should carry the `scrolled` class
pub fn header_scrolled(viewport: Viewport, config: &SiteConfig) -> bool {
    if config.header_scrolled_desktop_only && viewport.width <= config.breakpoint_px {
        return false;
    }
    viewport.scroll_y > config.header_scroll_threshold_px
}

/// Last value written to the header, so scroll events only touch the DOM on change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderState {
    applied: Option<bool>,
}

impl HeaderState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the new value when it differs from what is on the page
    pub fn update(&mut self, viewport: Viewport, config: &SiteConfig) -> Option<bool> {
        let scrolled = header_scrolled(viewport, config);
        if self.applied == Some(scrolled) {
            return None;
        }
        self.applied = Some(scrolled);
        Some(scrolled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_exclusive() {
        let config = SiteConfig::default();
        assert!(!header_scrolled(Viewport::new(1280.0, 0.0), &config));
        assert!(!header_scrolled(Viewport::new(1280.0, 40.0), &config));
        assert!(header_scrolled(Viewport::new(1280.0, 40.5), &config));
        assert!(header_scrolled(Viewport::new(1280.0, 41.0), &config));
    }

    #[test]
    fn test_narrow_never_scrolled_when_desktop_only() {
        let config = SiteConfig::default();
        assert!(!header_scrolled(Viewport::new(768.0, 500.0), &config));
        assert!(!header_scrolled(Viewport::new(375.0, 500.0), &config));
    }

    #[test]
    fn test_narrow_scrolled_when_not_desktop_only() {
        let config = SiteConfig {
            header_scrolled_desktop_only: false,
            ..SiteConfig::default()
        };
        assert!(header_scrolled(Viewport::new(375.0, 41.0), &config));
    }

    #[test]
    fn test_state_reports_only_changes() {
        let config = SiteConfig::default();
        let mut state = HeaderState::new();
        assert_eq!(state.update(Viewport::new(1280.0, 0.0), &config), Some(false));
        assert_eq!(state.update(Viewport::new(1280.0, 40.0), &config), None);
        assert_eq!(state.update(Viewport::new(1280.0, 41.0), &config), Some(true));
        assert_eq!(state.update(Viewport::new(1280.0, 300.0), &config), None);
        // Shrinking the window below the breakpoint drops the style
        assert_eq!(state.update(Viewport::new(600.0, 300.0), &config), Some(false));
    }
}
