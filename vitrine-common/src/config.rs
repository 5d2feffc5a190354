use serde::Deserialize;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Largest delay a browser timer accepts
pub const MAX_TIMER_MS: u32 = i32::MAX as u32;

fn default_breakpoint() -> f64 {
    768.0
}

fn default_header_threshold() -> f64 {
    40.0
}

fn default_true() -> bool {
    true
}

fn default_parallax_factor() -> f64 {
    0.3
}

fn default_dropdown_close_delay() -> u32 {
    120
}

fn default_anchor_offset() -> f64 {
    80.0
}

fn default_confirmation_dismiss() -> u32 {
    5000
}

fn default_log_level() -> String {
    "info".to_string()
}

/// User-facing strings. The site is French; a page can override them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Labels {
    /// aria-label of the menu toggle while the menu is closed
    pub menu_open: String,
    /// aria-label of the menu toggle while the menu is open
    pub menu_close: String,
    /// Confirmation shown after a valid contact form submission
    pub form_success: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            menu_open: "Ouvrir le menu de navigation".to_string(),
            menu_close: "Fermer le menu de navigation".to_string(),
            form_success:
                "Merci pour votre message! Nous vous répondrons dans les plus brefs délais."
                    .to_string(),
        }
    }
}

/// Behaviour constants for one page view.
///
/// Every field has a default, so a page only overrides what it needs:
///
/// ```json
/// { "breakpoint_px": 900, "labels": { "menu_open": "Open menu" } }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteConfig {
    /// Widths at or below this use the mobile navigation
    #[serde(default = "default_breakpoint")]
    pub breakpoint_px: f64,
    /// Header gets the scrolled style strictly above this offset
    #[serde(default = "default_header_threshold")]
    pub header_scroll_threshold_px: f64,
    /// Only apply the scrolled header style on wide viewports
    #[serde(default = "default_true")]
    pub header_scrolled_desktop_only: bool,
    #[serde(default = "default_parallax_factor")]
    pub parallax_factor: f64,
    /// Grace period before a desktop dropdown closes after the pointer leaves
    #[serde(default = "default_dropdown_close_delay")]
    pub dropdown_close_delay_ms: u32,
    /// Sticky header clearance when scrolling to an in-page anchor
    #[serde(default = "default_anchor_offset")]
    pub anchor_header_offset_px: f64,
    #[serde(default = "default_confirmation_dismiss")]
    pub confirmation_dismiss_ms: u32,
    #[serde(default)]
    pub labels: Labels,
    /// Filter directive for the console logger (e.g. "debug", "vitrine_web=trace")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: default_breakpoint(),
            header_scroll_threshold_px: default_header_threshold(),
            header_scrolled_desktop_only: true,
            parallax_factor: default_parallax_factor(),
            dropdown_close_delay_ms: default_dropdown_close_delay(),
            anchor_header_offset_px: default_anchor_offset(),
            confirmation_dismiss_ms: default_confirmation_dismiss(),
            labels: Labels::default(),
            log_level: default_log_level(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON override block and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.breakpoint_px.is_finite() || self.breakpoint_px <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "breakpoint_px",
                reason: format!("must be a positive number, got {}", self.breakpoint_px),
            });
        }
        if !self.header_scroll_threshold_px.is_finite() || self.header_scroll_threshold_px < 0.0 {
            return Err(ConfigError::Invalid {
                field: "header_scroll_threshold_px",
                reason: format!(
                    "must be zero or positive, got {}",
                    self.header_scroll_threshold_px
                ),
            });
        }
        if !self.parallax_factor.is_finite() {
            return Err(ConfigError::Invalid {
                field: "parallax_factor",
                reason: format!("must be finite, got {}", self.parallax_factor),
            });
        }
        for (field, ms) in [
            ("dropdown_close_delay_ms", self.dropdown_close_delay_ms),
            ("confirmation_dismiss_ms", self.confirmation_dismiss_ms),
        ] {
            // setTimeout takes a signed 32-bit delay
            if ms > MAX_TIMER_MS {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be at most {} ms, got {}", MAX_TIMER_MS, ms),
                });
            }
        }
        if !self.anchor_header_offset_px.is_finite() {
            return Err(ConfigError::Invalid {
                field: "anchor_header_offset_px",
                reason: format!("must be finite, got {}", self.anchor_header_offset_px),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.breakpoint_px, 768.0);
        assert_eq!(config.header_scroll_threshold_px, 40.0);
        assert_eq!(config.parallax_factor, 0.3);
        assert_eq!(config.dropdown_close_delay_ms, 120);
        assert_eq!(config.anchor_header_offset_px, 80.0);
        assert_eq!(config.confirmation_dismiss_ms, 5000);
        assert_eq!(config.labels.menu_open, "Ouvrir le menu de navigation");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = SiteConfig::from_json("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config =
            SiteConfig::from_json(r#"{"breakpoint_px": 900, "labels": {"menu_open": "Open"}}"#)
                .unwrap();
        assert_eq!(config.breakpoint_px, 900.0);
        assert_eq!(config.labels.menu_open, "Open");
        assert_eq!(config.labels.menu_close, "Fermer le menu de navigation");
        assert_eq!(config.dropdown_close_delay_ms, 120);
    }

    #[test]
    fn test_malformed_json() {
        let err = SiteConfig::from_json("{ breakpoint_px").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_non_positive_breakpoint() {
        let err = SiteConfig::from_json(r#"{"breakpoint_px": 0}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "breakpoint_px",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_negative_threshold() {
        let err = SiteConfig::from_json(r#"{"header_scroll_threshold_px": -1}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "header_scroll_threshold_px",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_timer_delay_beyond_browser_limit() {
        let err = SiteConfig::from_json(r#"{"dropdown_close_delay_ms": 3000000000}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "dropdown_close_delay_ms",
                ..
            }
        ));
        let err = SiteConfig::from_json(r#"{"confirmation_dismiss_ms": 2147483648}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "confirmation_dismiss_ms",
                ..
            }
        ));
        assert!(SiteConfig::from_json(r#"{"confirmation_dismiss_ms": 2147483647}"#).is_ok());
    }
}
