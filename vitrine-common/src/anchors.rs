/// Element id an in-page link points at, or `None` for `#` and empty hrefs
pub fn anchor_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

/// Document scroll position that puts the target just below the sticky header.
///
/// `element_top` is the target's viewport-relative top (bounding rect),
/// `page_y` the current document scroll offset.
pub fn scroll_destination(element_top: f64, page_y: f64, header_offset: f64) -> f64 {
    (element_top + page_y - header_offset).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#services"), Some("services"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target(""), None);
        assert_eq!(anchor_target("/contact/#form"), None);
    }

    #[test]
    fn test_scroll_destination_clears_header() {
        assert_eq!(scroll_destination(500.0, 200.0, 80.0), 620.0);
    }

    #[test]
    fn test_scroll_destination_clamped_at_top() {
        assert_eq!(scroll_destination(30.0, 0.0, 80.0), 0.0);
    }
}
