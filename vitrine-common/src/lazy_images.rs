/// What to do with an observed `img[data-src]` after an intersection callback
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LazyAction {
    /// Not visible yet, keep observing
    Wait,
    /// Swap in the real source, drop `data-src`, stop observing
    Load(String),
    /// Visible but nothing to load; stop observing
    Unobserve,
}

/// One-shot decision for a deferred image
pub fn on_intersection(is_intersecting: bool, data_src: Option<&str>) -> LazyAction {
    if !is_intersecting {
        return LazyAction::Wait;
    }
    match data_src {
        Some(src) if !src.is_empty() => LazyAction::Load(src.to_string()),
        _ => LazyAction::Unobserve,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waits_until_visible() {
        assert_eq!(on_intersection(false, Some("/img/hero.jpg")), LazyAction::Wait);
    }

    #[test]
    fn test_loads_when_visible() {
        assert_eq!(
            on_intersection(true, Some("/img/hero.jpg")),
            LazyAction::Load("/img/hero.jpg".to_string())
        );
    }

    #[test]
    fn test_already_loaded_image_is_released() {
        assert_eq!(on_intersection(true, None), LazyAction::Unobserve);
        assert_eq!(on_intersection(true, Some("")), LazyAction::Unobserve);
    }
}
