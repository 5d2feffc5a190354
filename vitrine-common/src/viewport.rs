/// Interaction mode selected by the viewport width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// Width at or below the threshold (mobile navigation)
    Narrow,
    /// Width above the threshold (desktop hover navigation)
    Wide,
}

impl Breakpoint {
    pub fn for_width(width: f64, threshold: f64) -> Self {
        if width <= threshold {
            Breakpoint::Narrow
        } else {
            Breakpoint::Wide
        }
    }

    pub fn is_narrow(self) -> bool {
        self == Breakpoint::Narrow
    }
}

/// Snapshot of the two environment signals every handler reads
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub scroll_y: f64,
}

impl Viewport {
    pub fn new(width: f64, scroll_y: f64) -> Self {
        Self { width, scroll_y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_narrow() {
        assert_eq!(Breakpoint::for_width(768.0, 768.0), Breakpoint::Narrow);
        assert_eq!(Breakpoint::for_width(320.0, 768.0), Breakpoint::Narrow);
    }

    #[test]
    fn test_above_threshold_is_wide() {
        assert_eq!(Breakpoint::for_width(769.0, 768.0), Breakpoint::Wide);
        assert_eq!(Breakpoint::for_width(768.5, 768.0), Breakpoint::Wide);
    }
}
