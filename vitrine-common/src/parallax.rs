/// Vertical background shift for a given scroll position
pub fn parallax_offset(scroll_y: f64, factor: f64) -> f64 {
    scroll_y * factor
}

/// CSS `background-position` anchored at the bottom center, shifted by `offset`
pub fn background_position(offset: f64) -> String {
    // Hundredths of a pixel; avoids printing float noise like 30.000000000000004
    let offset = (offset * 100.0).round() / 100.0;
    if offset == 0.0 {
        "center 100%".to_string()
    } else if offset > 0.0 {
        format!("center calc(100% - {}px)", offset)
    } else {
        format!("center calc(100% + {}px)", offset.abs())
    }
}

/// At most one parallax update per animation frame.
///
/// Scroll events can arrive several times per frame; only the first one in a
/// frame schedules work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameCoalescer {
    pending: bool,
}

impl FrameCoalescer {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the caller should request an animation frame
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Called from the frame callback before applying the update
    pub fn frame_ran(&mut self) {
        self.pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        assert_eq!(parallax_offset(0.0, 0.3), 0.0);
        assert!((parallax_offset(100.0, 0.3) - 30.0).abs() < 1e-9);
        assert_eq!(parallax_offset(200.0, 0.5), 100.0);
    }

    #[test]
    fn test_background_position() {
        assert_eq!(background_position(0.0), "center 100%");
        assert_eq!(background_position(30.0), "center calc(100% - 30px)");
        assert_eq!(background_position(-12.5), "center calc(100% + 12.5px)");
        assert_eq!(
            background_position(parallax_offset(100.0, 0.3)),
            "center calc(100% - 30px)"
        );
    }

    #[test]
    fn test_coalesces_within_a_frame() {
        let mut frames = FrameCoalescer::new();
        assert!(frames.request());
        assert!(!frames.request());
        assert!(!frames.request());

        frames.frame_ran();
        assert!(frames.request());
        assert!(!frames.request());
    }
}
