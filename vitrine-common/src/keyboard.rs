/// Keys the page reacts to, parsed from `KeyboardEvent.key`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Enter,
    Space,
    Char(char),
    Other,
}

impl Key {
    pub fn parse(key: &str) -> Self {
        match key {
            "Escape" | "Esc" => Key::Escape,
            "Enter" => Key::Enter,
            " " | "Spacebar" => Key::Space,
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => Key::Other,
                }
            }
        }
    }

    /// Enter and Space activate a focused control
    pub fn activates(self) -> bool {
        matches!(self, Key::Enter | Key::Space)
    }
}

/// Alt+M (Cmd+M on macOS) jumps to the main content landmark
pub fn is_skip_to_main(key: Key, alt: bool, meta: bool) -> bool {
    (alt || meta) && matches!(key, Key::Char('m') | Key::Char('M'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Key::parse("Escape"), Key::Escape);
        assert_eq!(Key::parse("Esc"), Key::Escape);
        assert_eq!(Key::parse("Enter"), Key::Enter);
        assert_eq!(Key::parse(" "), Key::Space);
        assert_eq!(Key::parse("m"), Key::Char('m'));
        assert_eq!(Key::parse("é"), Key::Char('é'));
        assert_eq!(Key::parse("ArrowDown"), Key::Other);
        assert_eq!(Key::parse(""), Key::Other);
    }

    #[test]
    fn test_activates() {
        assert!(Key::Enter.activates());
        assert!(Key::Space.activates());
        assert!(!Key::Escape.activates());
        assert!(!Key::Char('a').activates());
    }

    #[test]
    fn test_skip_to_main() {
        assert!(is_skip_to_main(Key::Char('m'), true, false));
        assert!(is_skip_to_main(Key::Char('M'), false, true));
        assert!(!is_skip_to_main(Key::Char('m'), false, false));
        assert!(!is_skip_to_main(Key::Char('n'), true, false));
    }
}
