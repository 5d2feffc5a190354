use crate::config::SiteConfig;

/// Outcome of checking the required fields of a form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormValidation {
    /// Per-field flag, same order as the input, true when the field is invalid
    pub invalid: Vec<bool>,
    /// First invalid field, which receives focus
    pub first_invalid: Option<usize>,
}

impl FormValidation {
    pub fn is_valid(&self) -> bool {
        self.first_invalid.is_none()
    }

    pub fn invalid_count(&self) -> usize {
        self.invalid.iter().filter(|invalid| **invalid).count()
    }

    /// What the submit handler does with this result
    pub fn outcome<'a>(&self, config: &'a SiteConfig) -> SubmitOutcome<'a> {
        match self.first_invalid {
            Some(index) => SubmitOutcome::FocusInvalid(index),
            None => SubmitOutcome::Confirm {
                message: &config.labels.form_success,
                dismiss_ms: config.confirmation_dismiss_ms,
            },
        }
    }
}

/// Submit handler action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome<'a> {
    /// Move focus to this field; no confirmation is shown
    FocusInvalid(usize),
    /// Show `message` as a focused alert before the form, reset the form,
    /// and remove the alert after `dismiss_ms`
    Confirm { message: &'a str, dismiss_ms: u32 },
}

/// Required fields are invalid when empty after trimming whitespace
pub fn validate_required<'a, I>(values: I) -> FormValidation
where
    I: IntoIterator<Item = &'a str>,
{
    let invalid: Vec<bool> = values
        .into_iter()
        .map(|value| value.trim().is_empty())
        .collect();
    let first_invalid = invalid.iter().position(|invalid| *invalid);
    FormValidation {
        invalid,
        first_invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_filled() {
        let v = validate_required(["Marie", "marie@example.org", "Bonjour"]);
        assert!(v.is_valid());
        assert_eq!(v.invalid, vec![false, false, false]);
        assert_eq!(v.invalid_count(), 0);
    }

    #[test]
    fn test_only_empty_fields_marked() {
        let v = validate_required(["Marie", "", "Bonjour", "   \n"]);
        assert!(!v.is_valid());
        assert_eq!(v.invalid, vec![false, true, false, true]);
        assert_eq!(v.first_invalid, Some(1));
        assert_eq!(v.invalid_count(), 2);
    }

    #[test]
    fn test_no_required_fields() {
        let v = validate_required(std::iter::empty());
        assert!(v.is_valid());
        assert!(v.invalid.is_empty());
    }

    #[test]
    fn test_valid_submission_confirms() {
        let config = SiteConfig::default();
        let v = validate_required(["Marie", "marie@example.org", "Bonjour"]);
        assert_eq!(
            v.outcome(&config),
            SubmitOutcome::Confirm {
                message: "Merci pour votre message! Nous vous répondrons dans les plus brefs délais.",
                dismiss_ms: 5000,
            }
        );
    }

    #[test]
    fn test_invalid_submission_focuses_first_empty_field() {
        let config = SiteConfig::default();
        let v = validate_required(["Marie", "  ", ""]);
        assert_eq!(v.outcome(&config), SubmitOutcome::FocusInvalid(1));
    }

    #[test]
    fn test_confirmation_follows_config() {
        let config = SiteConfig::from_json(
            r#"{"confirmation_dismiss_ms": 8000, "labels": {"form_success": "Thanks!"}}"#,
        )
        .unwrap();
        let v = validate_required(["a"]);
        assert_eq!(
            v.outcome(&config),
            SubmitOutcome::Confirm {
                message: "Thanks!",
                dismiss_ms: 8000,
            }
        );
    }
}
