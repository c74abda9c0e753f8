//! Field validation for user record submissions.

use std::sync::LazyLock;

use regex::Regex;

use crate::UserDraft;

/// Phone numbers take the `123-456-7890` shape, exactly 12 characters.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{3}-\d{3}-\d{4}$").expect("phone regex"));

/// Email grammar: dotted atoms or a quoted local part, then a bracketed
/// IPv4 literal or dotted labels ending in a two-plus letter TLD.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("email regex")
});

/// Returns true if `phone` matches the `123-456-7890` format.
pub fn is_valid_phone_number(phone: &str) -> bool {
    phone.len() == 12 && PHONE_RE.is_match(phone)
}

/// Returns true if `email` matches the accepted email grammar.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

impl UserDraft {
    /// Validates all four business fields.
    ///
    /// Fields are checked in order (name, phone, email, hobbies), presence
    /// before format, and every failing field contributes its own message.
    /// An empty error list means the draft is safe to persist.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut messages = Vec::new();

        if self.name.trim().is_empty() {
            messages.push("Please provide a name.".to_string());
        }

        if self.phone_number.trim().is_empty() {
            messages.push("Please provide phone number.".to_string());
        } else if !is_valid_phone_number(&self.phone_number) {
            messages.push("Phone number must be in the format 123-456-7890.".to_string());
        }

        if self.email.trim().is_empty() {
            messages.push("Please provide an email.".to_string());
        } else if !is_valid_email(&self.email) {
            messages.push("Email is not valid.".to_string());
        }

        if self.hobbies.trim().is_empty() {
            messages.push("Please provide hobbies.".to_string());
        }

        if messages.is_empty() {
            Ok(())
        } else {
            Err(messages)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> UserDraft {
        UserDraft::new("Ada Lovelace", "123-456-7890", "ada@example.com", "mathematics")
    }

    #[test]
    fn test_valid_draft_passes() {
        assert!(valid_draft().validate().is_ok());
    }

    #[test]
    fn test_phone_format() {
        assert!(is_valid_phone_number("123-456-7890"));
        assert!(!is_valid_phone_number("1234567890"));
        assert!(!is_valid_phone_number("123-456-789"));
        assert!(!is_valid_phone_number("123-456-78901"));
        assert!(!is_valid_phone_number("abc-def-ghij"));
    }

    #[test]
    fn test_email_grammar() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(is_valid_email("\"quoted local\"@example.com"));
        assert!(is_valid_email("user@[127.0.0.1]"));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@example.com"));
    }

    #[test]
    fn test_blank_fields_report_presence_messages() {
        let draft = UserDraft::new("", " ", "", "");
        let messages = draft.validate().unwrap_err();

        assert_eq!(
            messages,
            vec![
                "Please provide a name.",
                "Please provide phone number.",
                "Please provide an email.",
                "Please provide hobbies.",
            ]
        );
    }

    #[test]
    fn test_malformed_fields_report_format_messages() {
        let draft = UserDraft::new("Ada", "12-34", "not-an-email", "chess");
        let messages = draft.validate().unwrap_err();

        assert_eq!(
            messages,
            vec![
                "Phone number must be in the format 123-456-7890.",
                "Email is not valid.",
            ]
        );
    }

    #[test]
    fn test_presence_beats_format_per_field() {
        let draft = UserDraft::new("Ada", "", "bad", "chess");
        let messages = draft.validate().unwrap_err();

        assert_eq!(
            messages,
            vec!["Please provide phone number.", "Email is not valid."]
        );
    }
}
