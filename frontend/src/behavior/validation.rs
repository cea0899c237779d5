use once_cell::sync::Lazy;
use regex::Regex;

// Deliberately permissive: no whitespace, an "@", a "." somewhere
// after it. Kept lax on purpose so existing visitors aren't rejected.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern compiles"));

pub const SUCCESS_MESSAGE: &str = "Thank you for your message! We'll get back to you soon.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormError {
    MissingFields,
    InvalidEmail,
}

impl FormError {
    pub fn message(self) -> &'static str {
        match self {
            FormError::MissingFields => "Please fill in all required fields.",
            FormError::InvalidEmail => "Please enter a valid email address.",
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Checks the three contact fields in fixed order: presence of all
/// required fields first, then the email shape.
pub fn validate_submission(name: &str, email: &str, message: &str) -> Result<(), FormError> {
    let name = name.trim();
    let email = email.trim();
    let message = message.trim();

    if name.is_empty() || email.is_empty() || message.is_empty() {
        return Err(FormError::MissingFields);
    }
    if !is_valid_email(email) {
        return Err(FormError::InvalidEmail);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_empty_field_reports_missing_fields() {
        let cases = [
            ("", "a@b.com", "hi"),
            ("A", "", "hi"),
            ("A", "a@b.com", ""),
            ("", "", ""),
            ("   ", "a@b.com", "hi"),
            ("A", "a@b.com", "\t\n"),
        ];
        for (name, email, message) in cases {
            assert_eq!(
                validate_submission(name, email, message),
                Err(FormError::MissingFields),
                "name={name:?} email={email:?} message={message:?}"
            );
        }
    }

    #[test]
    fn missing_fields_wins_over_bad_email() {
        assert_eq!(
            validate_submission("", "not-an-email", "hi"),
            Err(FormError::MissingFields)
        );
    }

    #[test]
    fn bad_email_shapes_are_rejected() {
        for email in ["no-at-sign.com", "a@b", "bad", "a @b.com", "a@b .com", "a@.com", "a@b."] {
            assert_eq!(
                validate_submission("A", email, "hi"),
                Err(FormError::InvalidEmail),
                "email={email:?}"
            );
        }
    }

    #[test]
    fn lax_pattern_accepts_double_at() {
        // The pattern only demands no whitespace, an @ and a later dot.
        assert!(is_valid_email("a@b@c.com"));
        assert_eq!(validate_submission("A", "a@b@c.com", "hi"), Ok(()));
    }

    #[test]
    fn well_formed_submission_passes() {
        assert_eq!(validate_submission("A", "a@b.com", "hi"), Ok(()));
        assert_eq!(
            validate_submission("  A  ", "  a@b.com  ", "  hi  "),
            Ok(())
        );
    }

    #[test]
    fn error_messages_match_the_site_copy() {
        assert_eq!(
            FormError::MissingFields.message(),
            "Please fill in all required fields."
        );
        assert_eq!(
            FormError::InvalidEmail.message(),
            "Please enter a valid email address."
        );
    }
}
