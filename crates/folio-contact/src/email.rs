//! Email address shape check.

use std::sync::OnceLock;

use regex::Regex;

/// One `@`, a non-empty local part, and a dotted domain with no whitespace.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@.]+(?:\.[^\s@.]+)+$";

fn email_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("Invalid regex pattern"))
}

/// Check whether `address` looks like a deliverable email address.
///
/// This is a structural check only. It rejects obviously malformed input
/// (no `@`, several `@`, empty local part, dotless or empty domain labels)
/// and accepts ordinary addresses such as `peter@gmail.com`. Surrounding
/// whitespace is ignored.
#[must_use]
pub fn is_valid_email(address: &str) -> bool {
    email_regex().is_match(address.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_standard_addresses() {
        for address in [
            "a@b.com",
            "sam@x.com",
            "peter@gmail.com",
            "first.last+tag@mail.example.co.uk",
            "  padded@example.org  ",
        ] {
            assert!(is_valid_email(address), "should accept {address}");
        }
    }

    #[test]
    fn test_rejects_missing_at() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("example.com"));
    }

    #[test]
    fn test_rejects_multiple_at() {
        assert!(!is_valid_email("a@b@c.com"));
    }

    #[test]
    fn test_rejects_empty_parts() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("sam@"));
    }

    #[test]
    fn test_rejects_dotless_domain() {
        assert!(!is_valid_email("sam@localhost"));
    }

    #[test]
    fn test_rejects_empty_domain_labels() {
        assert!(!is_valid_email("sam@.com"));
        assert!(!is_valid_email("sam@example."));
        assert!(!is_valid_email("sam@example..com"));
    }

    #[test]
    fn test_rejects_inner_whitespace() {
        assert!(!is_valid_email("sam smith@example.com"));
        assert!(!is_valid_email("sam@exa mple.com"));
    }

    #[test]
    fn test_pattern_compiles() {
        assert!(Regex::new(EMAIL_PATTERN).is_ok());
    }
}
