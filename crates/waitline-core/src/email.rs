//! Validated email addresses for signup submissions.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

// Deliberately loose: a local part without whitespace or `@`, one `@`, then
// a domain containing a literal dot. Not an RFC 5322 parser.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// An email address that passed the signup form's validation pattern.
///
/// Construction goes through [`parse`](Self::parse), which trims the raw
/// field value first; the inner string is always the trimmed form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

/// Raw form input that failed validation (empty after trimming, or not
/// matching the accepted pattern).
#[derive(Debug, Error)]
#[error("`{0}` is not a valid email address")]
pub struct InvalidEmail(pub String);

impl EmailAddress {
    /// Validate a raw form field value.
    ///
    /// Leading/trailing whitespace is trimmed before matching; empty input
    /// is invalid.
    pub fn parse(raw: &str) -> Result<Self, InvalidEmail> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || !EMAIL_PATTERN.is_match(trimmed) {
            return Err(InvalidEmail(raw.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
