//! The persisted unit for one waitlist entry.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::EmailAddress;

/// Source tag stamped on every record this system produces.
pub const SIGNUP_SOURCE: &str = "website";

/// One waitlist entry.
///
/// Appended to the waitlist list or posted to the sheet endpoint; never
/// mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupRecord {
    pub email: String,
    /// ISO 8601 timestamp string, capture time.
    pub timestamp: String,
    pub source: String,
}

impl SignupRecord {
    /// Build a record for a validated email, stamped with the current UTC
    /// time (millisecond precision, `Z` suffix).
    pub fn capture(email: &EmailAddress) -> Self {
        Self {
            email: email.as_str().to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            source: SIGNUP_SOURCE.to_string(),
        }
    }
}
