//! Storage layer: two append-only JSON list blobs on the local device.

mod error;
pub use error::StoreError;

mod json;
pub use json::{SUBMITTED_FILE, WAITLIST_FILE, WaitlistStore};
