//! Delivery layer: HTTP client for pushing signups to the sheet endpoint.

pub mod http;

pub use http::{ENDPOINT_PLACEHOLDER, SheetAck, SheetClient, SyncError};
