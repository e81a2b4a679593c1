//! JSON file storage for the waitlist and submitted-emails lists.
//!
//! Each list is one keyed text blob holding a JSON-encoded array. Appends
//! are read-modify-write of the whole blob; a missing blob reads as the
//! empty list. Nothing here ever deletes or rewrites an existing entry,
//! and no lock is taken against other processes sharing the directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::info;

use waitline_core::{EmailAddress, SignupRecord};

use crate::StoreError;

/// Blob holding the waitlist list (array of signup records).
pub const WAITLIST_FILE: &str = "waitlist.json";
/// Blob holding the submitted-emails list (array of strings).
pub const SUBMITTED_FILE: &str = "submitted.json";

/// File-backed store for the two signup lists.
///
/// The *waitlist list* collects every record that was not delivered
/// remotely; the *submitted-emails list* records which emails completed a
/// submission flow on this device and exists only for duplicate detection.
/// Both are append-only.
pub struct WaitlistStore {
    waitlist_path: PathBuf,
    submitted_path: PathBuf,
}

impl WaitlistStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: &Path) -> Result<Self, StoreError> {
        fs::create_dir_all(dir).map_err(|source| StoreError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        Ok(Self {
            waitlist_path: dir.join(WAITLIST_FILE),
            submitted_path: dir.join(SUBMITTED_FILE),
        })
    }

    // ── Waitlist list ──

    /// All records in the waitlist list, oldest first.
    pub fn signups(&self) -> Result<Vec<SignupRecord>, StoreError> {
        read_list(&self.waitlist_path)
    }

    /// Number of records in the waitlist list.
    pub fn signup_count(&self) -> Result<usize, StoreError> {
        Ok(self.signups()?.len())
    }

    /// Append one record to the waitlist list.
    ///
    /// Duplicate emails are allowed here; only the submitted-emails list
    /// is consulted for duplicate prevention, and only by the caller.
    pub fn append_signup(&self, record: &SignupRecord) -> Result<(), StoreError> {
        let mut list: Vec<SignupRecord> = read_list(&self.waitlist_path)?;
        list.push(record.clone());
        write_list(&self.waitlist_path, &list)?;
        info!(email = %record.email, total = list.len(), "signup saved to local waitlist");
        Ok(())
    }

    // ── Submitted-emails list ──

    /// Emails that completed a submission flow on this device.
    pub fn submitted(&self) -> Result<Vec<String>, StoreError> {
        read_list(&self.submitted_path)
    }

    /// Exact-match membership test against the submitted-emails list.
    pub fn is_submitted(&self, email: &str) -> Result<bool, StoreError> {
        Ok(self.submitted()?.iter().any(|e| e == email))
    }

    /// Record an email as submitted.
    ///
    /// Called once per successful flow; this method itself never
    /// deduplicates.
    pub fn mark_submitted(&self, email: &EmailAddress) -> Result<(), StoreError> {
        let mut list = self.submitted()?;
        list.push(email.as_str().to_string());
        write_list(&self.submitted_path, &list)
    }
}

fn read_list<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(source) if source.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    serde_json::from_str(&text).map_err(|source| StoreError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

fn write_list<T: Serialize>(path: &Path, list: &[T]) -> Result<(), StoreError> {
    let text = serde_json::to_string(list).map_err(|source| StoreError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, text).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(email: &str) -> SignupRecord {
        SignupRecord {
            email: email.to_string(),
            timestamp: "2026-08-26T09:15:42.123Z".to_string(),
            source: "website".to_string(),
        }
    }

    fn email(raw: &str) -> EmailAddress {
        EmailAddress::parse(raw).unwrap()
    }

    #[test]
    fn open_creates_directory() {
        let tmp = tempfile::TempDir::new().unwrap();
        let dir = tmp.path().join("nested").join("data");
        assert!(!dir.exists());
        WaitlistStore::open(&dir).unwrap();
        assert!(dir.exists());
    }

    #[test]
    fn missing_blobs_read_as_empty() {
        let tmp = tempfile::TempDir::new().unwrap();
        let store = WaitlistStore::open(tmp.path()).unwrap();
        assert!(store.signups().unwrap().is_empty());
        assert_eq!(store.signup_count().unwrap(), 0);
        assert!(store.submitted().unwrap().is_empty());
        assert!(!store.is_submitted("user@example.com").unwrap());
    }

    #[test]
    fn append_preserves_order() {
        let tmp = tempfile::TempDir::new().unwrap();
        let store = WaitlistStore::open(tmp.path()).unwrap();
        store.append_signup(&record("a@x.io")).unwrap();
        store.append_signup(&record("b@x.io")).unwrap();
        store.append_signup(&record("c@x.io")).unwrap();

        let emails: Vec<String> = store
            .signups()
            .unwrap()
            .into_iter()
            .map(|r| r.email)
            .collect();
        assert_eq!(emails, vec!["a@x.io", "b@x.io", "c@x.io"]);
    }

    #[test]
    fn waitlist_never_deduplicates() {
        let tmp = tempfile::TempDir::new().unwrap();
        let store = WaitlistStore::open(tmp.path()).unwrap();
        store.append_signup(&record("a@x.io")).unwrap();
        store.append_signup(&record("a@x.io")).unwrap();
        assert_eq!(store.signup_count().unwrap(), 2);
    }

    #[test]
    fn reopen_sees_persisted_lists() {
        let tmp = tempfile::TempDir::new().unwrap();
        {
            let store = WaitlistStore::open(tmp.path()).unwrap();
            store.append_signup(&record("a@x.io")).unwrap();
            store.mark_submitted(&email("a@x.io")).unwrap();
        }
        let store = WaitlistStore::open(tmp.path()).unwrap();
        assert_eq!(store.signup_count().unwrap(), 1);
        assert!(store.is_submitted("a@x.io").unwrap());
    }

    #[test]
    fn is_submitted_is_exact_match() {
        let tmp = tempfile::TempDir::new().unwrap();
        let store = WaitlistStore::open(tmp.path()).unwrap();
        store.mark_submitted(&email("user@example.com")).unwrap();
        assert!(store.is_submitted("user@example.com").unwrap());
        assert!(!store.is_submitted("User@example.com").unwrap());
        assert!(!store.is_submitted("user@example.co").unwrap());
    }

    #[test]
    fn two_handles_share_one_directory() {
        // Every operation re-reads the blob, so a second handle observes
        // appends made through the first.
        let tmp = tempfile::TempDir::new().unwrap();
        let writer = WaitlistStore::open(tmp.path()).unwrap();
        let reader = WaitlistStore::open(tmp.path()).unwrap();
        writer.append_signup(&record("a@x.io")).unwrap();
        assert_eq!(reader.signup_count().unwrap(), 1);
    }

    #[test]
    fn waitlist_blob_is_a_json_array_of_records() {
        let tmp = tempfile::TempDir::new().unwrap();
        let store = WaitlistStore::open(tmp.path()).unwrap();
        store.append_signup(&record("a@x.io")).unwrap();

        let text = fs::read_to_string(tmp.path().join(WAITLIST_FILE)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let entry = &value.as_array().unwrap()[0];
        assert_eq!(entry["email"], "a@x.io");
        assert_eq!(entry["timestamp"], "2026-08-26T09:15:42.123Z");
        assert_eq!(entry["source"], "website");
    }

    #[test]
    fn corrupt_blob_is_reported_not_reset() {
        let tmp = tempfile::TempDir::new().unwrap();
        let store = WaitlistStore::open(tmp.path()).unwrap();
        fs::write(tmp.path().join(WAITLIST_FILE), "{not json").unwrap();
        assert!(matches!(
            store.signups(),
            Err(StoreError::Malformed { .. })
        ));
    }
}
