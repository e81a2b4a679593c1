//! CSV export of the local waitlist.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{NaiveDate, Utc};
use waitline_core::SignupRecord;
use waitline_store::WaitlistStore;

pub const CSV_HEADER: &str = "Email,Timestamp,Source";

/// What an export request produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Nothing stored locally; no file was written.
    Empty,
    Written { path: PathBuf, rows: usize },
}

/// Serialize the waitlist as CSV text, one header row plus one row per
/// signup. Fields are written verbatim with no quoting or escaping, so
/// an embedded comma shifts the columns of its row. Deliberate: the
/// sheet on the other end stores exactly what was signed up with.
pub fn waitlist_to_csv(signups: &[SignupRecord]) -> String {
    let mut csv = String::from(CSV_HEADER);
    csv.push('\n');
    for record in signups {
        csv.push_str(&format!(
            "{},{},{}\n",
            record.email, record.timestamp, record.source
        ));
    }
    csv
}

/// File name for an export performed on `date`.
pub fn export_filename(date: NaiveDate) -> String {
    format!("waitlist-{}.csv", date.format("%Y-%m-%d"))
}

/// Write the current waitlist to a dated CSV file under `out_dir`.
///
/// An empty waitlist produces no file at all, only [`ExportOutcome::Empty`].
pub fn export_waitlist(store: &WaitlistStore, out_dir: &Path) -> anyhow::Result<ExportOutcome> {
    let signups = store.signups()?;
    if signups.is_empty() {
        return Ok(ExportOutcome::Empty);
    }

    let path = out_dir.join(export_filename(Utc::now().date_naive()));
    fs::write(&path, waitlist_to_csv(&signups))
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), rows = signups.len(), "waitlist exported");
    Ok(ExportOutcome::Written {
        path,
        rows: signups.len(),
    })
}
