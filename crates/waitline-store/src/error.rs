use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed list blob at {path}: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
}
