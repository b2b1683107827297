//! Store error types.

use std::io;

use thiserror::Error;

/// Errors from unlock-record storage.
///
/// None of these are surfaced to the visitor: callers recover by treating a
/// failed load as "no record found" and a failed save as best-effort.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying I/O failed.
    #[error("storage I/O failed: {0}")]
    Io(#[from] io::Error),

    /// Stored record exists but cannot be decoded.
    #[error("stored record is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}
