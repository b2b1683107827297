//! Unlock-record persistence for the age gate.
//!
//! Trait-based abstraction for the single record the gate persists: "this
//! visitor already unlocked the content". The trait is synchronous (no
//! async) to maintain a clean synchronous API design; asynchronous
//! transports wrap a store behind the application's driver seam.
//!
//! Failures here are never fatal to the gate: callers treat a failed load as
//! "no record" and a failed save as best-effort.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod error;
mod json;
mod memory;

pub use error::StoreError;
pub use json::JsonStore;
pub use memory::MemoryStore;
use serde::{Deserialize, Serialize};

/// The record persisted after a successful gate submission.
///
/// Mirrors what the gate has always written: the formatted birthdate, a
/// registered flag, and a wall-clock timestamp. Only `registered` is read
/// back; the rest is kept for inspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockRecord {
    /// Formatted `DD/MM/YYYY` birthdate as submitted.
    pub birthdate: String,
    /// Whether the visitor completed the gate.
    pub registered: bool,
    /// Unix timestamp (seconds) when the record was saved.
    pub saved_at_secs: u64,
}

impl UnlockRecord {
    /// Build a registered record for a submitted birthdate.
    pub fn registered(birthdate: impl Into<String>, saved_at_secs: u64) -> Self {
        Self { birthdate: birthdate.into(), registered: true, saved_at_secs }
    }
}

/// Storage abstraction for the unlock record.
///
/// Must be Clone (shared between the startup probe and the save path),
/// Send + Sync (thread-safe), and synchronous (no async methods).
/// Implementations typically share internal state via Arc, so clones access
/// the same underlying storage.
pub trait UnlockStore: Clone + Send + Sync + 'static {
    /// Persist the unlock record, replacing any previous one.
    fn save_unlock(&self, record: &UnlockRecord) -> Result<(), StoreError>;

    /// Load the persisted record. `None` if nothing was ever saved.
    fn load_unlock(&self) -> Result<Option<UnlockRecord>, StoreError>;

    /// Whether a registered unlock record exists.
    ///
    /// Convenience over [`UnlockStore::load_unlock`]: `true` only if a
    /// record loads and its `registered` flag is set.
    fn has_unlock(&self) -> Result<bool, StoreError> {
        Ok(self.load_unlock()?.is_some_and(|record| record.registered))
    }
}
