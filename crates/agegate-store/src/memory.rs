use std::sync::{Arc, Mutex};

use super::{StoreError, UnlockRecord, UnlockStore};

/// In-memory store for testing and simulation.
///
/// The record is wrapped in `Arc<Mutex<_>>` so clones share the same state.
/// Uses `lock().expect()` which will panic if the mutex is poisoned -
/// acceptable for test code.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    record: Arc<Mutex<Option<UnlockRecord>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding a registered record.
    ///
    /// Shorthand for startup short-circuit tests.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned. This is acceptable for test
    /// code.
    #[allow(clippy::expect_used)]
    pub fn with_unlock(birthdate: &str) -> Self {
        let store = Self::new();
        *store.record.lock().expect("Mutex poisoned") = Some(UnlockRecord::registered(birthdate, 0));
        store
    }
}

impl UnlockStore for MemoryStore {
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned (a thread panicked while
    /// holding the lock). This is acceptable for test/simulation code.
    #[allow(clippy::expect_used)]
    fn save_unlock(&self, record: &UnlockRecord) -> Result<(), StoreError> {
        *self.record.lock().expect("Mutex poisoned") = Some(record.clone());
        Ok(())
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned. This is acceptable for test
    /// code.
    #[allow(clippy::expect_used)]
    fn load_unlock(&self) -> Result<Option<UnlockRecord>, StoreError> {
        Ok(self.record.lock().expect("Mutex poisoned").clone())
    }
}
