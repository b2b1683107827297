use std::{fs, io, path::PathBuf, sync::Arc};

use super::{StoreError, UnlockRecord, UnlockStore};

/// Single-file JSON store.
///
/// The whole record is one small JSON document, rewritten on every save. A
/// missing file means no record; an unreadable or undecodable file is an
/// error the caller downgrades to "no record".
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: Arc<PathBuf>,
}

impl JsonStore {
    /// Create a store backed by the given file path.
    ///
    /// The file is not created until the first save; parent directories must
    /// already exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: Arc::new(path.into()) }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl UnlockStore for JsonStore {
    fn save_unlock(&self, record: &UnlockRecord) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(record)?;
        fs::write(self.path.as_path(), json)?;
        Ok(())
    }

    fn load_unlock(&self) -> Result<Option<UnlockRecord>, StoreError> {
        let bytes = match fs::read(self.path.as_path()) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        Ok(Some(serde_json::from_slice(&bytes)?))
    }
}
