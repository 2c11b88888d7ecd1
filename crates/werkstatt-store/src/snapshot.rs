//! File-backed snapshot store implementation.

use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use werkstatt_core::Ledger;

use crate::error::{Result, StoreError};
use crate::schema::{Snapshot, SNAPSHOT_VERSION};
use crate::SnapshotStore;

/// File-backed snapshot storage.
///
/// Saving serializes the whole ledger to a temporary file in the
/// destination directory and renames it over the target, so a reader never
/// observes a partially overwritten snapshot.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store for the given snapshot location.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The snapshot location.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize a snapshot using CBOR.
    fn serialize(snapshot: &Snapshot) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        ciborium::into_writer(snapshot, &mut buf)
            .map_err(|e| StoreError::Encode(e.to_string()))?;
        Ok(buf)
    }

    /// Deserialize a snapshot from CBOR.
    fn deserialize(data: &[u8]) -> Result<Snapshot> {
        ciborium::from_reader(data).map_err(|e| StoreError::Decode(e.to_string()))
    }
}

impl SnapshotStore for FileStore {
    fn load(&self) -> Result<Ledger> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Ledger::new()),
            Err(e) => return Err(StoreError::Read(e.to_string())),
        };

        let snapshot = Self::deserialize(&data)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(StoreError::Decode(format!(
                "unsupported snapshot version: {}",
                snapshot.version
            )));
        }

        Ok(Ledger::from_entries(snapshot.entries))
    }

    fn save(&self, ledger: &Ledger) -> Result<()> {
        let snapshot = Snapshot {
            version: SNAPSHOT_VERSION,
            entries: ledger.entries().to_vec(),
        };
        let data = Self::serialize(&snapshot)?;

        // The temp file must live in the destination directory so the final
        // rename stays on one filesystem.
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| StoreError::Write(e.to_string()))?;
        tmp.write_all(&data)
            .map_err(|e| StoreError::Write(e.to_string()))?;
        tmp.persist(&self.path)
            .map_err(|e| StoreError::Write(e.to_string()))?;

        Ok(())
    }

    fn reset(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Write(e.to_string())),
        }
    }
}
