//! On-disk snapshot schema.
//!
//! The snapshot is a single CBOR document: a versioned envelope around the
//! full entry list. The format is opaque to external tools; the version
//! field exists so a future layout change can be detected instead of
//! misread.

use serde::{Deserialize, Serialize};
use werkstatt_core::Entry;

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// The envelope serialized to the storage location.
#[derive(Debug, Serialize, Deserialize)]
pub struct Snapshot {
    /// Format version. Anything other than [`SNAPSHOT_VERSION`] is
    /// treated as undecodable on load.
    pub version: u32,

    /// Every ledger entry.
    pub entries: Vec<Entry>,
}
