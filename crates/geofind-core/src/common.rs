// crates/geofind-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a record snapshot.
///
/// Returned by [`RecordStore::stats`](crate::loader::RecordStore::stats).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStats {
    pub records: usize,
    /// Distinct country codes (case-insensitive).
    pub countries: usize,
    pub obsolete: usize,
    /// Records whose coordinates are not the `0,0` sentinel.
    pub with_coordinates: usize,
}
