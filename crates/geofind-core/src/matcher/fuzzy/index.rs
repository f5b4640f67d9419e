// crates/geofind-core/src/matcher/fuzzy/index.rs

//! # Fuzzy Index Cache
//!
//! The fuzzy matcher pre-folds every indexed field once per dataset version.
//! A dataset version is identified by a [`Fingerprint`] of the ordered record
//! codes, re-derived from the live candidates on every call. The cache keeps
//! the [`CACHE_SLOTS`] most recently used versions, so a host alternating
//! filtered `search` calls with unfiltered `multi_search` calls does not
//! rebuild on every keystroke.

use crate::config::FieldWeights;
use crate::model::{Record, SearchField};
use crate::text::fold_chars;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

/// Fields the fuzzy index covers, highest weight first.
pub const INDEXED_FIELDS: [SearchField; 4] = [
    SearchField::Name,
    SearchField::AltName,
    SearchField::Country,
    SearchField::CountryCode,
];

/// Dataset versions kept at once: one pre-filtered, one unfiltered.
pub const CACHE_SLOTS: usize = 2;

/// Cheap identity of a candidate set: order- and content-sensitive over codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    len: usize,
    hash: u64,
}

impl Fingerprint {
    pub fn of(records: &[&Record]) -> Self {
        // DefaultHasher::new() uses fixed keys, so this is stable within a process.
        let mut hasher = DefaultHasher::new();
        for r in records {
            r.code.hash(&mut hasher);
        }
        Self {
            len: records.len(),
            hash: hasher.finish(),
        }
    }
}

/// One pre-folded field of one record.
#[derive(Clone, Debug)]
pub struct IndexedField {
    pub field: SearchField,
    pub weight: f64,
    pub value: String,
    pub folded: Vec<char>,
}

/// Indexed view of one record; position matches the candidate slice.
#[derive(Clone, Debug, Default)]
pub struct IndexEntry {
    pub fields: Vec<IndexedField>,
}

impl IndexEntry {
    pub fn get(&self, field: SearchField) -> Option<&IndexedField> {
        self.fields.iter().find(|f| f.field == field)
    }
}

/// Derived, read-only index over one dataset version.
#[derive(Clone, Debug)]
pub struct FuzzyIndex {
    fingerprint: Fingerprint,
    entries: Vec<IndexEntry>,
}

impl FuzzyIndex {
    pub fn build(records: &[&Record], weights: &FieldWeights) -> Self {
        let entries = records
            .iter()
            .map(|r| IndexEntry {
                fields: INDEXED_FIELDS
                    .iter()
                    .filter_map(|&field| {
                        let value = r.field(field)?;
                        Some(IndexedField {
                            field,
                            weight: weights.weight(field)?,
                            value: value.to_string(),
                            folded: fold_chars(value),
                        })
                    })
                    .collect(),
            })
            .collect();

        Self {
            fingerprint: Fingerprint::of(records),
            entries,
        }
    }

    pub fn fingerprint(&self) -> Fingerprint {
        self.fingerprint
    }

    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Small most-recently-used cache of indexes, keyed by fingerprint.
///
/// Rebuilds happen under the cache lock and finished indexes are published
/// as `Arc`s, so concurrent callers never see a half-built index.
#[derive(Debug, Default)]
pub struct IndexCache {
    slots: Mutex<Vec<Arc<FuzzyIndex>>>,
    rebuilds: AtomicUsize,
}

impl IndexCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached index whose fingerprint matches `records`,
    /// otherwise build, publish and return a fresh one. The least recently
    /// used index is evicted once more than [`CACHE_SLOTS`] are held.
    pub fn get_or_rebuild(&self, records: &[&Record], weights: &FieldWeights) -> Arc<FuzzyIndex> {
        let fingerprint = Fingerprint::of(records);
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(pos) = slots.iter().position(|i| i.fingerprint == fingerprint) {
            debug!(records = records.len(), "reusing fuzzy index");
            let index = slots.remove(pos);
            slots.insert(0, Arc::clone(&index));
            return index;
        }

        debug!(records = records.len(), "rebuilding fuzzy index");
        let index = Arc::new(FuzzyIndex::build(records, weights));
        slots.insert(0, Arc::clone(&index));
        slots.truncate(CACHE_SLOTS);
        self.rebuilds.fetch_add(1, Ordering::Relaxed);
        index
    }

    /// Number of builds since creation.
    pub fn rebuild_count(&self) -> usize {
        self.rebuilds.load(Ordering::Relaxed)
    }

    /// Drop every cached index; the next call rebuilds.
    pub fn clear(&self) {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}
