// crates/geofind-core/src/loader/mod.rs

//! # Data Loader
//!
//! The engine itself only ever sees `&[Record]`. This module is the
//! ingestion side: it reads datasets (source JSON, optionally gzipped, or a
//! bincode cache), normalizes raw rows and guarantees unique record codes.

use crate::common::StoreStats;
use crate::error::{FindError, Result};
use crate::model::Record;
use bincode::Options;
use once_cell::sync::OnceCell;
use std::collections::HashSet;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

pub mod common_io;

use common_io::{detect_format, open_stream, SourceFormat};

/// Upper bound for bincode payloads; guards against data bombs.
const BINARY_LIMIT: u64 = 256 * 1024 * 1024;

static DEFAULT_STORE: OnceCell<RecordStore> = OnceCell::new();

/// Validated, immutable snapshot of records.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    /// Wrap `records`, rejecting duplicate codes.
    pub fn new(records: Vec<Record>) -> Result<Self> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(records.len());
        for r in &records {
            if !seen.insert(r.code.as_str()) {
                return Err(FindError::DuplicateCode(r.code.clone()));
            }
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find_by_code(&self, code: &str) -> Option<&Record> {
        let code = code.trim();
        self.records
            .iter()
            .find(|r| r.code.eq_ignore_ascii_case(code))
    }

    pub fn stats(&self) -> StoreStats {
        let countries: HashSet<String> = self
            .records
            .iter()
            .map(|r| r.country_code.to_ascii_uppercase())
            .collect();
        StoreStats {
            records: self.records.len(),
            countries: countries.len(),
            obsolete: self.records.iter().filter(|r| r.obsolete).count(),
            with_coordinates: self.records.iter().filter(|r| r.has_coordinates()).count(),
        }
    }

    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "facilities.json"
    }

    /// The bundled sample dataset, loaded once per process.
    pub fn load_default() -> Result<&'static RecordStore> {
        DEFAULT_STORE.get_or_try_init(|| {
            let path = Self::default_data_dir().join(Self::default_dataset_filename());
            Self::load_from_path(path)
        })
    }

    /// Load a dataset, picking the parser from the file name:
    /// `*.bin[.gz]` is a bincode cache, anything else source JSON.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = open_stream(path)?;

        let store = match detect_format(path) {
            SourceFormat::Binary => {
                let mut data = Vec::new();
                reader.read_to_end(&mut data)?;
                Self::from_bytes(&data)?
            }
            SourceFormat::Json => Self::from_json_reader(reader)?,
        };
        debug!(path = %path.display(), records = store.len(), "dataset loaded");
        Ok(store)
    }

    /// Parse source JSON rows (an array of raw records).
    #[cfg(feature = "json")]
    pub fn from_json_reader(reader: impl Read) -> Result<Self> {
        let raw: crate::model::raw::RecordsRaw = serde_json::from_reader(reader)?;
        Self::new(crate::model::convert::from_raw(raw))
    }

    #[cfg(not(feature = "json"))]
    pub fn from_json_reader(_reader: impl Read) -> Result<Self> {
        Err(FindError::InvalidOption(
            "JSON datasets need the `json` feature".into(),
        ))
    }

    /// Decode a bincode cache. Codes are re-validated.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let records: Vec<Record> = bincode::DefaultOptions::new()
            .with_limit(BINARY_LIMIT)
            .allow_trailing_bytes()
            .deserialize(data)?;
        Self::new(records)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::DefaultOptions::new()
            .with_limit(BINARY_LIMIT)
            .serialize(&self.records)?)
    }

    /// Write a bincode cache next to wherever `path` points.
    pub fn write_cache(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path.as_ref(), self.to_bytes()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Record> {
        vec![
            Record::new("CHGVA", "Geneva", "Switzerland", "CH").with_coordinates(46.2, 6.14),
            Record::new("CHZRH", "Zurich", "Switzerland", "CH").with_obsolete(true),
            Record::new("DEHAM", "Hamburg", "Germany", "DE"),
        ]
    }

    #[test]
    fn rejects_duplicate_codes() {
        let mut recs = sample();
        recs.push(Record::new("DEHAM", "Hamburg Port", "Germany", "DE"));
        match RecordStore::new(recs) {
            Err(FindError::DuplicateCode(code)) => assert_eq!(code, "DEHAM"),
            other => panic!("expected duplicate error, got {other:?}"),
        }
    }

    #[test]
    fn stats_count_what_they_say() {
        let stats = RecordStore::new(sample()).unwrap().stats();
        assert_eq!(stats.records, 3);
        assert_eq!(stats.countries, 2);
        assert_eq!(stats.obsolete, 1);
        assert_eq!(stats.with_coordinates, 1);
    }

    #[test]
    fn binary_cache_round_trip() {
        let store = RecordStore::new(sample()).unwrap();
        let back = RecordStore::from_bytes(&store.to_bytes().unwrap()).unwrap();
        assert_eq!(store, back);
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = RecordStore::load_from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, FindError::NotFound(_)));
    }

    #[cfg(feature = "json")]
    #[test]
    fn bundled_dataset_loads() {
        let store = RecordStore::load_default().unwrap();
        assert!(!store.is_empty());
        assert!(store.find_by_code("chgva").is_some());
    }
}
