// crates/geofind-core/src/lib.rs

//! # geofind-core
//!
//! Multi-strategy search over geographic facility records.
//!
//! Callers hand the engine an in-memory `&[Record]` snapshot plus
//! [`SearchFilters`] and get back ranked, explainable [`SearchResult`]s:
//! which fields matched, at which character offsets, with what score
//! (lower is better, `0` is perfect).
//!
//! Strategies: exact, substring, fuzzy (typo tolerant, weighted over
//! fields) and phonetic (Soundex-style). [`SearchEngine::multi_search`]
//! merges exact, substring and fuzzy into one deduplicated ranking, and
//! [`suggest`] produces autocomplete vocabulary.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod config;
pub mod error;
pub mod loader;
pub mod matcher;
pub mod model;
pub mod search;
pub mod suggest;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::StoreStats;
pub use crate::config::{EngineConfig, FieldWeights, FuzzyOptions};
pub use crate::error::{FindError, Result};
pub use crate::loader::RecordStore;
pub use crate::matcher::{phonetic_code, sounds_like};
pub use crate::model::{
    CountryFilter, MatchSpan, MultiSearchOptions, Record, SearchField, SearchFilters,
    SearchResult, Strategy, DEFAULT_FIELDS,
};
pub use crate::search::SearchEngine;
pub use crate::suggest::suggest;
