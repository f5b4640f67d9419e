//! geofind-rs
//! ==========
//!
//! Facade over [`geofind_core`]. Most users want the prelude:
//!
//! ```rust
//! use geofind_rs::prelude::*;
//!
//! let records = vec![Record::new("CHGVA", "Geneva", "Switzerland", "CH")];
//! let hits = SearchEngine::default().search(&records, &SearchFilters::new("gen"));
//! assert_eq!(hits.len(), 1);
//! ```

pub use geofind_core::*;

pub mod prelude {
    pub use geofind_core::{
        phonetic_code, sounds_like, suggest, CountryFilter, EngineConfig, FindError,
        MatchSpan, MultiSearchOptions, Record, RecordStore, Result, SearchEngine, SearchField,
        SearchFilters, SearchResult, Strategy,
    };
}
