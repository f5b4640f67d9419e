// crates/geofind-core/src/model/mod.rs
pub mod convert;
pub mod query;
pub mod raw;
pub mod record;

pub use query::{
    CountryFilter, MatchSpan, MultiSearchOptions, SearchFilters, SearchResult, Strategy,
};
pub use record::{Record, SearchField, DEFAULT_FIELDS};
