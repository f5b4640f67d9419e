// crates/geofind-core/src/model/query.rs
use super::record::{Record, SearchField};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Matching algorithm selected by the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Exact,
    #[default]
    Substring,
    Fuzzy,
    Phonetic,
}

impl Strategy {
    /// Parse a strategy name. Unrecognised names fall back to
    /// [`Strategy::Substring`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "exact" => Strategy::Exact,
            "fuzzy" | "approximate" => Strategy::Fuzzy,
            "phonetic" | "soundex" | "soundslike" => Strategy::Phonetic,
            _ => Strategy::Substring,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Exact => "exact",
            Strategy::Substring => "substring",
            Strategy::Fuzzy => "fuzzy",
            Strategy::Phonetic => "phonetic",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Country restriction applied before any matching.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CountryFilter {
    #[default]
    All,
    /// Matches either `country_code` or `country`, case-insensitively.
    Only(String),
}

impl CountryFilter {
    /// `None`, an empty string and the literal `"all"` mean no filter.
    pub fn from_option(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") => CountryFilter::All,
            Some(v) if v.eq_ignore_ascii_case("all") => CountryFilter::All,
            Some(v) => CountryFilter::Only(v.to_string()),
        }
    }

    pub fn accepts(&self, record: &Record) -> bool {
        match self {
            CountryFilter::All => true,
            CountryFilter::Only(value) => {
                record.country_code.eq_ignore_ascii_case(value)
                    || record.country.to_lowercase() == value.to_lowercase()
            }
        }
    }
}

/// Parameters of a single [`search`](crate::search::SearchEngine::search) call.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchFilters {
    pub query: String,
    pub strategy: Strategy,
    /// Empty means the default field set.
    pub fields: Vec<SearchField>,
    pub country: CountryFilter,
    pub include_obsolete: bool,
}

impl SearchFilters {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn fields(mut self, fields: &[SearchField]) -> Self {
        self.fields = fields.to_vec();
        self
    }

    pub fn country(mut self, country: CountryFilter) -> Self {
        self.country = country;
        self
    }

    pub fn include_obsolete(mut self, include: bool) -> Self {
        self.include_obsolete = include;
        self
    }

    /// Pre-filter check shared by every strategy.
    pub fn admits(&self, record: &Record) -> bool {
        (self.include_obsolete || !record.obsolete) && self.country.accepts(record)
    }
}

/// Options for [`multi_search`](crate::search::SearchEngine::multi_search).
///
/// Unset values fall back to the engine's [`EngineConfig`](crate::config::EngineConfig).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiSearchOptions {
    pub threshold: Option<f64>,
    pub max_results: Option<usize>,
    pub fields: Vec<SearchField>,
}

/// Where in a field a match was found.
///
/// `start` and `end` are inclusive character indices into `value`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSpan {
    pub field: SearchField,
    pub value: String,
    pub start: usize,
    pub end: usize,
}

impl MatchSpan {
    pub fn new(field: SearchField, value: &str, start: usize, end: usize) -> Self {
        Self {
            field,
            value: value.to_string(),
            start,
            end,
        }
    }

    /// Span over the whole value. Callers guarantee `value` is non-empty.
    pub fn whole(field: SearchField, value: &str) -> Self {
        let len = value.chars().count();
        Self::new(field, value, 0, len.saturating_sub(1))
    }

    /// The matched characters.
    pub fn matched(&self) -> String {
        self.value
            .chars()
            .skip(self.start)
            .take(self.end + 1 - self.start)
            .collect()
    }
}

/// One ranked hit.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SearchResult<'a> {
    pub record: &'a Record,
    /// Lower is better, `0.0` is perfect. `None` for browse results.
    pub score: Option<f64>,
    pub matches: Vec<MatchSpan>,
}

impl<'a> SearchResult<'a> {
    pub fn scored(record: &'a Record, score: f64, matches: Vec<MatchSpan>) -> Self {
        Self {
            record,
            score: Some(score),
            matches,
        }
    }

    /// Unranked result used when the query is blank.
    pub fn browse(record: &'a Record) -> Self {
        Self {
            record,
            score: None,
            matches: Vec::new(),
        }
    }

    pub fn code(&self) -> &'a str {
        self.record.code.as_str()
    }

    /// Score used for ordering; browse results sort last.
    #[inline]
    pub(crate) fn rank(&self) -> f64 {
        self.score.unwrap_or(f64::INFINITY)
    }
}

/// Stable ascending sort by score.
pub(crate) fn sort_by_score(results: &mut [SearchResult<'_>]) {
    results.sort_by(|a, b| a.rank().total_cmp(&b.rank()));
}
