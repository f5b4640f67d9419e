// crates/geofind-core/src/model/record.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// A searchable facility entry.
///
/// Records are immutable snapshots handed to the engine by the caller.
/// `code` is the primary key and must be unique within one dataset; use
/// [`RecordStore::new`](crate::loader::RecordStore::new) to have that
/// checked for you.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub alt_name: Option<String>,
    pub country: String,
    pub country_code: String,
    /// `0.0, 0.0` is the "no coordinates" sentinel.
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default)]
    pub obsolete: bool,
}

impl Record {
    /// Create a record with the mandatory fields; everything else defaults.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        country: impl Into<String>,
        country_code: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            alt_name: None,
            country: country.into(),
            country_code: country_code.into(),
            latitude: 0.0,
            longitude: 0.0,
            obsolete: false,
        }
    }

    pub fn with_alt_name(mut self, alt_name: impl Into<String>) -> Self {
        self.alt_name = Some(alt_name.into());
        self
    }

    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    pub fn with_obsolete(mut self, obsolete: bool) -> Self {
        self.obsolete = obsolete;
        self
    }

    /// `false` for the `0,0` sentinel.
    pub fn has_coordinates(&self) -> bool {
        !(self.latitude == 0.0 && self.longitude == 0.0)
    }

    /// Read a field through the closed allow-list.
    ///
    /// Empty strings are reported as `None` so that matchers treat them as
    /// non-matching rather than as an empty-string hit.
    #[inline]
    pub fn field(&self, field: SearchField) -> Option<&str> {
        field.read(self)
    }
}

/// The closed set of record fields a query may target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    Code,
    Name,
    AltName,
    Country,
    CountryCode,
}

/// Fields searched when the caller gives none (or none survive validation).
pub const DEFAULT_FIELDS: [SearchField; 3] =
    [SearchField::Name, SearchField::AltName, SearchField::Country];

impl SearchField {
    pub const ALL: [SearchField; 5] = [
        SearchField::Code,
        SearchField::Name,
        SearchField::AltName,
        SearchField::Country,
        SearchField::CountryCode,
    ];

    /// Canonical snake_case name.
    pub fn as_str(self) -> &'static str {
        match self {
            SearchField::Code => "code",
            SearchField::Name => "name",
            SearchField::AltName => "alt_name",
            SearchField::Country => "country",
            SearchField::CountryCode => "country_code",
        }
    }

    /// Parse a field name, accepting snake_case and camelCase, any case.
    ///
    /// Returns `None` for anything outside the allow-list.
    pub fn from_name(name: &str) -> Option<Self> {
        let key: String = name
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "code" => Some(SearchField::Code),
            "name" => Some(SearchField::Name),
            "altname" => Some(SearchField::AltName),
            "country" => Some(SearchField::Country),
            "countrycode" => Some(SearchField::CountryCode),
            _ => None,
        }
    }

    /// Resolve a caller-supplied list of names against the allow-list.
    ///
    /// Unknown names are dropped silently, duplicates collapse to their first
    /// position, and an empty outcome falls back to [`DEFAULT_FIELDS`].
    pub fn parse_list<S: AsRef<str>>(names: &[S]) -> Vec<SearchField> {
        let parsed: Vec<SearchField> = names
            .iter()
            .filter_map(|n| SearchField::from_name(n.as_ref()))
            .collect();
        Self::effective(&parsed)
    }

    /// Deduplicate `fields` keeping order; empty means the default set.
    pub fn effective(fields: &[SearchField]) -> Vec<SearchField> {
        let mut out: Vec<SearchField> = Vec::with_capacity(fields.len());
        for f in fields {
            if !out.contains(f) {
                out.push(*f);
            }
        }
        if out.is_empty() {
            out.extend_from_slice(&DEFAULT_FIELDS);
        }
        out
    }

    fn read(self, record: &Record) -> Option<&str> {
        let value = match self {
            SearchField::Code => record.code.as_str(),
            SearchField::Name => record.name.as_str(),
            SearchField::AltName => record.alt_name.as_deref()?,
            SearchField::Country => record.country.as_str(),
            SearchField::CountryCode => record.country_code.as_str(),
        };
        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
