// crates/geofind-core/src/model/raw.rs
use serde::Deserialize;

/// Raw record row as it comes from a JSON dataset.
///
/// Source files in the wild disagree on types: coordinates arrive as numbers
/// or strings (sometimes with a comma decimal separator) and the obsolete
/// flag as a bool or a marker string. This type absorbs that variety; it is
/// converted to [`Record`](super::Record) by [`from_raw`](super::convert::from_raw).
#[derive(Debug, Deserialize)]
pub struct RecordRaw {
    pub code: String,
    pub name: String,
    #[serde(default, alias = "altName", alias = "alternate_name")]
    pub alt_name: Option<String>,
    #[serde(default)]
    pub country: String,
    #[serde(default, alias = "countryCode")]
    pub country_code: String,
    #[serde(default, alias = "lat")]
    pub latitude: Option<NumberOrText>,
    #[serde(default, alias = "lng", alias = "lon")]
    pub longitude: Option<NumberOrText>,
    #[serde(default)]
    pub obsolete: Option<FlagOrText>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum NumberOrText {
    Number(f64),
    Text(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum FlagOrText {
    Flag(bool),
    Number(i64),
    Text(String),
}

pub type RecordsRaw = Vec<RecordRaw>;
