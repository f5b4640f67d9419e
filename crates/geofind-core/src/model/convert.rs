// crates/geofind-core/src/model/convert.rs
use super::raw::{FlagOrText, NumberOrText, RecordRaw};
use super::record::Record;

/// **Standard Converter:** Raw rows -> Records.
///
/// Never fails: unparsable coordinates become the `0,0` sentinel and an
/// unrecognised obsolete marker reads as `false`. Uniqueness of codes is
/// checked later by the store.
pub fn from_raw(raw: Vec<RecordRaw>) -> Vec<Record> {
    raw.into_iter()
        .map(|r| Record {
            code: r.code.trim().to_string(),
            name: r.name.trim().to_string(),
            alt_name: r
                .alt_name
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            country: r.country.trim().to_string(),
            country_code: r.country_code.trim().to_string(),
            latitude: parse_coordinate(r.latitude.as_ref()),
            longitude: parse_coordinate(r.longitude.as_ref()),
            obsolete: parse_flag(r.obsolete.as_ref()),
        })
        .collect()
}

/// Parses a coordinate value; accepts `,` as decimal separator.
fn parse_coordinate(v: Option<&NumberOrText>) -> f64 {
    match v {
        Some(NumberOrText::Number(n)) if n.is_finite() => *n,
        Some(NumberOrText::Text(s)) => s
            .trim()
            .replace(',', ".")
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .unwrap_or(0.0),
        _ => 0.0,
    }
}

fn parse_flag(v: Option<&FlagOrText>) -> bool {
    match v {
        Some(FlagOrText::Flag(b)) => *b,
        Some(FlagOrText::Number(n)) => *n != 0,
        Some(FlagOrText::Text(s)) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "y" | "yes" | "true" | "1" | "x"
        ),
        None => false,
    }
}
