// crates/geofind-core/src/suggest.rs

//! Autocomplete vocabulary.
//!
//! Suggestions are distinct field values, not records, and ignore every
//! search filter: they surface what can be typed, not what will be found.

use crate::model::{Record, SearchField};
use crate::text::{find_chars, fold_chars, fold_key};
use std::collections::HashSet;

/// Queries shorter than this (in chars, after trimming) yield nothing.
pub const MIN_QUERY_LEN: usize = 2;

const SUGGESTION_FIELDS: [SearchField; 3] =
    [SearchField::Name, SearchField::AltName, SearchField::Country];

/// Up to `max` distinct values of name, alt name and country containing
/// `query`, prefix matches first, then alphabetical.
///
/// ```rust
/// use geofind_core::{suggest, Record};
///
/// let records = vec![
///     Record::new("CHGVA", "Geneva", "Switzerland", "CH"),
///     Record::new("ITGOA", "Genoa", "Italy", "IT"),
///     Record::new("FRPAR", "Paris", "France", "FR"),
/// ];
/// assert_eq!(suggest(&records, "gen", 10), vec!["Geneva", "Genoa"]);
/// ```
pub fn suggest(records: &[Record], query: &str, max: usize) -> Vec<String> {
    let q = fold_chars(query.trim());
    if q.len() < MIN_QUERY_LEN || records.is_empty() || max == 0 {
        return Vec::new();
    }

    let mut seen: HashSet<&str> = HashSet::new();
    let mut ranked: Vec<(bool, String, &str)> = Vec::new();

    for record in records {
        for field in SUGGESTION_FIELDS {
            let Some(value) = record.field(field) else {
                continue;
            };
            if seen.contains(value) {
                continue;
            }
            let Some(pos) = find_chars(&fold_chars(value), &q) else {
                continue;
            };
            seen.insert(value);
            ranked.push((pos != 0, fold_key(value), value));
        }
    }

    ranked.sort();
    ranked
        .into_iter()
        .take(max)
        .map(|(_, _, value)| value.to_string())
        .collect()
}
