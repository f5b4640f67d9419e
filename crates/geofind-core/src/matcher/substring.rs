// crates/geofind-core/src/matcher/substring.rs
use crate::model::query::sort_by_score;
use crate::model::{MatchSpan, Record, SearchField, SearchResult};
use crate::text::{find_chars, fold_chars};
use crate::traits::Matcher;

/// Case-insensitive "contains" matching.
///
/// A field scores `start / len`: an early hit in a short field ranks ahead
/// of a late hit in a long one. The record keeps its best field score.
#[derive(Clone, Copy, Debug, Default)]
pub struct SubstringMatcher;

impl Matcher for SubstringMatcher {
    fn name(&self) -> &'static str {
        "substring"
    }

    fn find<'a>(
        &self,
        candidates: &[&'a Record],
        query: &str,
        fields: &[SearchField],
    ) -> Vec<SearchResult<'a>> {
        let q = fold_chars(query.trim());
        if q.is_empty() {
            return Vec::new();
        }

        let mut out = Vec::new();
        for &record in candidates {
            let mut best = f64::INFINITY;
            let mut spans = Vec::new();

            for &field in fields {
                let Some(value) = record.field(field) else {
                    continue;
                };
                let hay = fold_chars(value);
                if let Some(start) = find_chars(&hay, &q) {
                    best = best.min(start as f64 / hay.len() as f64);
                    spans.push(MatchSpan::new(field, value, start, start + q.len() - 1));
                }
            }

            if !spans.is_empty() {
                out.push(SearchResult::scored(record, best, spans));
            }
        }

        sort_by_score(&mut out);
        out
    }
}
