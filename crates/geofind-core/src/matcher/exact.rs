// crates/geofind-core/src/matcher/exact.rs
use crate::model::{MatchSpan, Record, SearchField, SearchResult};
use crate::text::equals_folded;
use crate::traits::Matcher;

/// Whole-field, case-insensitive equality. Every hit scores `0`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExactMatcher;

impl Matcher for ExactMatcher {
    fn name(&self) -> &'static str {
        "exact"
    }

    fn find<'a>(
        &self,
        candidates: &[&'a Record],
        query: &str,
        fields: &[SearchField],
    ) -> Vec<SearchResult<'a>> {
        let q = query.trim();
        if q.is_empty() {
            return Vec::new();
        }

        let mut out = Vec::new();
        for &record in candidates {
            let spans: Vec<MatchSpan> = fields
                .iter()
                .filter_map(|&f| {
                    let value = record.field(f)?;
                    equals_folded(value, q).then(|| MatchSpan::whole(f, value))
                })
                .collect();

            if !spans.is_empty() {
                out.push(SearchResult::scored(record, 0.0, spans));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_result_per_record_with_all_matching_fields() {
        let records = vec![Record::new("LU", "Luxembourg", "Luxembourg", "LU")];
        let candidates: Vec<&Record> = records.iter().collect();

        let hits = ExactMatcher.find(
            &candidates,
            "  LUXEMBOURG ",
            &[SearchField::Name, SearchField::Country],
        );
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].matches.len(), 2);
        assert_eq!(hits[0].matches[0].start, 0);
        assert_eq!(hits[0].matches[0].end, 9);
    }

    #[test]
    fn partial_values_do_not_match() {
        let records = vec![Record::new("FRPAR", "Paris", "France", "FR")];
        let candidates: Vec<&Record> = records.iter().collect();
        assert!(ExactMatcher
            .find(&candidates, "Par", &[SearchField::Name])
            .is_empty());
        assert!(ExactMatcher
            .find(&candidates, "   ", &[SearchField::Name])
            .is_empty());
    }
}
