// crates/geofind-core/src/matcher/fuzzy/mod.rs

//! Weighted multi-field approximate matching.
//!
//! Each indexed field is scored by aligning the query against its best
//! matching substring:
//!
//! ```text
//! field = 0.9 * (distance / query_len) + 0.1 * (1 - aligned_len / field_len)
//! ```
//!
//! or `1.0` once the distance reaches the query length. The first term
//! tolerates typos, the second prefers matches that cover more of the
//! field. A field's weight `w` inflates imperfect scores to
//! `min(1, field * (2 - w))`; a record keeps its best weighted field.
//! Scores live in `[0, 1]` and `0` is a perfect match.

pub mod align;
pub mod index;

use self::align::{best_alignment, Alignment};
use self::index::{IndexCache, IndexEntry};
use crate::config::FuzzyOptions;
use crate::model::query::sort_by_score;
use crate::model::{MatchSpan, Record, SearchField, SearchResult};
use crate::text::fold_chars;
use crate::traits::Matcher;
use tracing::trace;

const DISTANCE_SHARE: f64 = 0.9;
const COVERAGE_SHARE: f64 = 0.1;

/// Approximate matcher owning its [`IndexCache`].
#[derive(Debug, Default)]
pub struct FuzzyMatcher {
    options: FuzzyOptions,
    cache: IndexCache,
}

struct FieldHit<'i> {
    field: SearchField,
    value: &'i str,
    score: f64,
    alignment: Alignment,
}

impl FuzzyMatcher {
    pub fn new(options: FuzzyOptions) -> Self {
        Self {
            options,
            cache: IndexCache::new(),
        }
    }

    pub fn options(&self) -> &FuzzyOptions {
        &self.options
    }

    pub fn cache(&self) -> &IndexCache {
        &self.cache
    }

    /// Like [`Matcher::find`] with an explicit threshold.
    pub fn find_within<'a>(
        &self,
        candidates: &[&'a Record],
        query: &str,
        fields: &[SearchField],
        threshold: f64,
    ) -> Vec<SearchResult<'a>> {
        let pattern = fold_chars(query.trim());
        if pattern.is_empty() || candidates.is_empty() {
            return Vec::new();
        }

        let index = self.cache.get_or_rebuild(candidates, &self.options.weights);

        let mut ranked: Vec<(usize, f64, Vec<FieldHit<'_>>)> = index
            .entries()
            .iter()
            .enumerate()
            .filter_map(|(pos, entry)| {
                let hits = score_entry(entry, &pattern, fields);
                let best = hits.iter().map(|h| h.score).reduce(f64::min)?;
                Some((pos, best, hits))
            })
            .collect();

        ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
        ranked.truncate(self.options.max_candidates);

        let mut out: Vec<SearchResult<'a>> = ranked
            .into_iter()
            .filter(|(_, score, _)| *score <= threshold)
            .map(|(pos, score, hits)| {
                let spans = hits
                    .into_iter()
                    .filter(|h| h.score <= threshold && !h.alignment.is_empty())
                    .map(|h| {
                        MatchSpan::new(
                            h.field,
                            h.value,
                            h.alignment.start,
                            h.alignment.end - 1,
                        )
                    })
                    .collect();
                SearchResult::scored(candidates[pos], score, spans)
            })
            .collect();

        sort_by_score(&mut out);
        trace!(hits = out.len(), threshold, "fuzzy search done");
        out
    }
}

impl Matcher for FuzzyMatcher {
    fn name(&self) -> &'static str {
        "fuzzy"
    }

    fn find<'a>(
        &self,
        candidates: &[&'a Record],
        query: &str,
        fields: &[SearchField],
    ) -> Vec<SearchResult<'a>> {
        self.find_within(candidates, query, fields, self.options.threshold)
    }
}

fn score_entry<'i>(entry: &'i IndexEntry, pattern: &[char], fields: &[SearchField]) -> Vec<FieldHit<'i>> {
    fields
        .iter()
        .filter_map(|&f| entry.get(f))
        .map(|indexed| {
            let (raw, alignment) = field_score(pattern, &indexed.folded);
            FieldHit {
                field: indexed.field,
                value: indexed.value.as_str(),
                score: (raw * (2.0 - indexed.weight)).min(1.0),
                alignment,
            }
        })
        .collect()
}

/// Unweighted score of `pattern` against one folded field value.
pub fn field_score(pattern: &[char], text: &[char]) -> (f64, Alignment) {
    let alignment = best_alignment(pattern, text);
    if text.is_empty() || alignment.distance >= pattern.len() {
        return (1.0, alignment);
    }
    let typo = alignment.distance as f64 / pattern.len() as f64;
    let uncovered = 1.0 - alignment.len() as f64 / text.len() as f64;
    let score = DISTANCE_SHARE * typo + COVERAGE_SHARE * uncovered;
    (score.clamp(0.0, 1.0), alignment)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<Record> {
        vec![
            Record::new("CHGVA", "Geneva", "Switzerland", "CH").with_alt_name("Genève"),
            Record::new("ITGOA", "Genoa", "Italy", "IT").with_alt_name("Genova"),
            Record::new("NLRTM", "Rotterdam", "Netherlands", "NL"),
        ]
    }

    const FIELDS: [SearchField; 3] = [SearchField::Name, SearchField::AltName, SearchField::Country];

    #[test]
    fn perfect_match_scores_zero() {
        let (score, _) = field_score(&fold_chars("geneva"), &fold_chars("Geneva"));
        assert_eq!(score, 0.0);
    }

    #[test]
    fn tolerates_a_typo() {
        let recs = records();
        let candidates: Vec<&Record> = recs.iter().collect();
        let hits = FuzzyMatcher::default().find(&candidates, "Genva", &FIELDS);

        assert_eq!(hits[0].code(), "CHGVA");
        assert!(hits.iter().all(|h| h.score.unwrap() <= 0.3));
        assert!(hits.iter().all(|h| h.code() != "NLRTM"));
    }

    #[test]
    fn lower_weight_fields_score_worse() {
        let recs = vec![
            Record::new("AAA", "Somewhere", "Rotterdam", "NL"),
            Record::new("BBB", "Rotterdam", "Netherlands", "NL"),
        ];
        let candidates: Vec<&Record> = recs.iter().collect();
        let hits = FuzzyMatcher::default().find(&candidates, "rotterdan", &FIELDS);
        assert_eq!(hits[0].code(), "BBB");
        assert!(hits.len() == 1 || hits[0].score < hits[1].score);
    }

    #[test]
    fn spans_stay_inside_fields() {
        let recs = records();
        let candidates: Vec<&Record> = recs.iter().collect();
        for q in ["gen", "rotterdamm", "switz", "italu"] {
            for hit in FuzzyMatcher::default().find(&candidates, q, &FIELDS) {
                for span in &hit.matches {
                    assert!(span.start <= span.end);
                    assert!(span.end < span.value.chars().count());
                }
            }
        }
    }

    #[test]
    fn results_are_capped_at_max_candidates() {
        let recs: Vec<Record> = (0..150)
            .map(|i| Record::new(format!("G{i:03}"), format!("Geneva {i}"), "Switzerland", "CH"))
            .collect();
        let candidates: Vec<&Record> = recs.iter().collect();
        let matcher = FuzzyMatcher::default();

        let hits = matcher.find(&candidates, "geneva", &FIELDS);
        assert_eq!(hits.len(), matcher.options().max_candidates);
        assert_eq!(hits.len(), 100);
    }

    #[test]
    fn cap_applies_before_the_threshold() {
        let recs = vec![
            Record::new("G12", "Geneva 12", "Switzerland", "CH"),
            Record::new("G0", "Geneva", "Switzerland", "CH"),
            Record::new("G1", "Geneva 1", "Switzerland", "CH"),
        ];
        let candidates: Vec<&Record> = recs.iter().collect();
        let fields = [SearchField::Name];

        let uncapped = FuzzyMatcher::default().find(&candidates, "geneva", &fields);
        assert_eq!(uncapped.len(), 3);

        let capped = FuzzyMatcher::new(FuzzyOptions {
            max_candidates: 2,
            ..FuzzyOptions::default()
        })
        .find(&candidates, "geneva", &fields);
        let codes: Vec<&str> = capped.iter().map(|h| h.code()).collect();
        assert_eq!(codes, vec!["G0", "G1"]);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let recs = records();
        let candidates: Vec<&Record> = recs.iter().collect();
        let matcher = FuzzyMatcher::default();
        let first = matcher.find(&candidates, "genoa", &FIELDS);
        let second = matcher.find(&candidates, "genoa", &FIELDS);
        assert_eq!(first, second);
        assert_eq!(matcher.cache().rebuild_count(), 1);
    }
}
