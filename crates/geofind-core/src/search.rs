// crates/geofind-core/src/search.rs

//! # Search Orchestrator
//!
//! [`SearchEngine`] is the single entry point for callers:
//! - [`search`](SearchEngine::search): pre-filter, then one strategy.
//! - [`multi_search`](SearchEngine::multi_search): exact + substring + fuzzy
//!   over the unfiltered records, merged by record code.
//! - [`suggest`](SearchEngine::suggest): autocomplete vocabulary.
//!
//! The engine is `Send + Sync`. Its only mutable state is the fuzzy index
//! cache, which serializes its own rebuilds. `search` indexes the
//! pre-filtered candidates while `multi_search` indexes every record; the
//! cache holds both versions at once, so mixing the two calls over the same
//! dataset builds each index only once.

use crate::config::{validate_threshold, EngineConfig};
use crate::error::Result;
use crate::matcher::{ExactMatcher, FuzzyMatcher, PhoneticMatcher, SubstringMatcher};
use crate::model::query::sort_by_score;
use crate::model::{MultiSearchOptions, Record, SearchField, SearchFilters, SearchResult, Strategy};
use crate::traits::Matcher;
use std::collections::HashMap;
use tracing::{debug, instrument, trace};

/// Multi-strategy search engine over caller-supplied record snapshots.
///
/// # Example
///
/// ```rust
/// use geofind_core::{Record, SearchEngine, SearchFilters, Strategy};
///
/// let records = vec![
///     Record::new("CHGVA", "Geneva", "Switzerland", "CH"),
///     Record::new("ITGOA", "Genoa", "Italy", "IT"),
/// ];
/// let engine = SearchEngine::default();
///
/// let hits = engine.search(&records, &SearchFilters::new("genva").strategy(Strategy::Fuzzy));
/// assert_eq!(hits[0].record.code, "CHGVA");
/// ```
#[derive(Debug, Default)]
pub struct SearchEngine {
    config: EngineConfig,
    fuzzy: FuzzyMatcher,
}

impl SearchEngine {
    /// Build an engine from a validated config.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            fuzzy: FuzzyMatcher::new(config.fuzzy),
            config,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The fuzzy matcher, e.g. to inspect its index cache.
    pub fn fuzzy(&self) -> &FuzzyMatcher {
        &self.fuzzy
    }

    /// Run one strategy over the pre-filtered records.
    ///
    /// A blank query browses: every record that passes the country and
    /// obsolete filters comes back unscored, in input order.
    #[instrument(skip_all, fields(strategy = %filters.strategy))]
    pub fn search<'a>(&self, records: &'a [Record], filters: &SearchFilters) -> Vec<SearchResult<'a>> {
        let candidates: Vec<&'a Record> = records.iter().filter(|r| filters.admits(r)).collect();
        trace!(total = records.len(), admitted = candidates.len(), "pre-filter");

        if filters.query.trim().is_empty() {
            return candidates.into_iter().map(SearchResult::browse).collect();
        }

        let fields = SearchField::effective(&filters.fields);
        let matcher = self.matcher(filters.strategy);
        let results = matcher.find(&candidates, &filters.query, &fields);
        debug!(matcher = matcher.name(), hits = results.len(), "search done");
        results
    }

    /// Exact, substring and fuzzy over all records, one result per code.
    ///
    /// For every code the lowest score wins; on equal scores the earlier
    /// strategy (exact, then substring, then fuzzy) is kept. The merged list
    /// is sorted ascending and cut to `max_results`.
    ///
    /// Fails only when `options.threshold` lies outside `[0, 1]`.
    #[instrument(skip_all)]
    pub fn multi_search<'a>(
        &self,
        records: &'a [Record],
        query: &str,
        options: &MultiSearchOptions,
    ) -> Result<Vec<SearchResult<'a>>> {
        let threshold = options.threshold.unwrap_or(self.config.fuzzy.threshold);
        validate_threshold(threshold)?;
        let max_results = options.max_results.unwrap_or(self.config.max_results);

        let candidates: Vec<&'a Record> = records.iter().collect();
        let fields = SearchField::effective(&options.fields);

        let runs = [
            ExactMatcher.find(&candidates, query, &fields),
            SubstringMatcher.find(&candidates, query, &fields),
            self.fuzzy.find_within(&candidates, query, &fields, threshold),
        ];

        let mut merged = merge_best(runs);
        sort_by_score(&mut merged);
        merged.truncate(max_results);
        debug!(hits = merged.len(), max_results, "multi search done");
        Ok(merged)
    }

    /// [`suggest`](crate::suggest::suggest) with the configured maximum.
    pub fn suggest(&self, records: &[Record], query: &str) -> Vec<String> {
        crate::suggest::suggest(records, query, self.config.max_suggestions)
    }

    fn matcher(&self, strategy: Strategy) -> &dyn Matcher {
        match strategy {
            Strategy::Exact => &ExactMatcher,
            Strategy::Substring => &SubstringMatcher,
            Strategy::Fuzzy => &self.fuzzy,
            Strategy::Phonetic => &PhoneticMatcher,
        }
    }
}

/// Keep the best-scored result per record code, first-seen on ties.
fn merge_best<'a, I>(runs: I) -> Vec<SearchResult<'a>>
where
    I: IntoIterator<Item = Vec<SearchResult<'a>>>,
{
    let mut merged: Vec<SearchResult<'a>> = Vec::new();
    let mut by_code: HashMap<&'a str, usize> = HashMap::new();

    for result in runs.into_iter().flatten() {
        match by_code.get(result.code()) {
            Some(&slot) => {
                if result.rank() < merged[slot].rank() {
                    merged[slot] = result;
                }
            }
            None => {
                by_code.insert(result.code(), merged.len());
                merged.push(result);
            }
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MatchSpan;

    #[test]
    fn merge_keeps_lowest_score_and_first_on_ties() {
        let a = Record::new("A", "Alpha", "X", "XX");
        let b = Record::new("B", "Beta", "X", "XX");
        let span = |v: &str| vec![MatchSpan::whole(SearchField::Name, v)];

        let merged = merge_best([
            vec![SearchResult::scored(&a, 0.2, span("first"))],
            vec![
                SearchResult::scored(&a, 0.2, span("second")),
                SearchResult::scored(&b, 0.4, Vec::new()),
            ],
            vec![SearchResult::scored(&b, 0.1, Vec::new())],
        ]);

        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].matches[0].value, "first");
        assert_eq!(merged[1].score, Some(0.1));
    }
}
