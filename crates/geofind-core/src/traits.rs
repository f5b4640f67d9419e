// crates/geofind-core/src/traits.rs
use crate::model::{Record, SearchField, SearchResult};

/// A matching strategy over a candidate set.
///
/// Implementors own their ranking: the orchestrator returns their output
/// unmodified. Candidates are borrowed from the caller's snapshot, which is
/// why results carry the same lifetime.
///
/// # Examples
/// ```rust
/// use geofind_core::matcher::ExactMatcher;
/// use geofind_core::traits::Matcher;
/// use geofind_core::{Record, SearchField};
///
/// let records = vec![Record::new("CHGVA", "Geneva", "Switzerland", "CH")];
/// let candidates: Vec<&Record> = records.iter().collect();
///
/// let hits = ExactMatcher.find(&candidates, "geneva", &[SearchField::Name]);
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].score, Some(0.0));
/// ```
pub trait Matcher {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Find matching records among `candidates`.
    ///
    /// `query` is raw user input; implementations trim it and return an
    /// empty list for a blank query. `fields` is already resolved against
    /// the allow-list.
    fn find<'a>(
        &self,
        candidates: &[&'a Record],
        query: &str,
        fields: &[SearchField],
    ) -> Vec<SearchResult<'a>>;
}
