mod common;

use geofind_core::{
    sounds_like, suggest, CountryFilter, MultiSearchOptions, Record, SearchEngine, SearchField,
    SearchFilters, Strategy,
};
use std::collections::HashSet;

const STRATEGIES: [Strategy; 4] = [
    Strategy::Exact,
    Strategy::Substring,
    Strategy::Fuzzy,
    Strategy::Phonetic,
];

#[test]
fn exact_query_returns_originating_record_with_zero_score() {
    let records = common::records();
    let engine = SearchEngine::default();

    for record in records.iter().filter(|r| !r.obsolete) {
        let hits = engine.search(
            &records,
            &SearchFilters::new(record.name.clone()).strategy(Strategy::Exact),
        );
        let hit = hits
            .iter()
            .find(|h| h.record.code == record.code)
            .expect("originating record present");
        assert_eq!(hit.score, Some(0.0));
    }
}

#[test]
fn substring_results_contain_the_query() {
    let records = common::records();
    let engine = SearchEngine::default();

    for q in ["lon", "ON", "a", "gen", "kingdom", "zzz"] {
        let filters = SearchFilters::new(q).include_obsolete(true);
        for hit in engine.search(&records, &filters) {
            assert!(hit
                .matches
                .iter()
                .any(|m| m.value.to_lowercase().contains(&q.to_lowercase())));
            for m in &hit.matches {
                assert_eq!(m.matched().to_lowercase(), q.to_lowercase());
            }
        }
    }
}

#[test]
fn substring_is_the_default_and_ranks_by_position() {
    let records = common::records();
    let hits = SearchEngine::default().search(
        &records,
        &SearchFilters::new("london")
            .fields(&[SearchField::Name])
            .include_obsolete(true),
    );
    let codes: Vec<&str> = hits.iter().map(|h| h.record.code.as_str()).collect();
    assert_eq!(codes, vec!["GBLON", "CALON", "GBLDN"]);
}

#[test]
fn fuzzy_is_idempotent_and_reuses_the_index() {
    let records = common::records();
    let engine = SearchEngine::default();
    let filters = SearchFilters::new("Rotterdm").strategy(Strategy::Fuzzy);

    let first = engine.search(&records, &filters);
    let second = engine.search(&records, &filters);

    assert!(!first.is_empty());
    assert_eq!(first[0].record.code, "NLRTM");
    assert_eq!(first, second);
    assert_eq!(engine.fuzzy().cache().rebuild_count(), 1);
}

#[test]
fn fuzzy_index_follows_the_filtered_dataset() {
    let records = common::records();
    let engine = SearchEngine::default();

    let all = SearchFilters::new("genva").strategy(Strategy::Fuzzy);
    let swiss = all.clone().country(CountryFilter::Only("CH".into()));

    engine.search(&records, &all);
    let hits = engine.search(&records, &swiss);
    assert!(hits.iter().all(|h| h.record.country_code == "CH"));
    assert_eq!(engine.fuzzy().cache().rebuild_count(), 2);
}

#[test]
fn mixing_search_and_multi_search_keeps_both_indexes() {
    let records = common::records();
    let engine = SearchEngine::default();
    let filters = SearchFilters::new("genva").strategy(Strategy::Fuzzy);

    for _ in 0..3 {
        engine.search(&records, &filters);
        engine
            .multi_search(&records, "genva", &MultiSearchOptions::default())
            .unwrap();
    }
    assert_eq!(engine.fuzzy().cache().rebuild_count(), 2);
}

#[test]
fn obsolete_records_never_leak() {
    let records = common::records();
    let engine = SearchEngine::default();

    for strategy in STRATEGIES {
        for q in ["", "london", "port of london", "Port", "lndon"] {
            let hits = engine.search(&records, &SearchFilters::new(q).strategy(strategy));
            assert!(hits.iter().all(|h| !h.record.obsolete), "{strategy} / {q:?}");
        }
    }
}

#[test]
fn browse_returns_the_prefiltered_records_in_order() {
    let records = common::records();
    let engine = SearchEngine::default();

    let filters = SearchFilters::new("   ").country(CountryFilter::Only("united kingdom".into()));
    let hits = engine.search(&records, &filters);

    let expected: Vec<&Record> = records
        .iter()
        .filter(|r| r.country == "United Kingdom" && !r.obsolete)
        .collect();
    assert_eq!(hits.len(), expected.len());
    for (hit, rec) in hits.iter().zip(expected) {
        assert_eq!(hit.record, rec);
        assert_eq!(hit.score, None);
        assert!(hit.matches.is_empty());
    }
}

#[test]
fn unknown_fields_fall_back_to_defaults() {
    let records = common::records();
    let fields = SearchField::parse_list(&["latitude", "bogus"]);
    let hits = SearchEngine::default().search(
        &records,
        &SearchFilters::new("switzerland").fields(&fields),
    );
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].matches[0].field, SearchField::Country);
}

#[test]
fn unknown_strategy_behaves_like_substring() {
    let records = common::records();
    let engine = SearchEngine::default();
    let unknown = engine.search(
        &records,
        &SearchFilters::new("ham").strategy(Strategy::from_name("levenshtein")),
    );
    let substring = engine.search(
        &records,
        &SearchFilters::new("ham").strategy(Strategy::Substring),
    );
    assert_eq!(unknown, substring);
}

#[test]
fn phonetic_matches_sound_alikes() {
    assert!(sounds_like("Robert", "Rupert"));
    assert!(!sounds_like("Robert", "Banana"));

    let records = common::records();
    let hits = SearchEngine::default().search(
        &records,
        &SearchFilters::new("Rupert").strategy(Strategy::Phonetic),
    );
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].record.code, "USROB");
    assert_eq!(hits[0].score, Some(0.5));
    assert_eq!(hits[0].matches[0].end, "Robert Port".len() - 1);
}

#[test]
fn multi_search_deduplicates_and_sorts() {
    let records = common::records();
    let engine = SearchEngine::default();

    for q in ["london", "genoa", "gen", "hamburg", "paris"] {
        let hits = engine
            .multi_search(&records, q, &MultiSearchOptions::default())
            .unwrap();

        let codes: HashSet<&str> = hits.iter().map(|h| h.record.code.as_str()).collect();
        assert_eq!(codes.len(), hits.len(), "duplicate codes for {q:?}");

        for pair in hits.windows(2) {
            assert!(pair[0].score.unwrap() <= pair[1].score.unwrap());
        }
    }
}

#[test]
fn multi_search_prefers_exact_hits() {
    let records = common::records();
    let hits = SearchEngine::default()
        .multi_search(&records, "Genoa", &MultiSearchOptions::default())
        .unwrap();
    assert_eq!(hits[0].record.code, "ITGOA");
    assert_eq!(hits[0].score, Some(0.0));
    // exact wins the tie against the equally perfect substring and fuzzy hits
    assert_eq!(hits[0].matches.len(), 1);
    assert_eq!(hits[0].matches[0].start, 0);
    assert_eq!(hits[0].matches[0].end, 4);
}

#[test]
fn multi_search_honours_limits_and_validates_threshold() {
    let records = common::records();
    let engine = SearchEngine::default();

    let capped = engine
        .multi_search(
            &records,
            "o",
            &MultiSearchOptions {
                max_results: Some(2),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(capped.len(), 2);

    let bad = engine.multi_search(
        &records,
        "o",
        &MultiSearchOptions {
            threshold: Some(-0.1),
            ..Default::default()
        },
    );
    assert!(bad.is_err());
}

#[test]
fn multi_search_ignores_filters() {
    let records = common::records();
    let hits = SearchEngine::default()
        .multi_search(&records, "port of london", &MultiSearchOptions::default())
        .unwrap();
    assert_eq!(hits[0].record.code, "GBLDN");
}

#[test]
fn suggestions_follow_prefix_then_alphabetical_order() {
    let records = vec![
        Record::new("A", "Geneva", "", ""),
        Record::new("B", "Genoa", "", ""),
        Record::new("C", "Paris", "", ""),
    ];
    assert_eq!(suggest(&records, "gen", 10), vec!["Geneva", "Genoa"]);
    assert!(suggest(&records, "g", 10).is_empty());
    assert_eq!(suggest(&records, "ar", 10), vec!["Paris"]);
}
