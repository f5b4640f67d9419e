//! Basic usage example for geofind-rs
//!
//! This example demonstrates how to:
//! - Load the bundled facility dataset
//! - Run each search strategy
//! - Apply country and obsolete filters
//! - Ask for autocomplete suggestions

use geofind_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== geofind-rs Basic Usage Example ===\n");

    println!("Loading facility dataset...");
    let store = RecordStore::load_default()?;
    let records = store.records();
    println!("✓ {} records loaded\n", records.len());

    let engine = SearchEngine::default();

    // Example 1: one query, four strategies
    println!("--- Example 1: Strategies ---");
    for (strategy, query) in [
        (Strategy::Exact, "London"),
        (Strategy::Substring, "lon"),
        (Strategy::Fuzzy, "Rotterdm"),
        (Strategy::Phonetic, "Hamburk"),
    ] {
        let hits = engine.search(records, &SearchFilters::new(query).strategy(strategy));
        println!("{strategy:>9} {query:?}: {} hit(s)", hits.len());
        for hit in hits.iter().take(3) {
            println!(
                "          {} {} score={:?}",
                hit.record.code, hit.record.name, hit.score
            );
        }
    }
    println!();

    // Example 2: filters
    println!("--- Example 2: Country filter + obsolete records ---");
    let filters = SearchFilters::new("new york")
        .country(CountryFilter::Only("US".into()))
        .include_obsolete(true);
    for hit in engine.search(records, &filters) {
        println!("{} {} obsolete={}", hit.record.code, hit.record.name, hit.record.obsolete);
    }
    println!();

    // Example 3: highlighting
    println!("--- Example 3: Match spans ---");
    for hit in engine.search(records, &SearchFilters::new("bur")) {
        for span in &hit.matches {
            println!(
                "{}: {} [{}..={}] -> {:?}",
                hit.record.code,
                span.field,
                span.start,
                span.end,
                span.matched()
            );
        }
    }
    println!();

    // Example 4: suggestions
    println!("--- Example 4: Suggestions for \"gen\" ---");
    println!("{:?}", engine.suggest(records, "gen"));

    Ok(())
}
