//! Multi-strategy ranking example
//!
//! Runs exact, substring and fuzzy matching at once and prints the merged,
//! deduplicated ranking. Also shows a custom engine config.

use geofind_rs::prelude::*;

fn main() -> Result<()> {
    let store = RecordStore::load_default()?;
    let records = store.records();

    let mut config = EngineConfig::default();
    config.fuzzy.threshold = 0.35;
    config.max_results = 10;
    let engine = SearchEngine::new(config)?;

    for query in ["london", "genva", "antwerpen", "muenchen"] {
        println!("--- {query} ---");
        let hits = engine.multi_search(records, query, &MultiSearchOptions::default())?;
        for hit in hits {
            let fields: Vec<String> = hit.matches.iter().map(|m| m.field.to_string()).collect();
            println!(
                "{:.3}  {}  {} ({})  via {}",
                hit.score.unwrap_or(f64::NAN),
                hit.record.code,
                hit.record.name,
                hit.record.country,
                fields.join(",")
            );
        }
        println!();
    }

    // Invalid options are reported, not panicked on.
    let bad = MultiSearchOptions {
        threshold: Some(2.0),
        ..Default::default()
    };
    if let Err(e) = engine.multi_search(records, "x", &bad) {
        println!("rejected: {e}");
    }

    Ok(())
}
