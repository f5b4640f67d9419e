//! geofind: command-line interface for geofind-core
//!
//! Usage examples
//! --------------
//!
//! - Show dataset stats
//!   $ geofind stats
//!
//! - Substring search (default strategy), restricted to a country
//!   $ geofind search lon --country GB
//!
//! - Typo-tolerant and sound-alike search
//!   $ geofind search rotterdm --strategy fuzzy
//!   $ geofind search rupert --strategy phonetic
//!
//! - Best-of-breed merge of exact, substring and fuzzy
//!   $ geofind multi genva --max-results 5 --json
//!
//! - Autocomplete
//!   $ geofind suggest gen
//!
//! Data source
//! -----------
//!
//! Without `--input` the CLI searches the sample dataset bundled with
//! `geofind-core`. `--input` accepts `.json`, `.json.gz` and `.bin` caches.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use geofind_core::{
    phonetic_code, CountryFilter, EngineConfig, MultiSearchOptions, RecordStore, SearchEngine,
    SearchField, SearchFilters, SearchResult, Strategy,
};
use std::borrow::Cow;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    let config = match &args.config {
        Some(path) => load_config(path).with_context(|| format!("loading config {path}"))?,
        None => EngineConfig::default(),
    };
    let engine = SearchEngine::new(config)?;

    match args.command {
        Commands::Phonetic { words } => {
            for w in words {
                println!("{w}: {}", display_code(&phonetic_code(&w)));
            }
        }

        Commands::Stats => {
            let store = open_store(args.input.as_deref())?;
            let stats = store.stats();
            println!("Dataset statistics:");
            println!("  Records: {}", stats.records);
            println!("  Countries: {}", stats.countries);
            println!("  Obsolete: {}", stats.obsolete);
            println!("  With coordinates: {}", stats.with_coordinates);
        }

        Commands::Search {
            query,
            strategy,
            fields,
            country,
            include_obsolete,
            json,
        } => {
            let filters = SearchFilters {
                query,
                strategy: Strategy::from_name(&strategy),
                fields: SearchField::parse_list(&fields),
                country: CountryFilter::from_option(country.as_deref()),
                include_obsolete,
            };
            let store = open_store(args.input.as_deref())?;
            let hits = engine.search(store.records(), &filters);
            print_results(&hits, json)?;
        }

        Commands::Multi {
            query,
            threshold,
            max_results,
            fields,
            json,
        } => {
            let options = MultiSearchOptions {
                threshold,
                max_results,
                fields: SearchField::parse_list(&fields),
            };
            let store = open_store(args.input.as_deref())?;
            let hits = engine.multi_search(store.records(), &query, &options)?;
            print_results(&hits, json)?;
        }

        Commands::Suggest { query, max } => {
            let store = open_store(args.input.as_deref())?;
            let suggestions = match max {
                Some(n) => geofind_core::suggest(store.records(), &query, n),
                None => engine.suggest(store.records(), &query),
            };
            for s in suggestions {
                println!("{s}");
            }
        }
    }

    Ok(())
}

/// User-supplied dataset, or the bundled one (loaded once per process).
fn open_store(input: Option<&str>) -> anyhow::Result<Cow<'static, RecordStore>> {
    let store = match input {
        Some(path) => Cow::Owned(
            RecordStore::load_from_path(path).with_context(|| format!("loading dataset {path}"))?,
        ),
        None => Cow::Borrowed(RecordStore::load_default().context("loading bundled dataset")?),
    };
    debug!(records = store.len(), "dataset ready");
    Ok(store)
}

#[cfg(feature = "json")]
fn load_config(path: &str) -> anyhow::Result<EngineConfig> {
    Ok(EngineConfig::from_json_file(path)?)
}

#[cfg(not(feature = "json"))]
fn load_config(_path: &str) -> anyhow::Result<EngineConfig> {
    anyhow::bail!("JSON configs need the `json` feature")
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_results(hits: &[SearchResult<'_>], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(hits)?);
        return Ok(());
    }
    if hits.is_empty() {
        println!("No matches.");
        return Ok(());
    }
    for hit in hits {
        let score = hit
            .score
            .map(|s| format!("{s:.3}"))
            .unwrap_or_else(|| "-".to_string());
        let spans: Vec<String> = hit
            .matches
            .iter()
            .map(|m| format!("{}[{}..{}]={:?}", m.field, m.start, m.end, m.matched()))
            .collect();
        let r = hit.record;
        let obsolete = if r.obsolete { " (obsolete)" } else { "" };
        println!(
            "{score:>6}  {}  {} - {}{obsolete}  {}",
            r.code,
            r.name,
            r.country,
            spans.join(" ")
        );
    }
    Ok(())
}

fn display_code(code: &str) -> &str {
    if code.is_empty() {
        "(no letters)"
    } else {
        code
    }
}
