use clap::{ArgAction, Parser, Subcommand};

/// CLI arguments for geofind
#[derive(Debug, Parser)]
#[command(
    name = "geofind",
    version,
    about = "CLI for searching geographic facility records with geofind-core"
)]
pub struct CliArgs {
    /// Dataset to load (.json, .json.gz or .bin cache). Defaults to the bundled sample.
    #[arg(short = 'i', long = "input", env = "GEOFIND_DATA", global = true)]
    pub input: Option<String>,

    /// Engine config as JSON (fuzzy threshold, weights, limits)
    #[arg(short = 'c', long = "config", env = "GEOFIND_CONFIG", global = true)]
    pub config: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG wins when set.
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the dataset
    Stats,

    /// Search with a single strategy (exact, substring, fuzzy, phonetic)
    Search {
        /// Query text; empty lists every record passing the filters
        #[arg(default_value = "")]
        query: String,

        /// Strategy name; unknown names fall back to substring
        #[arg(short = 's', long = "strategy", default_value = "substring")]
        strategy: String,

        /// Field to search (repeatable): code, name, alt_name, country, country_code
        #[arg(short = 'F', long = "field")]
        fields: Vec<String>,

        /// Keep only this country (code or name); "all" disables the filter
        #[arg(long = "country")]
        country: Option<String>,

        /// Include records flagged obsolete
        #[arg(long = "include-obsolete")]
        include_obsolete: bool,

        /// Print results as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Exact + substring + fuzzy, merged per record
    Multi {
        query: String,

        /// Fuzzy threshold in [0, 1]
        #[arg(short = 't', long = "threshold")]
        threshold: Option<f64>,

        #[arg(short = 'n', long = "max-results")]
        max_results: Option<usize>,

        #[arg(short = 'F', long = "field")]
        fields: Vec<String>,

        #[arg(long = "json")]
        json: bool,
    },

    /// Autocomplete suggestions for a partial query
    Suggest {
        query: String,

        #[arg(short = 'n', long = "max")]
        max: Option<usize>,
    },

    /// Print the phonetic code of each word
    Phonetic {
        #[arg(required = true)]
        words: Vec<String>,
    },
}
