//! geofind-cli
//! ===========
//!
//! Command-line interface for the `geofind-core` facility search engine.
//!
//! This crate primarily provides a binary (`geofind`). The small library
//! target exists so that docs.rs renders this overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! cargo install geofind-cli
//! geofind --help
//! geofind search genva --strategy fuzzy
//! geofind multi london --json
//! geofind suggest gen
//! ```
//!
//! For programmatic access use the [`geofind-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
