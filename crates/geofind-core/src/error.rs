// crates/geofind-core/src/error.rs

//! Crate-wide error type.
//!
//! Matchers themselves are infallible: an empty or missing field simply does
//! not match. Errors surface only for contract violations (bad options,
//! duplicate record codes) and for the dataset/config loading helpers.

use thiserror::Error;

/// Errors reported by `geofind-core`.
#[derive(Debug, Error)]
pub enum FindError {
    /// An option or config value is outside its allowed range.
    #[error("invalid option: {0}")]
    InvalidOption(String),

    /// Two records in one snapshot share the same `code`.
    #[error("duplicate record code: {0}")]
    DuplicateCode(String),

    /// Dataset or config file could not be located.
    #[error("not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary cache error: {0}")]
    Bincode(#[from] bincode::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FindError>;
