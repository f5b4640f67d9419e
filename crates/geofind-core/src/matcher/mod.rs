// crates/geofind-core/src/matcher/mod.rs

//! # Matchers
//!
//! One module per [`Strategy`](crate::Strategy). All of them implement
//! [`Matcher`](crate::traits::Matcher) and rank their own output.

pub mod exact;
pub mod fuzzy;
pub mod phonetic;
pub mod substring;

pub use exact::ExactMatcher;
pub use fuzzy::FuzzyMatcher;
pub use phonetic::{phonetic_code, sounds_like, PhoneticMatcher, PHONETIC_SCORE};
pub use substring::SubstringMatcher;
