// crates/geofind-core/src/text.rs

//! Text normalization helpers shared by the matchers.
//!
//! Two flavours of folding exist:
//! - [`fold_chars`] lowercases per character and keeps a 1:1 mapping with
//!   the input, so character offsets found in the folded form are valid in
//!   the original string. Matchers that report [`MatchSpan`](crate::MatchSpan)s use it.
//! - [`fold_key`] transliterates to ASCII first (`Łódź` -> `lodz`). Offsets are
//!   lost, so it is only used for ordering and phonetic coding.

/// Convert a string into a folded key suitable for ordering and comparison.
///
/// ```rust
/// use geofind_core::text::fold_key;
///
/// assert_eq!(fold_key("Łódź"), "lodz");
/// assert_eq!(fold_key("Zürich"), "zurich");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Lowercase `c` to exactly one char.
///
/// Characters whose lowercase form expands (e.g. `İ`) keep the first char of
/// the expansion so that offsets stay aligned.
#[inline]
pub fn fold_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Case-folded characters of `s`, one per input char.
pub fn fold_chars(s: &str) -> Vec<char> {
    s.chars().map(fold_char).collect()
}

/// Index of the first occurrence of `needle` in `hay`, in chars.
pub fn find_chars(hay: &[char], needle: &[char]) -> Option<usize> {
    if needle.is_empty() || needle.len() > hay.len() {
        return None;
    }
    hay.windows(needle.len()).position(|w| w == needle)
}

/// Case-insensitive equality on the folded char sequence.
pub fn equals_folded(a: &str, b: &str) -> bool {
    a.chars().count() == b.chars().count()
        && a.chars().map(fold_char).eq(b.chars().map(fold_char))
}
