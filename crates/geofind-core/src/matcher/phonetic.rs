// crates/geofind-core/src/matcher/phonetic.rs
use crate::model::{MatchSpan, Record, SearchField, SearchResult};
use crate::traits::Matcher;

/// Fixed confidence of a sound-alike hit.
pub const PHONETIC_SCORE: f64 = 0.5;

/// Words shorter than this are skipped; their codes collide too often.
const MIN_WORD_LEN: usize = 3;

const CODE_LEN: usize = 4;

/// Sound-alike matching on a 4-character Soundex-style code.
///
/// The whole query is coded once and compared with the code of every
/// whitespace-separated word of each requested field.
#[derive(Clone, Copy, Debug, Default)]
pub struct PhoneticMatcher;

impl Matcher for PhoneticMatcher {
    fn name(&self) -> &'static str {
        "phonetic"
    }

    fn find<'a>(
        &self,
        candidates: &[&'a Record],
        query: &str,
        fields: &[SearchField],
    ) -> Vec<SearchResult<'a>> {
        let code = phonetic_code(query.trim());
        if code.is_empty() {
            return Vec::new();
        }

        let mut out = Vec::new();
        for &record in candidates {
            let spans: Vec<MatchSpan> = fields
                .iter()
                .filter_map(|&f| {
                    let value = record.field(f)?;
                    value
                        .split_whitespace()
                        .filter(|w| w.chars().count() >= MIN_WORD_LEN)
                        .any(|w| phonetic_code(w) == code)
                        .then(|| MatchSpan::whole(f, value))
                })
                .collect();

            if !spans.is_empty() {
                out.push(SearchResult::scored(record, PHONETIC_SCORE, spans));
            }
        }
        out
    }
}

/// Consonant class of an uppercase ASCII letter; `'0'` for vowels and the
/// other letters that carry no class.
fn class(c: char) -> char {
    match c {
        'B' | 'F' | 'P' | 'V' => '1',
        'C' | 'G' | 'J' | 'K' | 'Q' | 'S' | 'X' | 'Z' => '2',
        'D' | 'T' => '3',
        'L' => '4',
        'M' | 'N' => '5',
        'R' => '6',
        _ => '0',
    }
}

/// Compute the phonetic code of `word`.
///
/// Input is transliterated to ASCII, stripped of non-letters and uppercased.
/// Returns `""` when nothing usable is left.
///
/// ```rust
/// use geofind_core::phonetic_code;
///
/// assert_eq!(phonetic_code("Robert"), "R163");
/// assert_eq!(phonetic_code("Zürich"), "Z620");
/// assert_eq!(phonetic_code("1234"), "");
/// ```
pub fn phonetic_code(word: &str) -> String {
    let letters: Vec<char> = deunicode::deunicode(word)
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect();

    let Some((&first, rest)) = letters.split_first() else {
        return String::new();
    };

    let mut code = String::with_capacity(CODE_LEN);
    code.push(first);
    let mut prev = class(first);

    for &c in rest {
        if code.len() == CODE_LEN {
            break;
        }
        // H and W are transparent: letters of the same class on either side
        // still collapse.
        if c == 'H' || c == 'W' {
            continue;
        }
        let digit = class(c);
        if digit != '0' && digit != prev {
            code.push(digit);
        }
        prev = digit;
    }

    while code.len() < CODE_LEN {
        code.push('0');
    }
    code
}

/// `true` when both words produce the same non-empty code.
pub fn sounds_like(a: &str, b: &str) -> bool {
    let code = phonetic_code(a);
    !code.is_empty() && code == phonetic_code(b)
}
