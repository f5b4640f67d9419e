// crates/geofind-core/src/matcher/fuzzy/align.rs

//! Approximate substring alignment.
//!
//! Finds the substring of `text` closest to `pattern` under optimal string
//! alignment distance (insert, delete, substitute and adjacent transpose, all
//! cost 1). Leading and trailing text is free, so `"lond"` aligns with
//! distance 0 inside `"port of london"`.

/// Best-aligned region of the text. `end` is exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Alignment {
    pub distance: usize,
    pub start: usize,
    pub end: usize,
}

impl Alignment {
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }
}

/// Align `pattern` against every substring of `text`.
///
/// Ties on distance resolve to the earliest end position.
pub fn best_alignment(pattern: &[char], text: &[char]) -> Alignment {
    let m = pattern.len();
    let n = text.len();
    let w = n + 1;

    // dist[i * w + j]: cost of aligning pattern[..i] to a text substring ending at j.
    // from[i * w + j]: where that substring starts.
    let mut dist = vec![0usize; (m + 1) * w];
    let mut from = vec![0usize; (m + 1) * w];

    for (j, f) in from.iter_mut().take(w).enumerate() {
        *f = j;
    }
    for i in 1..=m {
        dist[i * w] = i;
    }

    for i in 1..=m {
        for j in 1..=n {
            let cost = usize::from(pattern[i - 1] != text[j - 1]);
            let diag = (i - 1) * w + (j - 1);
            let mut best = (dist[diag] + cost, from[diag]);

            let up = (i - 1) * w + j;
            if dist[up] + 1 < best.0 {
                best = (dist[up] + 1, from[up]);
            }
            let left = i * w + (j - 1);
            if dist[left] + 1 < best.0 {
                best = (dist[left] + 1, from[left]);
            }
            if i > 1 && j > 1 && pattern[i - 1] == text[j - 2] && pattern[i - 2] == text[j - 1] {
                let tr = (i - 2) * w + (j - 2);
                if dist[tr] + 1 < best.0 {
                    best = (dist[tr] + 1, from[tr]);
                }
            }

            dist[i * w + j] = best.0;
            from[i * w + j] = best.1;
        }
    }

    let last = m * w;
    let mut end = 0;
    for j in 1..=n {
        if dist[last + j] < dist[last + end] {
            end = j;
        }
    }

    Alignment {
        distance: dist[last + end],
        start: from[last + end].min(end),
        end,
    }
}
