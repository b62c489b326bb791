#![forbid(unsafe_code)]

//! Edit distance between words.

use crate::model::Word;

/// Levenshtein distance between `a` and `b`, counted in characters.
///
/// Uses the two-row dynamic-programming recurrence; the rows are sized by the
/// shorter string.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let mut short: Vec<char> = a.chars().collect();
    let mut long: Vec<char> = b.chars().collect();
    if short.len() > long.len() {
        std::mem::swap(&mut short, &mut long);
    }
    if short.is_empty() {
        return long.len();
    }

    let mut previous: Vec<usize> = (0..=short.len()).collect();
    let mut current = vec![0usize; short.len() + 1];

    for (i, lc) in long.iter().enumerate() {
        current[0] = i + 1;
        for (j, sc) in short.iter().enumerate() {
            let substitution = previous[j] + usize::from(sc != lc);
            let deletion = previous[j + 1] + 1;
            let insertion = current[j] + 1;
            current[j + 1] = substitution.min(deletion).min(insertion);
        }
        std::mem::swap(&mut previous, &mut current);
    }
    previous[short.len()]
}

/// Returns true if `a` and `b` are distinct equal-length words one substitution apart.
///
/// The length check runs first so the quadratic distance is only computed for
/// words that can actually be neighbors.
pub fn is_unit_edit(a: &Word, b: &Word) -> bool {
    if a.length != b.length || a.text == b.text {
        return false;
    }
    levenshtein(&a.text, &b.text) == 1
}
