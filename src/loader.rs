#![forbid(unsafe_code)]

//! Word list loading.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::model::WordIndex;

/// Reads one word per line into a sorted, deduplicated [`WordIndex`].
///
/// Surrounding whitespace is trimmed and blank lines are skipped.
pub fn read_words<R: BufRead>(reader: R) -> Result<WordIndex> {
    let mut raw = Vec::new();
    let mut blank = 0usize;
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if word.is_empty() {
            blank += 1;
            continue;
        }
        raw.push(word.to_string());
    }
    let read = raw.len();
    let index = WordIndex::from_words(raw);
    info!(
        words = index.len(),
        duplicates = read - index.len(),
        blank_lines = blank,
        "loader.words.loaded"
    );
    Ok(index)
}

/// Reads the word list stored at `path`.
pub fn load_words(path: impl AsRef<Path>) -> Result<WordIndex> {
    let file = File::open(path.as_ref())?;
    read_words(BufReader::new(file))
}
