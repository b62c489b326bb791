//! Core data model shared by the builder, the searcher and the JSON store.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::{LadderError, Result};

/// A dictionary word tagged with its length in characters.
///
/// Field order matters: the derived ordering compares `length` first and
/// `text` second, which is the ordering of a [`WordIndex`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    /// Number of Unicode scalar values in `text`.
    pub length: usize,
    /// The word itself.
    pub text: String,
}

impl Word {
    /// Creates a word, computing its character length.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            length: text.chars().count(),
            text,
        }
    }
}

/// Words sorted by `(length, text)` with no duplicates.
///
/// This is the only input the graph builder accepts. Node `i` of a built graph
/// always corresponds to word `i` of the index it was built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordIndex {
    words: Vec<Word>,
}

impl WordIndex {
    /// Builds an index from arbitrary words, sorting and deduplicating them.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut words: Vec<Word> = words.into_iter().map(Word::new).collect();
        words.sort_unstable();
        words.dedup();
        Self { words }
    }

    /// Wraps words that are claimed to be sorted already, checking the claim.
    pub fn from_sorted(words: Vec<Word>) -> Result<Self> {
        for (pos, word) in words.iter().enumerate() {
            let chars = word.text.chars().count();
            if word.length != chars {
                return Err(LadderError::InvalidWordIndex(format!(
                    "word #{pos} '{}' is tagged with length {} but has {chars} characters",
                    word.text, word.length
                )));
            }
        }
        if let Some(pos) = words.windows(2).position(|pair| pair[0] >= pair[1]) {
            return Err(LadderError::InvalidWordIndex(format!(
                "word #{} '{}' does not sort after '{}'",
                pos + 1,
                words[pos + 1].text,
                words[pos].text
            )));
        }
        Ok(Self { words })
    }

    /// Number of words in the index.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the index holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The sorted words.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Splits the index into maximal contiguous runs of equal word length.
    ///
    /// Runs come out in ascending length order and cover the index exactly.
    pub fn partitions(&self) -> Vec<Partition> {
        let mut partitions = Vec::new();
        let mut start = 0;
        for end in 1..=self.words.len() {
            if end == self.words.len() || self.words[end].length != self.words[start].length {
                partitions.push(Partition {
                    length: self.words[start].length,
                    start,
                    end,
                });
                start = end;
            }
        }
        partitions
    }
}

/// A contiguous run `[start, end)` of a [`WordIndex`] sharing one word length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    /// Character length shared by every word of the run.
    pub length: usize,
    /// Global index of the first word.
    pub start: usize,
    /// Global index one past the last word.
    pub end: usize,
}

impl Partition {
    /// Number of words in the run.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true for an empty run.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// One graph node as persisted: the word and the indices of its neighbors.
///
/// `relations` holds positions in the same node sequence, strictly ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaf {
    /// The word this node stands for.
    pub root: String,
    /// Global indices of the unit-edit neighbors of `root`.
    pub relations: Vec<usize>,
}

impl Leaf {
    /// Creates a node with no neighbors.
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            relations: Vec::new(),
        }
    }

    /// Orders this node's word against `(length, text)`, the index ordering.
    /// A word never has more characters than bytes, so shorter byte
    /// strings are ordered without counting.
    pub(crate) fn cmp_key(&self, length: usize, text: &str) -> Ordering {
        let bytes = self.root.len();
        let chars = if bytes < length {
            bytes
        } else {
            self.root.chars().count()
        };
        chars
            .cmp(&length)
            .then_with(|| self.root.as_str().cmp(text))
    }
}
