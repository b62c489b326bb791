use std::fmt;
use std::io;
use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LadderError>;

/// Which side of a path query an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// The word the ladder starts from.
    Start,
    /// The word the ladder has to reach.
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => f.write_str("start"),
            Endpoint::End => f.write_str("end"),
        }
    }
}

/// Errors produced while building, loading or searching a word graph.
#[derive(Debug, Error)]
pub enum LadderError {
    /// One of the query endpoints is not a node of the graph.
    #[error("{endpoint} word '{word}' is not found in the graph")]
    WordNotFound {
        /// The word that was looked up.
        word: String,
        /// Which endpoint of the query it was.
        endpoint: Endpoint,
    },
    /// Both endpoints exist but no chain of single-letter substitutions joins them.
    #[error("no ladder from '{start}' to '{end}'")]
    NoPathFound {
        /// Start word of the query.
        start: String,
        /// End word of the query.
        end: String,
    },
    /// A persisted graph violates the index or ordering invariants.
    #[error("malformed graph: {0}")]
    MalformedGraph(String),
    /// A caller-provided word index is not ordered by (length, text).
    #[error("invalid word index: {0}")]
    InvalidWordIndex(String),
    /// I/O failure while reading or writing a word list or graph file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// JSON encode or decode failure.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LadderError {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        LadderError::MalformedGraph(message.into())
    }

    pub(crate) fn not_found(word: &str, endpoint: Endpoint) -> Self {
        LadderError::WordNotFound {
            word: word.to_string(),
            endpoint,
        }
    }
}
