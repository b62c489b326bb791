//! Word-ladder graphs.
//!
//! Two words of equal length are neighbors when they differ in exactly one
//! character. [`build_graph`] turns a sorted word list into that graph,
//! [`store`] persists it as JSON and [`search_path`] answers shortest-ladder
//! queries against it.

#![warn(missing_docs)]

pub mod builder;
pub mod distance;
pub mod error;
pub mod graph;
pub mod loader;
pub mod model;
pub mod search;
pub mod store;

pub use builder::{build_graph, build_graph_with, BuildOptions, BuildSummary};
pub use distance::{is_unit_edit, levenshtein};
pub use error::{Endpoint, LadderError, Result};
pub use graph::Graph;
pub use model::{Leaf, Partition, Word, WordIndex};
pub use search::{find_word, search_path};
