#![forbid(unsafe_code)]

//! JSON persistence of built graphs.
//!
//! A graph file is a single JSON array of `{"root": .., "relations": [..]}`
//! objects followed by a newline. Array position is the node index.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::graph::Graph;
use crate::model::Leaf;

/// Encodes `leaves` to `writer` as a JSON array plus a trailing newline.
pub fn write_graph<W: Write>(mut writer: W, leaves: &[Leaf]) -> Result<()> {
    serde_json::to_writer(&mut writer, leaves)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Decodes and validates a graph from `reader`.
pub fn read_graph<R: Read>(reader: R) -> Result<Graph> {
    let leaves: Vec<Leaf> = serde_json::from_reader(reader)?;
    Graph::from_leaves(leaves)
}

/// Writes `graph` to `path`, replacing any existing file.
pub fn save_graph(path: impl AsRef<Path>, graph: &Graph) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_graph(BufWriter::new(file), graph.leaves())?;
    info!(
        path = %path.display(),
        nodes = graph.len(),
        edges = graph.edge_count(),
        "store.graph.saved"
    );
    Ok(())
}

/// Reads and validates the graph stored at `path`.
pub fn load_graph(path: impl AsRef<Path>) -> Result<Graph> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let graph = read_graph(BufReader::new(file))?;
    info!(
        path = %path.display(),
        nodes = graph.len(),
        edges = graph.edge_count(),
        "store.graph.loaded"
    );
    Ok(graph)
}
