#![forbid(unsafe_code)]

//! Word-ladder graph construction.
//!
//! Edges only ever join words of equal length, so every length partition of
//! the [`WordIndex`] is built on its own worker thread. Workers read their
//! slice of the index, fill a private buffer of [`Leaf`] nodes and hand it
//! back over a channel. The orchestrator waits for every worker, restores
//! partition order and concatenates the buffers into one graph.

use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use tracing::{debug, info};

use crate::distance::is_unit_edit;
use crate::graph::Graph;
use crate::model::{Leaf, Partition, Word, WordIndex};


/// Options controlling how a graph is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOptions {
    /// Build each length partition on its own thread.
    pub parallel: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self { parallel: true }
    }
}

impl BuildOptions {
    /// Single-threaded build over all partitions in order.
    pub fn sequential() -> Self {
        Self { parallel: false }
    }
}

/// Counters describing a finished build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BuildSummary {
    /// Number of nodes, equal to the number of input words.
    pub nodes: usize,
    /// Number of undirected edges.
    pub edges: usize,
    /// Number of length partitions processed.
    pub partitions: usize,
}

/// Nodes produced for one partition, still tagged with where they belong.
struct PartitionResult {
    partition: Partition,
    leaves: Vec<Leaf>,
}

/// Builds the unit-edit graph of `words` with default options.
pub fn build_graph(words: &WordIndex) -> Graph {
    build_graph_with(words, &BuildOptions::default()).0
}

/// Builds the unit-edit graph of `words`, returning it with build counters.
pub fn build_graph_with(words: &WordIndex, opts: &BuildOptions) -> (Graph, BuildSummary) {
    let started = Instant::now();
    let partitions = words.partitions();
    let mut results = if opts.parallel && partitions.len() > 1 {
        build_parallel(words.words(), &partitions)
    } else {
        partitions
            .iter()
            .map(|partition| build_partition(words.words(), *partition))
            .collect()
    };

    // Channel order is completion order; node indices assume length order.
    results.sort_by_key(|result| result.partition.length);

    let mut leaves = Vec::with_capacity(words.len());
    for result in results {
        debug_assert_eq!(leaves.len(), result.partition.start);
        leaves.extend(result.leaves);
    }

    let graph = Graph::from_built(leaves);
    let summary = BuildSummary {
        nodes: graph.len(),
        edges: graph.edge_count(),
        partitions: partitions.len(),
    };
    info!(
        nodes = summary.nodes,
        edges = summary.edges,
        partitions = summary.partitions,
        parallel = opts.parallel,
        duration_ms = started.elapsed().as_secs_f64() * 1_000.0,
        "builder.build.completed"
    );
    (graph, summary)
}

fn build_parallel(words: &[Word], partitions: &[Partition]) -> Vec<PartitionResult> {
    thread::scope(|scope| {
        let (sender, receiver) = mpsc::channel();
        for partition in partitions.iter().copied() {
            let sender = sender.clone();
            scope.spawn(move || {
                sender.send(build_partition(words, partition)).ok();
            });
        }
        drop(sender);
        receiver.iter().take(partitions.len()).collect()
    })
}

/// Builds the nodes of one partition, addressing neighbors by global index.
fn build_partition(words: &[Word], partition: Partition) -> PartitionResult {
    let started = Instant::now();
    let offset = partition.start;
    let run = &words[partition.start..partition.end];
    debug!(
        length = partition.length,
        offset,
        words = run.len(),
        "builder.partition.start"
    );

    let mut leaves: Vec<Leaf> = Vec::with_capacity(run.len());
    let mut edges = 0usize;
    for (i, word) in run.iter().enumerate() {
        let candidates: Vec<usize> = run[..i]
            .iter()
            .enumerate()
            .filter(|(_, earlier)| is_unit_edit(word, earlier))
            .map(|(j, _)| j + offset)
            .collect();
        // Earlier nodes only ever receive larger indices, so lists stay ascending.
        for &j in &candidates {
            leaves[j - offset].relations.push(i + offset);
        }
        edges += candidates.len();
        leaves.push(Leaf {
            root: word.text.clone(),
            relations: candidates,
        });
    }

    debug!(
        length = partition.length,
        offset,
        words = run.len(),
        edges,
        duration_ms = started.elapsed().as_secs_f64() * 1_000.0,
        "builder.partition.done"
    );
    PartitionResult { partition, leaves }
}
