#![forbid(unsafe_code)]

//! Shortest ladder search over a built graph.

use std::borrow::Cow;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::error::{Endpoint, LadderError, Result};
use crate::graph::Graph;
use crate::model::Leaf;

/// Traversal record for one reached node. Predecessors are node indices.
#[derive(Debug, Clone, Copy)]
struct Vertex {
    index: usize,
    distance: usize,
    predecessor: Option<usize>,
}

/// Locates `word` among nodes sorted by (character length, text).
pub fn find_word(leaves: &[Leaf], word: &str) -> Option<usize> {
    let length = word.chars().count();
    leaves
        .binary_search_by(|leaf| leaf.cmp_key(length, word))
        .ok()
}

/// Finds a shortest ladder from `start` to `end`, both ends included.
///
/// Nodes at equal distance are expanded lowest index first, so repeated
/// queries always return the same ladder. `leaves` may come straight from
/// untrusted input: unsorted neighbor lists are tolerated and out-of-range
/// neighbors are reported instead of followed.
pub fn search_path(leaves: &[Leaf], start: &str, end: &str) -> Result<Vec<String>> {
    let source =
        find_word(leaves, start).ok_or_else(|| LadderError::not_found(start, Endpoint::Start))?;
    let target =
        find_word(leaves, end).ok_or_else(|| LadderError::not_found(end, Endpoint::End))?;
    if source == target {
        debug!(start, end, hops = 0, settled = 0, "search.completed");
        return Ok(vec![leaves[source].root.clone()]);
    }

    let mut settled: FxHashMap<usize, Vertex> = FxHashMap::default();
    let mut frontier: FxHashMap<usize, Vertex> = FxHashMap::default();
    let mut current = Vertex {
        index: source,
        distance: 0,
        predecessor: None,
    };
    frontier.insert(source, current);

    loop {
        frontier.remove(&current.index);
        settled.insert(current.index, current);

        let mut reached = false;
        for &next in ascending(&leaves[current.index].relations).iter() {
            if next >= leaves.len() {
                return Err(LadderError::malformed(format!(
                    "node #{} '{}' references invalid neighbor {next}",
                    current.index, leaves[current.index].root
                )));
            }
            if settled.contains_key(&next) || frontier.contains_key(&next) {
                continue;
            }
            let vertex = Vertex {
                index: next,
                distance: current.distance + 1,
                predecessor: Some(current.index),
            };
            frontier.insert(next, vertex);
            if next == target {
                current = vertex;
                reached = true;
                break;
            }
        }
        if reached {
            break;
        }

        match frontier
            .values()
            .min_by_key(|vertex| (vertex.distance, vertex.index))
        {
            Some(vertex) => current = *vertex,
            None => break,
        }
    }

    if leaves[current.index].root != end {
        debug!(start, end, settled = settled.len(), "search.not_found");
        return Err(LadderError::NoPathFound {
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    let mut path = Vec::with_capacity(current.distance + 1);
    let mut cursor = Some(current);
    while let Some(vertex) = cursor {
        path.push(leaves[vertex.index].root.clone());
        cursor = vertex
            .predecessor
            .and_then(|index| settled.get(&index).copied());
    }
    path.reverse();
    debug!(
        start,
        end,
        hops = current.distance,
        settled = settled.len(),
        "search.completed"
    );
    Ok(path)
}

fn ascending(relations: &[usize]) -> Cow<'_, [usize]> {
    if relations.windows(2).all(|pair| pair[0] <= pair[1]) {
        Cow::Borrowed(relations)
    } else {
        let mut sorted = relations.to_vec();
        sorted.sort_unstable();
        Cow::Owned(sorted)
    }
}

impl Graph {
    /// Shortest ladder between two words of this graph.
    pub fn path(&self, start: &str, end: &str) -> Result<Vec<String>> {
        search_path(self.leaves(), start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(root: &str, relations: &[usize]) -> Leaf {
        Leaf {
            root: root.to_string(),
            relations: relations.to_vec(),
        }
    }

    /// Two equally short routes from "cat" to "cog": via "cag" and via "cot".
    fn square() -> Vec<Leaf> {
        vec![
            leaf("cag", &[1, 2]),
            leaf("cat", &[0, 3]),
            leaf("cog", &[0, 3]),
            leaf("cot", &[1, 2]),
        ]
    }

    #[test]
    fn finds_words_by_length_then_text() {
        let leaves = vec![leaf("ab", &[]), leaf("ba", &[]), leaf("abc", &[])];
        assert_eq!(find_word(&leaves, "ab"), Some(0));
        assert_eq!(find_word(&leaves, "abc"), Some(2));
        assert_eq!(find_word(&leaves, "b"), None);
        assert_eq!(find_word(&[], "ab"), None);
    }

    #[test]
    fn tie_break_prefers_lowest_index() {
        let path = search_path(&square(), "cat", "cog").unwrap();
        assert_eq!(path, ["cat", "cag", "cog"]);
        let back = search_path(&square(), "cog", "cat").unwrap();
        assert_eq!(back, ["cog", "cag", "cat"]);
    }

    #[test]
    fn same_word_is_a_single_step_ladder() {
        assert_eq!(search_path(&square(), "cot", "cot").unwrap(), ["cot"]);
        assert_eq!(search_path(&square(), "cag", "cag").unwrap(), ["cag"]);
        let lonely = vec![leaf("ab", &[])];
        assert_eq!(search_path(&lonely, "ab", "ab").unwrap(), ["ab"]);
    }

    #[test]
    fn reports_missing_endpoints() {
        let err = search_path(&square(), "dog", "cat").unwrap_err();
        assert!(matches!(
            err,
            LadderError::WordNotFound { endpoint: Endpoint::Start, .. }
        ));
        let err = search_path(&square(), "cat", "dog").unwrap_err();
        assert!(matches!(
            err,
            LadderError::WordNotFound { endpoint: Endpoint::End, .. }
        ));
    }

    #[test]
    fn tolerates_unsorted_relations() {
        let mut leaves = square();
        leaves[1].relations = vec![3, 0];
        assert_eq!(
            search_path(&leaves, "cat", "cog").unwrap(),
            ["cat", "cag", "cog"]
        );
    }

    #[test]
    fn out_of_range_neighbor_is_malformed() {
        let leaves = vec![leaf("ab", &[7]), leaf("ac", &[])];
        let err = search_path(&leaves, "ab", "ac").unwrap_err();
        assert!(matches!(err, LadderError::MalformedGraph(_)));
    }
}
