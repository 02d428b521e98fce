//! Summary statistics over a generated graph.

use tracing::{info, instrument};

use crate::graph::UndirectedGraph;

/// Processed edges between progress events.
const PROGRESS_INTERVAL: usize = 5_000_000;

/// Snapshot of how many vertices and edges a graph uses.
///
/// Computed on demand by [`summarize`]; it is not kept in sync with later
/// insertions.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct GraphSummary {
    number_vertices: usize,
    number_edges: usize,
}

impl GraphSummary {
    /// Builds a summary from raw counts.
    #[must_use]
    pub const fn new(number_vertices: usize, number_edges: usize) -> Self {
        Self {
            number_vertices,
            number_edges,
        }
    }

    /// Vertices incident to at least one edge.
    #[must_use]
    pub const fn number_vertices(&self) -> usize {
        self.number_vertices
    }

    /// Distinct edges stored in the graph.
    #[must_use]
    pub const fn number_edges(&self) -> usize {
        self.number_edges
    }
}

/// Counts the connected vertices and the edges of `graph`.
///
/// A vertex counts when it is either endpoint of a stored edge. Each
/// adjacency set is visited once and the result does not depend on
/// iteration order.
///
/// # Examples
/// ```
/// use randgraph_core::{GraphSummary, UndirectedGraph, summarize};
///
/// let mut graph = UndirectedGraph::new(3);
/// graph.add_edge(0, 2)?;
/// assert_eq!(summarize(&graph), GraphSummary::new(2, 1));
/// # Ok::<(), randgraph_core::GraphError>(())
/// ```
#[must_use]
#[instrument(name = "graph.summarize", skip(graph), fields(vertex_count = graph.vertex_count()))]
pub fn summarize(graph: &UndirectedGraph) -> GraphSummary {
    let mut touched = vec![false; graph.vertex_count()];
    let mut number_edges = 0_usize;

    for (lower, targets) in graph.adjacency().iter().enumerate() {
        if targets.is_empty() {
            continue;
        }
        mark(&mut touched, lower);
        for &upper in targets {
            mark(&mut touched, upper);
            number_edges += 1;
            if number_edges % PROGRESS_INTERVAL == 0 {
                info!(edges = number_edges, "processed edges");
            }
        }
    }

    GraphSummary {
        number_vertices: touched.iter().filter(|&&seen| seen).count(),
        number_edges,
    }
}

fn mark(touched: &mut [bool], vertex: usize) {
    if let Some(seen) = touched.get_mut(vertex) {
        *seen = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn graph_with(vertex_count: usize, edges: &[(usize, usize)]) -> UndirectedGraph {
        let mut graph = UndirectedGraph::new(vertex_count);
        for &(v1, v2) in edges {
            graph.add_edge(v1, v2).expect("fixture edge must be valid");
        }
        graph
    }

    #[rstest]
    #[case::no_edges(3, &[], 0, 0)]
    #[case::single_edge(3, &[(0, 2)], 2, 1)]
    #[case::shared_lower(3, &[(0, 1), (0, 2)], 3, 2)]
    #[case::upper_only_vertex(4, &[(0, 3), (1, 3)], 3, 2)]
    #[case::disjoint_pairs(6, &[(5, 4), (0, 1)], 4, 2)]
    #[case::empty_graph(0, &[], 0, 0)]
    fn summarize_counts_vertices_and_edges(
        #[case] vertex_count: usize,
        #[case] edges: &[(usize, usize)],
        #[case] expected_vertices: usize,
        #[case] expected_edges: usize,
    ) {
        let summary = summarize(&graph_with(vertex_count, edges));
        assert_eq!(summary.number_vertices(), expected_vertices);
        assert_eq!(summary.number_edges(), expected_edges);
    }

    #[test]
    fn duplicate_insertions_do_not_change_summary() {
        let once = graph_with(4, &[(1, 2)]);
        let twice = graph_with(4, &[(1, 2), (2, 1), (1, 2)]);
        assert_eq!(summarize(&once), summarize(&twice));
    }

    #[test]
    fn summary_agrees_with_tracked_edge_count() {
        let graph = graph_with(5, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]);
        let summary = summarize(&graph);
        assert_eq!(summary.number_edges(), graph.edge_count());
        assert_eq!(summary.number_vertices(), 5);
    }
}
