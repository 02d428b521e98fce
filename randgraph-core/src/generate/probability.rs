//! Independent-edge (Gilbert) generator.

use tracing::{info, instrument};

use crate::{Result, graph::UndirectedGraph};

use super::UniformSource;

/// Source vertices processed between progress events.
const PROGRESS_INTERVAL: usize = 5_000;

/// Builds a graph that contains each vertex pair independently with
/// probability `probability`.
///
/// Pairs `(i, j)` with `i < j` are visited in ascending order of `i` then
/// `j`, drawing one value `r` from `[0, 1)` per pair; the edge is added iff
/// `r < probability`. The probability is not clamped, so values `<= 0` give
/// an empty graph and values `>= 1` the complete graph. Runs in O(n²).
///
/// # Errors
/// Never fails for graphs built here; the signature propagates the graph
/// store's validation.
///
/// # Examples
/// ```
/// use randgraph_core::{build_random_graph, seeded_rng};
///
/// let mut rng = seeded_rng(Some(1));
/// let complete = build_random_graph(5, 1.0, &mut rng)?;
/// assert_eq!(complete.edge_count(), 10);
///
/// let empty = build_random_graph(5, 0.0, &mut rng)?;
/// assert_eq!(empty.edge_count(), 0);
/// # Ok::<(), randgraph_core::GraphError>(())
/// ```
#[instrument(
    name = "generate.probability",
    skip(rng),
    fields(edges = tracing::field::Empty),
    err
)]
pub fn build_random_graph<R: UniformSource + ?Sized>(
    vertex_count: usize,
    probability: f64,
    rng: &mut R,
) -> Result<UndirectedGraph> {
    info!(vertex_count, "initialising graph");
    let mut graph = UndirectedGraph::new(vertex_count);

    for lower in 0..vertex_count.saturating_sub(1) {
        if lower % PROGRESS_INTERVAL == 0 {
            info!(vertex = lower, vertex_count, "building from vertex");
        }
        for upper in (lower + 1)..vertex_count {
            if rng.next_unit() < probability {
                graph.add_edge(lower, upper)?;
            }
        }
    }

    tracing::Span::current().record("edges", graph.edge_count());
    Ok(graph)
}
