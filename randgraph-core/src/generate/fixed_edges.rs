//! Generator that places an exact number of distinct random edges.
//!
//! Sparse targets use rejection sampling: draw two vertex ids, redraw on a
//! self-loop or an existing edge. Its expected cost climbs without bound as
//! the target approaches the complete graph, so dense targets shuffle the
//! full candidate list instead and keep a prefix.

use tracing::{Span, field, info, instrument};

use crate::{
    Result,
    error::GraphError,
    graph::{UndirectedGraph, max_edge_count},
};

use super::UniformSource;

/// Inserted edges between progress events.
const PROGRESS_INTERVAL: usize = 500_000;

/// Smallest vertex count on which an edge can be placed.
const MIN_VERTICES: usize = 2;

/// How [`build_random_graph_fixed_edges`] picks distinct edges.
///
/// # Examples
/// ```
/// use randgraph_core::SamplingStrategy;
///
/// assert_eq!(SamplingStrategy::Auto.resolve(10, 45), SamplingStrategy::Rejection);
/// assert_eq!(SamplingStrategy::Auto.resolve(40, 45), SamplingStrategy::Shuffle);
/// assert_eq!(SamplingStrategy::Rejection.resolve(40, 45), SamplingStrategy::Rejection);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum SamplingStrategy {
    /// Rejection sampling up to half density, shuffling above it.
    #[default]
    Auto,
    /// Draw random pairs and discard self-loops and duplicates.
    Rejection,
    /// Partially shuffle every candidate pair and keep the first `target`.
    Shuffle,
}

impl SamplingStrategy {
    /// Resolves [`SamplingStrategy::Auto`] for a concrete target; explicit
    /// strategies are returned unchanged.
    #[must_use]
    pub const fn resolve(self, target: usize, max_edges: u128) -> Self {
        match self {
            Self::Auto if (target as u128) * 2 > max_edges => Self::Shuffle,
            Self::Auto => Self::Rejection,
            explicit => explicit,
        }
    }

    /// Lower-case label used in logs and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Rejection => "rejection",
            Self::Shuffle => "shuffle",
        }
    }
}

/// Builds a graph on `vertex_count` vertices with exactly `edge_target`
/// distinct edges chosen uniformly at random.
///
/// # Errors
/// Returns [`GraphError::InsufficientVertices`] when `vertex_count < 2` and
/// [`GraphError::EdgeTargetUnreachable`] when `edge_target` exceeds
/// `vertex_count * (vertex_count - 1) / 2`.
///
/// # Examples
/// ```
/// use randgraph_core::{SamplingStrategy, build_random_graph_fixed_edges, seeded_rng, summarize};
///
/// let mut rng = seeded_rng(Some(3));
/// let graph = build_random_graph_fixed_edges(10, 30, SamplingStrategy::Auto, &mut rng)?;
/// assert_eq!(summarize(&graph).number_edges(), 30);
/// # Ok::<(), randgraph_core::GraphError>(())
/// ```
#[instrument(
    name = "generate.fixed_edges",
    skip(rng),
    fields(resolved = field::Empty),
    err
)]
pub fn build_random_graph_fixed_edges<R: UniformSource + ?Sized>(
    vertex_count: usize,
    edge_target: usize,
    strategy: SamplingStrategy,
    rng: &mut R,
) -> Result<UndirectedGraph> {
    let max_edges = check_reachable(vertex_count, edge_target)?;
    let resolved = strategy.resolve(edge_target, max_edges);
    Span::current().record("resolved", resolved.as_str());

    info!(vertex_count, "initialising graph");
    let mut graph = UndirectedGraph::new(vertex_count);
    match resolved {
        SamplingStrategy::Shuffle => place_by_shuffle(&mut graph, edge_target, rng)?,
        SamplingStrategy::Auto | SamplingStrategy::Rejection => {
            place_by_rejection(&mut graph, edge_target, rng)?;
        }
    }
    Ok(graph)
}

pub(crate) fn check_reachable(vertex_count: usize, edge_target: usize) -> Result<u128> {
    if vertex_count < MIN_VERTICES {
        return Err(GraphError::InsufficientVertices {
            got: vertex_count,
            minimum: MIN_VERTICES,
        });
    }
    let max_edges = max_edge_count(vertex_count);
    if edge_target as u128 > max_edges {
        return Err(GraphError::EdgeTargetUnreachable {
            target: edge_target,
            max_edges,
        });
    }
    Ok(max_edges)
}

fn place_by_rejection<R: UniformSource + ?Sized>(
    graph: &mut UndirectedGraph,
    edge_target: usize,
    rng: &mut R,
) -> Result<()> {
    let vertex_count = graph.vertex_count();
    let mut placed = 0;
    while placed < edge_target {
        let v1 = rng.next_index(vertex_count);
        let v2 = rng.next_index(vertex_count);
        if v1 == v2 || !graph.add_edge(v1, v2)? {
            continue;
        }
        placed += 1;
        report_progress(placed);
    }
    Ok(())
}

fn place_by_shuffle<R: UniformSource + ?Sized>(
    graph: &mut UndirectedGraph,
    edge_target: usize,
    rng: &mut R,
) -> Result<()> {
    let vertex_count = graph.vertex_count();
    let mut candidates: Vec<(usize, usize)> = (0..vertex_count)
        .flat_map(|lower| ((lower + 1)..vertex_count).map(move |upper| (lower, upper)))
        .collect();

    // Partial Fisher-Yates: after step k the first k slots are a uniform sample.
    let total = candidates.len();
    for slot in 0..edge_target.min(total) {
        let pick = slot + rng.next_index(total - slot);
        candidates.swap(slot, pick);
    }

    for (placed, &(lower, upper)) in candidates.iter().take(edge_target).enumerate() {
        graph.add_edge(lower, upper)?;
        report_progress(placed + 1);
    }
    Ok(())
}

fn report_progress(placed: usize) {
    if placed % PROGRESS_INTERVAL == 0 {
        info!(edges = placed, "random edges created");
    }
}
