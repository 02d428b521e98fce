//! Benchmark parameter types.
//!
//! Each struct renders as a compact Criterion parameter label.

use std::fmt;

use randgraph_core::SamplingStrategy;

/// Parameters for a probability-generator benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct ProbabilityBenchParams {
    /// Number of vertices in the generated graph.
    pub vertex_count: usize,
    /// Probability of connecting each pair.
    pub probability: f64,
}

impl fmt::Display for ProbabilityBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},p={}", self.vertex_count, self.probability)
    }
}

/// Parameters for a fixed-edge-count benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct FixedEdgesBenchParams {
    /// Number of vertices in the generated graph.
    pub vertex_count: usize,
    /// Exact number of edges to place.
    pub edge_target: usize,
    /// Placement strategy under test.
    pub strategy: SamplingStrategy,
}

impl fmt::Display for FixedEdgesBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={},m={},{}",
            self.vertex_count,
            self.edge_target,
            self.strategy.as_str(),
        )
    }
}

/// Parameters for benchmarks that consume an existing graph.
#[derive(Clone, Copy, Debug)]
pub struct GraphBenchParams {
    /// Number of vertices in the fixture graph.
    pub vertex_count: usize,
    /// Number of edges in the fixture graph.
    pub edge_count: usize,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},m={}", self.vertex_count, self.edge_count)
    }
}
