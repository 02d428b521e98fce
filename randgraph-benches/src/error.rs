//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of using
//! `.expect()`.

use randgraph_core::{EdgeListError, GraphError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Validating or generating a fixture graph failed.
    #[error("graph generation failed: {0}")]
    Graph(#[from] GraphError),
    /// Serialising a fixture graph failed.
    #[error("edge list serialisation failed: {0}")]
    EdgeList(#[from] EdgeListError),
    /// A probability outside `[0, 1]` was requested for a fixture.
    #[error("fixture probability {probability} must lie within [0, 1]")]
    ProbabilityOutOfRange {
        /// The rejected probability.
        probability: f64,
    },
}
