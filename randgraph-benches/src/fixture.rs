//! Seeded fixture graphs shared by the benchmarks.

use rand::{SeedableRng, rngs::SmallRng};
use randgraph_core::{UndirectedGraph, build_random_graph};

use crate::error::BenchSetupError;

/// Seed used for every fixture so benchmark inputs stay stable across runs.
pub const FIXTURE_SEED: u64 = 42;

/// Builds a reproducible graph by connecting each pair with `probability`.
///
/// # Errors
/// Returns [`BenchSetupError::ProbabilityOutOfRange`] when `probability`
/// lies outside `[0, 1]`, or [`BenchSetupError::Graph`] if generation fails.
///
/// # Examples
/// ```
/// use randgraph_benches::fixture::probability_fixture;
///
/// let graph = probability_fixture(6, 1.0)?;
/// assert_eq!(graph.edge_count(), 15);
/// # Ok::<(), randgraph_benches::error::BenchSetupError>(())
/// ```
pub fn probability_fixture(
    vertex_count: usize,
    probability: f64,
) -> Result<UndirectedGraph, BenchSetupError> {
    if !(0.0..=1.0).contains(&probability) {
        return Err(BenchSetupError::ProbabilityOutOfRange { probability });
    }
    let mut rng = SmallRng::seed_from_u64(FIXTURE_SEED);
    Ok(build_random_graph(vertex_count, probability, &mut rng)?)
}
