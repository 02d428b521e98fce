//! Random graph generators.
//!
//! Two families are provided: [`build_random_graph`] includes every vertex
//! pair independently with a fixed probability, and
//! [`build_random_graph_fixed_edges`] places an exact number of distinct
//! edges. Both draw from an injected [`UniformSource`]; [`seeded_rng`] builds
//! the default source, reseeded from the wall clock unless a seed is given.

mod builder;
mod fixed_edges;
mod probability;

use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng, rngs::SmallRng};

pub use builder::{GenerationMode, GeneratorBuilder, GraphGenerator};
pub use fixed_edges::{SamplingStrategy, build_random_graph_fixed_edges};
pub use probability::build_random_graph;

/// Source of uniformly distributed draws used by the generators.
///
/// Every [`rand::Rng`] implements this trait; tests substitute scripted
/// sequences.
pub trait UniformSource {
    /// Returns an index drawn uniformly from `0..bound`.
    ///
    /// Callers guarantee `bound > 0`.
    fn next_index(&mut self, bound: usize) -> usize;

    /// Returns a float drawn uniformly from `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl<R: Rng + ?Sized> UniformSource for R {
    fn next_index(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }

    fn next_unit(&mut self) -> f64 {
        self.r#gen::<f64>()
    }
}

/// Builds the default random source.
///
/// A `Some` seed yields a reproducible stream; `None` seeds from the current
/// wall-clock time so every call produces a different graph.
///
/// # Examples
/// ```
/// use randgraph_core::{UniformSource, seeded_rng};
///
/// let mut left = seeded_rng(Some(7));
/// let mut right = seeded_rng(Some(7));
/// assert_eq!(left.next_index(1_000), right.next_index(1_000));
/// ```
#[must_use]
pub fn seeded_rng(seed: Option<u64>) -> SmallRng {
    SmallRng::seed_from_u64(seed.unwrap_or_else(wall_clock_seed))
}

fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| {
            elapsed
                .as_secs()
                .wrapping_mul(1_000_000_000)
                .wrapping_add(u64::from(elapsed.subsec_nanos()))
        })
        .unwrap_or_default()
}
