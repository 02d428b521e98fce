//! Validated generator configuration.
//!
//! [`GeneratorBuilder`] collects the same knobs the command line exposes and
//! checks them once, so [`GraphGenerator::generate`] only fails for reasons
//! the graph store itself reports.

use std::fmt;

use tracing::{Span, field, instrument};

use crate::{
    Result,
    graph::{UndirectedGraph, validate_vertex_count},
};

use super::{
    UniformSource, build_random_graph, build_random_graph_fixed_edges,
    fixed_edges::{SamplingStrategy, check_reachable},
    seeded_rng,
};

const DEFAULT_VERTEX_COUNT: i64 = 100;

/// Which generator a [`GraphGenerator`] runs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GenerationMode {
    /// Include each vertex pair independently with this probability.
    Probability(f64),
    /// Place exactly this many distinct edges.
    FixedEdges(usize),
}

impl Default for GenerationMode {
    fn default() -> Self {
        Self::Probability(0.0)
    }
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Probability(probability) => write!(f, "probability={probability}"),
            Self::FixedEdges(target) => write!(f, "edges={target}"),
        }
    }
}

/// Configures and constructs [`GraphGenerator`] instances.
///
/// # Examples
/// ```
/// use randgraph_core::{GenerationMode, GeneratorBuilder};
///
/// let generator = GeneratorBuilder::new()
///     .with_vertex_count(10)
///     .with_mode(GenerationMode::FixedEdges(30))
///     .with_seed(Some(42))
///     .build()?;
/// let graph = generator.generate()?;
/// assert_eq!(graph.edge_count(), 30);
/// # Ok::<(), randgraph_core::GraphError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GeneratorBuilder {
    vertex_count: i64,
    mode: GenerationMode,
    seed: Option<u64>,
    strategy: SamplingStrategy,
}

impl Default for GeneratorBuilder {
    fn default() -> Self {
        Self {
            vertex_count: DEFAULT_VERTEX_COUNT,
            mode: GenerationMode::default(),
            seed: None,
            strategy: SamplingStrategy::default(),
        }
    }
}

impl GeneratorBuilder {
    /// Creates a builder for 100 vertices and no edges.
    ///
    /// # Examples
    /// ```
    /// use randgraph_core::{GenerationMode, GeneratorBuilder};
    ///
    /// let builder = GeneratorBuilder::new();
    /// assert_eq!(builder.vertex_count(), 100);
    /// assert_eq!(builder.mode(), GenerationMode::Probability(0.0));
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the vertex count. Negative values are rejected by
    /// [`GeneratorBuilder::build`].
    #[must_use]
    pub const fn with_vertex_count(mut self, vertex_count: i64) -> Self {
        self.vertex_count = vertex_count;
        self
    }

    /// Returns the configured vertex count.
    #[must_use]
    pub const fn vertex_count(&self) -> i64 {
        self.vertex_count
    }

    /// Selects the generator.
    #[must_use]
    pub const fn with_mode(mut self, mode: GenerationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Returns the configured generator.
    #[must_use]
    pub const fn mode(&self) -> GenerationMode {
        self.mode
    }

    /// Fixes the random seed; `None` reseeds from the wall clock on every
    /// [`GraphGenerator::generate`] call.
    #[must_use]
    pub const fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Selects how fixed-edge targets are sampled.
    ///
    /// # Examples
    /// ```
    /// use randgraph_core::{GeneratorBuilder, SamplingStrategy};
    ///
    /// let builder = GeneratorBuilder::new().with_sampling_strategy(SamplingStrategy::Shuffle);
    /// assert_eq!(builder.sampling_strategy(), SamplingStrategy::Shuffle);
    /// ```
    #[must_use]
    pub const fn with_sampling_strategy(mut self, strategy: SamplingStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Returns the configured sampling strategy.
    #[must_use]
    pub const fn sampling_strategy(&self) -> SamplingStrategy {
        self.strategy
    }

    /// Validates the configuration and constructs a [`GraphGenerator`].
    ///
    /// # Errors
    /// Returns [`crate::GraphError::InvalidVertexCount`] for a negative vertex
    /// count. Fixed-edge modes additionally fail with
    /// [`crate::GraphError::InsufficientVertices`] or
    /// [`crate::GraphError::EdgeTargetUnreachable`].
    ///
    /// # Examples
    /// ```
    /// use randgraph_core::{GenerationMode, GeneratorBuilder, GraphError};
    ///
    /// let err = GeneratorBuilder::new()
    ///     .with_vertex_count(4)
    ///     .with_mode(GenerationMode::FixedEdges(7))
    ///     .build()
    ///     .unwrap_err();
    /// assert!(matches!(err, GraphError::EdgeTargetUnreachable { target: 7, max_edges: 6 }));
    /// ```
    pub fn build(self) -> Result<GraphGenerator> {
        let vertex_count = validate_vertex_count(self.vertex_count)?;
        if let GenerationMode::FixedEdges(target) = self.mode {
            check_reachable(vertex_count, target)?;
        }
        Ok(GraphGenerator {
            vertex_count,
            mode: self.mode,
            seed: self.seed,
            strategy: self.strategy,
        })
    }
}

/// A validated generator configuration.
#[derive(Debug, Clone)]
pub struct GraphGenerator {
    vertex_count: usize,
    mode: GenerationMode,
    seed: Option<u64>,
    strategy: SamplingStrategy,
}

impl GraphGenerator {
    /// Number of vertices every generated graph has.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// The generator this configuration runs.
    #[must_use]
    pub const fn mode(&self) -> GenerationMode {
        self.mode
    }

    /// The fixed seed, if any.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Generates a graph using a source seeded per call.
    ///
    /// # Errors
    /// Propagates failures from the selected generator.
    pub fn generate(&self) -> Result<UndirectedGraph> {
        let mut rng = seeded_rng(self.seed);
        self.generate_with(&mut rng)
    }

    /// Generates a graph drawing from `rng`.
    ///
    /// # Errors
    /// Propagates failures from the selected generator.
    #[instrument(
        name = "graph.generate",
        err,
        skip(self, rng),
        fields(vertex_count = self.vertex_count, mode = field::Empty),
    )]
    pub fn generate_with<R: UniformSource + ?Sized>(&self, rng: &mut R) -> Result<UndirectedGraph> {
        Span::current().record("mode", field::display(self.mode));
        match self.mode {
            GenerationMode::Probability(probability) => {
                build_random_graph(self.vertex_count, probability, rng)
            }
            GenerationMode::FixedEdges(target) => {
                build_random_graph_fixed_edges(self.vertex_count, target, self.strategy, rng)
            }
        }
    }
}
