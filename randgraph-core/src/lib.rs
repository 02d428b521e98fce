//! randgraph core library.
//!
//! Builds synthetic undirected graphs for tests and benchmarks, summarises
//! them, and serialises them as edge lists.
//!
//! ```
//! use randgraph_core::{GenerationMode, GeneratorBuilder, summarize, write_edge_list};
//!
//! let graph = GeneratorBuilder::new()
//!     .with_vertex_count(6)
//!     .with_mode(GenerationMode::Probability(1.0))
//!     .build()?
//!     .generate()?;
//! let summary = summarize(&graph);
//! assert_eq!(summary.number_edges(), 15);
//! assert_eq!(summary.number_vertices(), 6);
//!
//! let mut out = Vec::new();
//! assert_eq!(write_edge_list(&graph, &mut out)?, 15);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod edge_list;
mod error;
mod generate;
mod graph;
mod summary;
#[cfg(test)]
mod test_utils;

pub use crate::{
    edge_list::{read_edge_list, write_edge_list},
    error::{EdgeListError, EdgeListErrorCode, GraphError, GraphErrorCode, Result},
    generate::{
        GenerationMode, GeneratorBuilder, GraphGenerator, SamplingStrategy, UniformSource,
        build_random_graph, build_random_graph_fixed_edges, seeded_rng,
    },
    graph::{Edge, UndirectedGraph, canonicalize, max_edge_count, validate_vertex_count},
    summary::{GraphSummary, summarize},
};
