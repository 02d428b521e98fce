//! Benchmark support crate for randgraph.
//!
//! Provides parameter types and seeded fixture graphs used by the Criterion
//! benchmarks for graph generation, summarising, and edge-list output.

pub mod error;
pub mod fixture;
pub mod params;
