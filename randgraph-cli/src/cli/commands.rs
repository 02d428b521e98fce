//! Argument parsing and the generation pipeline behind the randgraph CLI.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Parser, ValueEnum};
use randgraph_core::{
    EdgeListError, GenerationMode, GeneratorBuilder, GraphError, GraphSummary, SamplingStrategy,
    UndirectedGraph, summarize, write_edge_list,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

const DEFAULT_VERTEX_COUNT: i64 = 100;
const UNSET_PROBABILITY: f64 = -1.0;
const UNSET_EDGE_COUNT: i64 = -1;
const DEFAULT_OUTPUT: &str = "results.csv";

/// Options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "randgraph",
    about = "Generate a random undirected graph and write it as an edge list.",
    allow_negative_numbers = true
)]
pub struct Cli {
    /// Number of vertices.
    #[arg(short = 'n', long = "vertex-count", default_value_t = DEFAULT_VERTEX_COUNT)]
    pub vertex_count: i64,

    /// Probability of a connection between any two vertices.
    #[arg(short = 'p', long, default_value_t = UNSET_PROBABILITY)]
    pub probability: f64,

    /// Exact number of edges; a positive value overrides `--probability`.
    #[arg(short = 'e', long = "edge-count", default_value_t = UNSET_EDGE_COUNT)]
    pub edge_count: i64,

    /// Destination file for the edge list.
    #[arg(short = 'o', long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Seed for reproducible output; omitted seeds use the wall clock.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Sampling strategy for `--edge-count` runs.
    #[arg(long, value_enum, default_value_t = StrategyArg::Auto)]
    pub strategy: StrategyArg,
}

/// Command-line spelling of [`SamplingStrategy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Rejection sampling for sparse targets, shuffling for dense ones.
    Auto,
    /// Always redraw random pairs until enough distinct edges exist.
    Rejection,
    /// Always shuffle the full candidate list.
    Shuffle,
}

impl From<StrategyArg> for SamplingStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Auto => Self::Auto,
            StrategyArg::Rejection => Self::Rejection,
            StrategyArg::Shuffle => Self::Shuffle,
        }
    }
}

/// Errors surfaced while executing the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// The output file could not be created or flushed.
    #[error("failed to write `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Configuration or generation failed.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// Serialising the edge list failed.
    #[error(transparent)]
    EdgeList(#[from] EdgeListError),
}

impl CliError {
    /// Stable code of the underlying library error, if any.
    #[must_use]
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::Io { .. } => None,
            Self::Graph(error) => Some(error.code().as_str()),
            Self::EdgeList(error) => Some(error.code().as_str()),
        }
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// File the edge list was written to.
    pub output: PathBuf,
    /// Generator that produced the graph.
    pub mode: GenerationMode,
    /// Statistics of the generated graph.
    pub summary: GraphSummary,
    /// Number of records written to `output`.
    pub records_written: usize,
}

/// Maps the sentinel-style flags onto a [`GenerationMode`].
///
/// A positive edge count selects the fixed-edge generator regardless of the
/// probability; anything else runs the probability generator, where the
/// unset probability of `-1.0` produces no edges.
///
/// # Examples
/// ```
/// use randgraph_cli::cli::generation_mode;
/// use randgraph_core::GenerationMode;
///
/// assert_eq!(generation_mode(0.3, -1), GenerationMode::Probability(0.3));
/// assert_eq!(generation_mode(0.3, 12), GenerationMode::FixedEdges(12));
/// assert_eq!(generation_mode(-1.0, 0), GenerationMode::Probability(-1.0));
/// ```
#[must_use]
pub fn generation_mode(probability: f64, edge_count: i64) -> GenerationMode {
    match usize::try_from(edge_count) {
        Ok(target) if target > 0 => GenerationMode::FixedEdges(target),
        _ => GenerationMode::Probability(probability),
    }
}

/// Builds the graph described by `cli`, summarises it, and writes it to the
/// output file.
///
/// # Errors
/// Returns [`CliError`] when validation, generation, or writing fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use clap::Parser;
/// # use randgraph_cli::cli::{Cli, run_cli};
/// # use tempfile::TempDir;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = TempDir::new()?;
/// let output = dir.path().join("edges.csv");
/// let cli = Cli::try_parse_from([
///     "randgraph", "-n", "4", "-p", "1.0", "-o", output.to_str().ok_or("utf-8")?,
/// ])?;
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.summary.number_edges(), 6);
/// assert_eq!(std::fs::read_to_string(output)?.lines().count(), 6);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(vertex_count = cli.vertex_count, mode = field::Empty, output = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let started = Instant::now();
    let mode = generation_mode(cli.probability, cli.edge_count);
    let span = Span::current();
    span.record("mode", field::display(mode));
    span.record("output", field::display(cli.output.display()));

    let generator = GeneratorBuilder::new()
        .with_vertex_count(cli.vertex_count)
        .with_mode(mode)
        .with_seed(cli.seed)
        .with_sampling_strategy(cli.strategy.into())
        .build()?;

    let phase = Instant::now();
    let graph = generator.generate()?;
    info!(elapsed = ?phase.elapsed(), "graph built");

    let phase = Instant::now();
    let summary = summarize(&graph);
    info!(
        vertices = summary.number_vertices(),
        edges = summary.number_edges(),
        elapsed = ?phase.elapsed(),
        "graph summarised"
    );

    let phase = Instant::now();
    let records_written = write_graph(&graph, &cli.output)?;
    info!(records = records_written, elapsed = ?phase.elapsed(), "graph written");

    info!(elapsed = ?started.elapsed(), "run completed");
    Ok(ExecutionSummary {
        output: cli.output,
        mode,
        summary,
        records_written,
    })
}

#[instrument(name = "cli.write_graph", err, skip(graph), fields(path = %path.display()))]
pub(super) fn write_graph(graph: &UndirectedGraph, path: &Path) -> Result<usize, CliError> {
    let io_error = |source| CliError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    let written = write_edge_list(graph, &mut writer)?;
    writer.flush().map_err(io_error)?;
    Ok(written)
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use randgraph_cli::cli::{ExecutionSummary, render_summary};
/// # use randgraph_core::{GenerationMode, GraphSummary};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary {
///     output: "results.csv".into(),
///     mode: GenerationMode::FixedEdges(30),
///     summary: GraphSummary::new(10, 30),
///     records_written: 30,
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "output: results.csv\nvertices: 10\nedges: 30\n");
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "output: {}", summary.output.display())?;
    writeln!(writer, "vertices: {}", summary.summary.number_vertices())?;
    writeln!(writer, "edges: {}", summary.summary.number_edges())?;
    Ok(())
}
