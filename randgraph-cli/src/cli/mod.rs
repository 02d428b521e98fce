//! Command-line interface for the randgraph generator.
//!
//! Parses the generation flags, runs the generator, summariser, and edge-list
//! writer in sequence, and renders the summary.

mod commands;

pub use commands::{
    Cli, CliError, ExecutionSummary, StrategyArg, generation_mode, render_summary, run_cli,
};

#[cfg(test)]
mod test_helpers;
#[cfg(test)]
mod tests;
