//! Small helpers shared across CLI tests.

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use tempfile::TempDir;

use super::{Cli, CliError, run_cli};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

/// Parses `args` after the binary name, writing into `output`.
pub(super) fn parse_with_output(output: &Path, args: &[&str]) -> Cli {
    let output = output.to_string_lossy().into_owned();
    let argv = ["randgraph", "--output", output.as_str()]
        .into_iter()
        .chain(args.iter().copied());
    match Cli::try_parse_from(argv) {
        Ok(cli) => cli,
        Err(err) => panic!("arguments must parse: {err}"),
    }
}

pub(super) fn output_path(dir: &TempDir) -> PathBuf {
    dir.path().join("edges.csv")
}

/// Reads an edge-list file into a set of `(lower, upper)` records.
pub(super) fn read_records(path: &Path) -> io::Result<BTreeSet<(usize, usize)>> {
    let text = fs::read_to_string(path)?;
    text.lines()
        .map(|line| {
            let parsed = line
                .split_once(',')
                .and_then(|(lower, upper)| Some((lower.parse().ok()?, upper.parse().ok()?)));
            parsed.ok_or_else(|| io::Error::other(format!("bad record `{line}`")))
        })
        .collect()
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
