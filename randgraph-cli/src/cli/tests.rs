//! Unit tests for flag parsing and the generation pipeline.

use super::commands::write_graph;
use super::test_helpers::{
    output_path, parse_with_output, read_records, run_cli_expecting_error, temp_dir,
};
use super::{Cli, CliError, ExecutionSummary, StrategyArg, generation_mode, render_summary, run_cli};

use std::path::PathBuf;

use clap::Parser;
use randgraph_core::{
    EdgeListError, GenerationMode, GraphError, GraphSummary, SamplingStrategy, UndirectedGraph,
};
use rstest::rstest;
use tracing_subscriber::layer::SubscriberExt;

use randgraph_test_support::tracing::RecordingLayer;

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[test]
fn defaults_match_documented_flags() -> TestResult {
    let cli = Cli::try_parse_from(["randgraph"])?;
    assert_eq!(cli.vertex_count, 100);
    assert!((cli.probability - -1.0).abs() < f64::EPSILON);
    assert_eq!(cli.edge_count, -1);
    assert_eq!(cli.output, PathBuf::from("results.csv"));
    assert_eq!(cli.seed, None);
    assert_eq!(cli.strategy, StrategyArg::Auto);
    Ok(())
}

#[test]
fn short_flags_and_negative_values_parse() -> TestResult {
    let cli = Cli::try_parse_from([
        "randgraph", "-n", "-3", "-p", "-0.5", "-e", "-7", "-o", "out.csv",
    ])?;
    assert_eq!(cli.vertex_count, -3);
    assert!((cli.probability - -0.5).abs() < f64::EPSILON);
    assert_eq!(cli.edge_count, -7);
    assert_eq!(cli.output, PathBuf::from("out.csv"));
    Ok(())
}

#[rstest]
#[case("auto", StrategyArg::Auto, SamplingStrategy::Auto)]
#[case("rejection", StrategyArg::Rejection, SamplingStrategy::Rejection)]
#[case("shuffle", StrategyArg::Shuffle, SamplingStrategy::Shuffle)]
fn strategy_flag_maps_to_sampling_strategy(
    #[case] raw: &str,
    #[case] expected_arg: StrategyArg,
    #[case] expected: SamplingStrategy,
) -> TestResult {
    let cli = Cli::try_parse_from(["randgraph", "--strategy", raw])?;
    assert_eq!(cli.strategy, expected_arg);
    assert_eq!(SamplingStrategy::from(cli.strategy), expected);
    Ok(())
}

#[test]
fn clap_rejects_unknown_strategy() {
    assert!(Cli::try_parse_from(["randgraph", "--strategy", "greedy"]).is_err());
}

#[rstest]
#[case::unset_edge_count(0.25, -1, GenerationMode::Probability(0.25))]
#[case::zero_edge_count(0.25, 0, GenerationMode::Probability(0.25))]
#[case::positive_edge_count(0.25, 30, GenerationMode::FixedEdges(30))]
#[case::edge_count_overrides_unset_probability(-1.0, 5, GenerationMode::FixedEdges(5))]
fn generation_mode_honours_sentinels(
    #[case] probability: f64,
    #[case] edge_count: i64,
    #[case] expected: GenerationMode,
) {
    assert_eq!(generation_mode(probability, edge_count), expected);
}

#[rstest]
#[case::complete(&["-n", "5", "-p", "1.0"], GraphSummary::new(5, 10))]
#[case::unset_probability(&["-n", "5"], GraphSummary::new(0, 0))]
#[case::fixed_edges(&["-n", "10", "-e", "30", "--seed", "3"], GraphSummary::new(10, 30))]
#[case::fixed_edges_shuffle(&["-n", "6", "-e", "15", "--strategy", "shuffle"], GraphSummary::new(6, 15))]
fn run_cli_writes_summary_and_edge_list(
    #[case] args: &[&str],
    #[case] expected: GraphSummary,
) -> TestResult {
    let dir = temp_dir();
    let path = output_path(&dir);
    let summary = run_cli(parse_with_output(&path, args))?;

    assert_eq!(summary.summary, expected);
    assert_eq!(summary.records_written, expected.number_edges());
    assert_eq!(summary.output, path);

    let records = read_records(&path)?;
    assert_eq!(records.len(), expected.number_edges());
    assert!(records.iter().all(|&(lower, upper)| lower < upper));
    Ok(())
}

#[test]
fn fixed_edge_count_wins_over_probability() -> TestResult {
    let dir = temp_dir();
    let path = output_path(&dir);
    let summary = run_cli(parse_with_output(&path, &["-n", "8", "-p", "1.0", "-e", "3"]))?;
    assert_eq!(summary.mode, GenerationMode::FixedEdges(3));
    assert_eq!(summary.summary.number_edges(), 3);
    Ok(())
}

#[test]
fn seeded_runs_write_identical_edge_sets() -> TestResult {
    let dir = temp_dir();
    let first = dir.path().join("first.csv");
    let second = dir.path().join("second.csv");
    let args = ["-n", "40", "-p", "0.2", "--seed", "77"];
    run_cli(parse_with_output(&first, &args))?;
    run_cli(parse_with_output(&second, &args))?;
    assert_eq!(read_records(&first)?, read_records(&second)?);
    Ok(())
}

#[rstest]
#[case::negative_vertices(&["-n", "-1"], GraphError::InvalidVertexCount { got: -1 })]
#[case::too_few_vertices(&["-n", "1", "-e", "1"], GraphError::InsufficientVertices { got: 1, minimum: 2 })]
#[case::unreachable(&["-n", "4", "-e", "7"], GraphError::EdgeTargetUnreachable { target: 7, max_edges: 6 })]
fn run_cli_rejects_invalid_configuration(#[case] args: &[&str], #[case] expected: GraphError) {
    let dir = temp_dir();
    let cli = parse_with_output(&output_path(&dir), args);
    let err = run_cli_expecting_error(cli, "invalid configuration must fail");
    assert_eq!(err.code(), Some(expected.code().as_str()));
    assert!(matches!(err, CliError::Graph(inner) if inner == expected));
    assert!(!output_path(&dir).exists(), "no output on failure");
}

#[test]
fn unwritable_output_is_an_io_error() {
    let dir = temp_dir();
    let path = dir.path().join("missing").join("edges.csv");
    let cli = parse_with_output(&path, &["-n", "3", "-p", "1.0"]);
    let err = run_cli_expecting_error(cli, "missing parent directory must fail");
    match err {
        CliError::Io { path: failed, .. } => assert_eq!(failed, path),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn edge_list_errors_expose_their_code() {
    let err = CliError::from(EdgeListError::Malformed {
        line: 1,
        content: "x".to_owned(),
    });
    assert_eq!(err.code(), Some("EDGE_LIST_MALFORMED"));
}

#[test]
fn write_graph_emits_one_record_per_edge() -> TestResult {
    let dir = temp_dir();
    let path = output_path(&dir);
    let mut graph = UndirectedGraph::new(4);
    graph.add_edge(3, 0)?;
    graph.add_edge(1, 2)?;
    assert_eq!(write_graph(&graph, &path)?, 2);
    assert_eq!(
        read_records(&path)?,
        [(0, 3), (1, 2)].into_iter().collect()
    );
    Ok(())
}

#[test]
fn render_summary_lists_output_and_counts() -> TestResult {
    let summary = ExecutionSummary {
        output: PathBuf::from("graph.csv"),
        mode: GenerationMode::Probability(0.5),
        summary: GraphSummary::new(7, 12),
        records_written: 12,
    };
    let mut buffer = Vec::new();
    render_summary(&summary, &mut buffer)?;
    let text = String::from_utf8(buffer)?;
    assert_eq!(text, "output: graph.csv\nvertices: 7\nedges: 12\n");
    Ok(())
}

#[test]
fn run_cli_emits_tracing_fields() -> TestResult {
    let dir = temp_dir();
    let path = output_path(&dir);
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let cli = parse_with_output(&path, &["-n", "10", "-e", "30", "--seed", "1"]);

    let summary = tracing::subscriber::with_default(subscriber, || run_cli(cli))?;
    assert_eq!(summary.summary.number_edges(), 30);

    let run = layer.span_named("cli.run").ok_or("cli.run span must exist")?;
    assert_eq!(run.field("vertex_count"), Some("10"));
    assert_eq!(run.field("mode"), Some("edges=30"));
    assert!(run.field("output").is_some_and(|value| value.ends_with("edges.csv")));

    let write = layer
        .span_named("cli.write_graph")
        .ok_or("cli.write_graph span must exist")?;
    assert!(write.field("path").is_some_and(|value| value.ends_with("edges.csv")));

    for message in ["graph built", "graph summarised", "graph written", "run completed"] {
        let events = layer.events_with_message(message);
        assert_eq!(events.len(), 1, "expected one `{message}` event");
        assert!(events.iter().all(|event| event.field("elapsed").is_some()));
    }
    let summarised = layer.events_with_message("graph summarised");
    assert_eq!(summarised.first().and_then(|event| event.field("edges")), Some("30"));
    Ok(())
}

#[test]
fn failed_write_records_path_on_span() {
    let dir = temp_dir();
    let path = dir.path().join("absent").join("edges.csv");
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let cli = parse_with_output(&path, &["-n", "2", "-p", "1.0"]);

    let result = tracing::subscriber::with_default(subscriber, || run_cli(cli));
    assert!(matches!(result, Err(CliError::Io { .. })));

    let write = layer
        .span_named("cli.write_graph")
        .expect("write span must exist");
    assert!(write.field("path").is_some_and(|value| value.contains("absent")));
}
