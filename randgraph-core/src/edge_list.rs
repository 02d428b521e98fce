//! Plain-text edge-list codec.
//!
//! One record per line, `<lower>,<upper>\n`, decimal ids, no header and no
//! trailer. Record order follows adjacency iteration and is unspecified.

use std::io::{BufRead, Write};

use tracing::{debug, instrument};

use crate::{error::EdgeListError, graph::UndirectedGraph};

/// Writes every edge of `graph` to `writer` and returns the record count.
///
/// The writer is not flushed; wrap files in a [`std::io::BufWriter`] and
/// flush it once the call returns.
///
/// # Errors
/// Returns [`EdgeListError::Io`] when the writer fails.
///
/// # Examples
/// ```
/// use randgraph_core::{UndirectedGraph, write_edge_list};
///
/// let mut graph = UndirectedGraph::new(3);
/// graph.add_edge(2, 0)?;
/// let mut buffer = Vec::new();
/// let written = write_edge_list(&graph, &mut buffer)?;
/// assert_eq!(written, 1);
/// assert_eq!(String::from_utf8(buffer)?, "0,2\n");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(name = "edge_list.write", err, skip(graph, writer))]
pub fn write_edge_list(
    graph: &UndirectedGraph,
    mut writer: impl Write,
) -> Result<usize, EdgeListError> {
    let mut written = 0;
    for edge in graph.edges() {
        writeln!(writer, "{},{}", edge.lower(), edge.upper())?;
        written += 1;
    }
    debug!(records = written, "edge list written");
    Ok(written)
}

/// Parses an edge list into a graph with `vertex_count` vertices.
///
/// Records may list their endpoints in either order. Blank lines are
/// skipped and repeated records collapse into one edge.
///
/// # Errors
/// Returns [`EdgeListError::Malformed`] for records that are not two
/// comma-separated unsigned integers, [`EdgeListError::Graph`] for self-loops
/// or out-of-range ids, and [`EdgeListError::Io`] when reading fails.
///
/// # Examples
/// ```
/// use randgraph_core::read_edge_list;
///
/// let graph = read_edge_list(4, "0,3\n2,1\n".as_bytes())?;
/// assert!(graph.has_edge(3, 0)?);
/// assert!(graph.has_edge(1, 2)?);
/// assert_eq!(graph.edge_count(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(name = "edge_list.read", err, skip(reader))]
pub fn read_edge_list(
    vertex_count: usize,
    reader: impl BufRead,
) -> Result<UndirectedGraph, EdgeListError> {
    let mut graph = UndirectedGraph::new(vertex_count);
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let record = line.trim();
        if record.is_empty() {
            continue;
        }
        let (v1, v2) = parse_record(record).ok_or_else(|| EdgeListError::Malformed {
            line: index + 1,
            content: record.to_owned(),
        })?;
        graph.add_edge(v1, v2)?;
    }
    Ok(graph)
}

fn parse_record(record: &str) -> Option<(usize, usize)> {
    let (left, right) = record.split_once(',')?;
    Some((left.trim().parse().ok()?, right.trim().parse().ok()?))
}
