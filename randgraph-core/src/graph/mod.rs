//! Undirected simple graph store with canonical edge storage.
//!
//! Each undirected edge is stored exactly once, under its lower-numbered
//! endpoint. Every vertex owns an adjacency set from construction onwards so
//! insertion and lookup are total over valid vertex ids.

use std::collections::{HashSet, hash_set};

use crate::error::{GraphError, Result};

/// Returns the pair `(a, b)` in ascending order.
///
/// The function is total: equal inputs are returned unchanged.
///
/// # Examples
/// ```
/// use randgraph_core::canonicalize;
///
/// assert_eq!(canonicalize(7, 3), (3, 7));
/// assert_eq!(canonicalize(3, 7), (3, 7));
/// assert_eq!(canonicalize(-2, -2), (-2, -2));
/// ```
#[must_use]
pub fn canonicalize<T: Ord>(a: T, b: T) -> (T, T) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Number of edges in the complete graph on `vertex_count` vertices.
///
/// # Examples
/// ```
/// use randgraph_core::max_edge_count;
///
/// assert_eq!(max_edge_count(0), 0);
/// assert_eq!(max_edge_count(1), 0);
/// assert_eq!(max_edge_count(10), 45);
/// ```
#[must_use]
pub const fn max_edge_count(vertex_count: usize) -> u128 {
    let n = vertex_count as u128;
    if n < 2 { 0 } else { n * (n - 1) / 2 }
}

/// Converts a signed vertex count supplied by an outer layer.
///
/// # Errors
/// Returns [`GraphError::InvalidVertexCount`] when `raw` is negative or does
/// not fit the platform's address space.
///
/// # Examples
/// ```
/// use randgraph_core::{GraphError, validate_vertex_count};
///
/// assert_eq!(validate_vertex_count(12), Ok(12));
/// assert_eq!(
///     validate_vertex_count(-1),
///     Err(GraphError::InvalidVertexCount { got: -1 }),
/// );
/// ```
pub fn validate_vertex_count(raw: i64) -> Result<usize> {
    usize::try_from(raw).map_err(|_| GraphError::InvalidVertexCount { got: raw })
}

/// A canonical undirected edge with `lower < upper`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Edge {
    lower: usize,
    upper: usize,
}

impl Edge {
    const fn from_canonical(lower: usize, upper: usize) -> Self {
        Self { lower, upper }
    }

    /// Lower-numbered endpoint.
    #[must_use]
    pub const fn lower(&self) -> usize {
        self.lower
    }

    /// Higher-numbered endpoint.
    #[must_use]
    pub const fn upper(&self) -> usize {
        self.upper
    }
}

impl From<Edge> for (usize, usize) {
    fn from(edge: Edge) -> Self {
        (edge.lower, edge.upper)
    }
}

/// Undirected simple graph over the vertices `0..vertex_count`.
///
/// Self-loops and parallel edges are impossible by construction: insertions
/// are validated and stored as `(lower, upper)` with `lower < upper`.
///
/// # Examples
/// ```
/// use randgraph_core::UndirectedGraph;
///
/// let mut graph = UndirectedGraph::new(3);
/// graph.add_edge(2, 0)?;
/// assert!(graph.has_edge(0, 2)?);
/// assert!(graph.has_edge(2, 0)?);
/// assert!(!graph.has_edge(1, 2)?);
/// assert_eq!(graph.edge_count(), 1);
/// # Ok::<(), randgraph_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UndirectedGraph {
    adjacency: Vec<HashSet<usize>>,
    edge_count: usize,
}

impl UndirectedGraph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![HashSet::new(); vertex_count],
            edge_count: 0,
        }
    }

    /// Creates a graph from a signed vertex count.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertexCount`] when `vertex_count` is
    /// negative.
    ///
    /// # Examples
    /// ```
    /// use randgraph_core::{GraphError, UndirectedGraph};
    ///
    /// assert_eq!(UndirectedGraph::try_from_signed(4)?.vertex_count(), 4);
    /// assert!(matches!(
    ///     UndirectedGraph::try_from_signed(-3),
    ///     Err(GraphError::InvalidVertexCount { got: -3 }),
    /// ));
    /// # Ok::<(), GraphError>(())
    /// ```
    pub fn try_from_signed(vertex_count: i64) -> Result<Self> {
        validate_vertex_count(vertex_count).map(Self::new)
    }

    /// Number of vertices, fixed at construction.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of distinct edges inserted so far.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Inserts the undirected edge `{v1, v2}`.
    ///
    /// Returns `true` when the edge was not present before. Inserting an
    /// existing edge is a no-op.
    ///
    /// # Errors
    /// Returns [`GraphError::SelfLoop`] when `v1 == v2` and
    /// [`GraphError::VertexOutOfRange`] when either endpoint is not a vertex
    /// of this graph.
    pub fn add_edge(&mut self, v1: usize, v2: usize) -> Result<bool> {
        let (lower, upper) = self.validate_pair(v1, v2)?;
        let Some(targets) = self.adjacency.get_mut(lower) else {
            return Err(self.out_of_range(lower));
        };
        let inserted = targets.insert(upper);
        if inserted {
            self.edge_count += 1;
        }
        Ok(inserted)
    }

    /// Reports whether the undirected edge `{v1, v2}` is present.
    ///
    /// # Errors
    /// Same validation as [`UndirectedGraph::add_edge`].
    pub fn has_edge(&self, v1: usize, v2: usize) -> Result<bool> {
        let (lower, upper) = self.validate_pair(v1, v2)?;
        self.adjacency
            .get(lower)
            .map(|targets| targets.contains(&upper))
            .ok_or_else(|| self.out_of_range(lower))
    }

    /// Iterates the upper endpoints of the edges stored under `vertex`.
    ///
    /// Iteration order is unspecified.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when `vertex` is not a vertex
    /// of this graph.
    pub fn neighbours_above(&self, vertex: usize) -> Result<hash_set::Iter<'_, usize>> {
        self.adjacency
            .get(vertex)
            .map(HashSet::iter)
            .ok_or_else(|| self.out_of_range(vertex))
    }

    /// Iterates every stored edge in canonical form.
    ///
    /// Iteration order is unspecified.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(lower, targets)| {
                targets
                    .iter()
                    .map(move |&upper| Edge::from_canonical(lower, upper))
            })
    }

    pub(crate) fn adjacency(&self) -> &[HashSet<usize>] {
        &self.adjacency
    }

    fn validate_pair(&self, v1: usize, v2: usize) -> Result<(usize, usize)> {
        if v1 == v2 {
            return Err(GraphError::SelfLoop { vertex: v1 });
        }
        for vertex in [v1, v2] {
            if vertex >= self.vertex_count() {
                return Err(self.out_of_range(vertex));
            }
        }
        Ok(canonicalize(v1, v2))
    }

    fn out_of_range(&self, vertex: usize) -> GraphError {
        GraphError::VertexOutOfRange {
            vertex,
            vertex_count: self.vertex_count(),
        }
    }
}
