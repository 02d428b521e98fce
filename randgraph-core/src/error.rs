//! Error types for the randgraph core library.
//!
//! Defines error enums exposed by the public API and a convenient result alias.

use std::{fmt, io};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Invalid-argument failures raised by graph construction, mutation, and
/// generation.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// Vertex counts must be non-negative.
    #[error("vertex count must be non-negative (got {got})")]
    InvalidVertexCount {
        /// The rejected vertex count.
        got: i64,
    },
    /// Edges must join two distinct vertices.
    #[error("self-loops are not permitted (vertex {vertex})")]
    SelfLoop {
        /// Vertex supplied as both endpoints.
        vertex: usize,
    },
    /// A vertex id fell outside `[0, vertex_count)`.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending vertex id.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// The generator needs more vertices than were supplied.
    #[error("at least {minimum} vertices are required (got {got})")]
    InsufficientVertices {
        /// Number of vertices supplied.
        got: usize,
        /// Minimum number of vertices the generator accepts.
        minimum: usize,
    },
    /// The requested number of distinct edges exceeds the complete graph.
    #[error("cannot place {target} distinct edges; the complete graph has {max_edges}")]
    EdgeTargetUnreachable {
        /// Requested number of edges.
        target: usize,
        /// Edge count of the complete graph on the requested vertices.
        max_edges: u128,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// Vertex counts must be non-negative.
        InvalidVertexCount => InvalidVertexCount { .. } => "GRAPH_INVALID_VERTEX_COUNT",
        /// Edges must join two distinct vertices.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
        /// A vertex id fell outside the graph.
        VertexOutOfRange => VertexOutOfRange { .. } => "GRAPH_VERTEX_OUT_OF_RANGE",
        /// The generator needs more vertices than were supplied.
        InsufficientVertices => InsufficientVertices { .. } => "GRAPH_INSUFFICIENT_VERTICES",
        /// The requested number of distinct edges exceeds the complete graph.
        EdgeTargetUnreachable => EdgeTargetUnreachable { .. } => "GRAPH_EDGE_TARGET_UNREACHABLE",
    }
}

/// Failures raised while reading or writing edge lists.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum EdgeListError {
    /// The underlying reader or writer failed.
    #[error("edge list I/O failed: {0}")]
    Io(#[from] io::Error),
    /// A record did not match `<lower>,<upper>`.
    #[error("line {line} is not a valid edge record: `{content}`")]
    Malformed {
        /// One-based line number of the rejected record.
        line: usize,
        /// Raw text of the rejected record.
        content: String,
    },
    /// A parsed record described an edge the graph rejects.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

define_error_codes! {
    /// Stable codes describing [`EdgeListError`] variants.
    enum EdgeListErrorCode for EdgeListError {
        /// The underlying reader or writer failed.
        Io => Io(..) => "EDGE_LIST_IO",
        /// A record did not match `<lower>,<upper>`.
        Malformed => Malformed { .. } => "EDGE_LIST_MALFORMED",
        /// A parsed record described an edge the graph rejects.
        GraphFailure => Graph(..) => "EDGE_LIST_GRAPH_FAILURE",
    }
}

impl EdgeListError {
    /// Retrieve the inner [`GraphErrorCode`] when a record was rejected by the
    /// graph.
    #[must_use]
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Graph(error) => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphError>;
