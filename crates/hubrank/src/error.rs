//! Error types for graph construction, queries, and selection.
//!
//! All variants describe caller-supplied input problems. The engine is
//! deterministic and pure, so nothing here is retryable: the offending call
//! is rejected immediately and the graph is left untouched.

/// Errors surfaced by the graph model and the centrality engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// The node identifier is not present in the graph.
    ///
    /// Lookups never auto-create nodes; only `add_node`/`add_edge` insert.
    #[error("unknown node: {0}")]
    UnknownNode(String),

    /// Zero or negative edge weight, rejected at insertion time.
    ///
    /// Shortest-path counting needs every arc to strictly lengthen a path.
    #[error("edge weight must be positive, got {weight} between {from} and {to}")]
    NonPositiveWeight {
        from: String,
        to: String,
        weight: f64,
    },

    /// NaN or infinite edge weight.
    #[error("non-finite edge weight {weight} between {from} and {to}")]
    NonFiniteWeight {
        from: String,
        to: String,
        weight: f64,
    },

    /// A selection fraction outside `[0, 1]`.
    #[error("fraction must be within [0, 1], got {0}")]
    InvalidFraction(f64),

    /// A synthetic-graph or configuration parameter out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl GraphError {
    pub(crate) fn unknown<N: std::fmt::Debug>(node: &N) -> Self {
        Self::UnknownNode(format!("{node:?}"))
    }
}
