//! Graph model for centrality computation.
//!
//! # Overview
//!
//! An external acquisition layer (road networks, synthetic generators, …)
//! populates a [`WeightedGraph`] through `add_node`/`add_edge`. The
//! centrality engine only reads it; experiment drivers derive reduced graphs
//! with [`remove_nodes`] and compare them with [`GraphStats`].
//!
//! ```text
//! add_node / add_edge
//!        ↓
//! WeightedGraph<N>
//!        ├─ paths::shortest_paths()          per-source Dijkstra
//!        ├─ metrics::betweenness / degree    CentralityMap
//!        └─ mutate::remove_nodes()           new owned WeightedGraph
//! ```
//!
//! ## Typical Usage
//!
//! ```rust
//! use hubrank::graph::{WeightedGraph, remove_nodes};
//!
//! let mut g = WeightedGraph::undirected();
//! g.add_edge("a", "b", 1.0)?;
//! g.add_edge("b", "c", 2.0)?;
//!
//! let without_b = remove_nodes(&g, &["b"]);
//! assert_eq!(without_b.order(), 2);
//! assert_eq!(g.order(), 3);
//! # Ok::<(), hubrank::GraphError>(())
//! ```

pub mod mutate;
pub mod stats;
pub mod weighted;

pub use mutate::remove_nodes;
pub use stats::GraphStats;
pub use weighted::{NodeId, WeightedGraph};
