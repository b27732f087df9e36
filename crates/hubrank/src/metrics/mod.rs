//! Node centrality metrics.
//!
//! # Overview
//!
//! - **Betweenness centrality** (`betweenness`): weighted Brandes. Which
//!   nodes lie on the most shortest paths between other nodes?
//! - **Degree centrality** (`degree`): neighbor-entry count, the cheap
//!   baseline betweenness rankings are compared against.
//!
//! # Usage
//!
//! Both metrics take a [`WeightedGraph`](crate::graph::WeightedGraph)
//! reference and return a fresh map keyed by node identifier. The maps hold
//! no reference into the graph, so it can be mutated or dropped afterwards.
//!
//! ```rust
//! use hubrank::graph::WeightedGraph;
//! use hubrank::metrics::{betweenness_centrality, degree_centrality};
//!
//! let g = WeightedGraph::from_edges(false, [(0, 1, 1.0), (1, 2, 1.0)])?;
//! let bc = betweenness_centrality(&g);
//! let dc = degree_centrality(&g);
//! assert!(bc[&1] > bc[&0]);
//! assert_eq!(dc[&1], 2);
//! # Ok::<(), hubrank::GraphError>(())
//! ```

pub mod betweenness;
pub mod degree;

pub use betweenness::{
    BetweennessRun, CentralityMap, betweenness_cancellable, betweenness_centrality,
    betweenness_with,
};
pub use degree::degree_centrality;
