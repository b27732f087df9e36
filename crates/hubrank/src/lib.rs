#![forbid(unsafe_code)]
//! hubrank library.
//!
//! Weighted graph model plus a Dijkstra-based Brandes engine that ranks
//! "hub" nodes by betweenness (and by degree as a baseline) so they can be
//! removed before network-resilience experiments.
//!
//! # Conventions
//!
//! - **Errors**: typed [`GraphError`] for graph and engine operations;
//!   `anyhow::Result` only for configuration loading.
//! - **Logging**: `tracing` macros and `#[instrument]`; the library never
//!   installs a subscriber.
//!
//! # Modules
//!
//! - [`graph`]: `WeightedGraph`, copy-on-write `remove_nodes`, `GraphStats`
//! - [`paths`]: single-source shortest paths with path counting
//! - [`metrics`]: betweenness and degree centrality
//! - [`select`]: top-k / top-fraction / mixed / random node selection
//! - [`synth`]: seeded synthetic graph families
//! - [`config`]: TOML-backed engine settings

pub mod config;
pub mod error;
pub mod graph;
pub mod metrics;
pub mod paths;
pub mod select;
pub mod synth;

pub use config::{CentralityConfig, EngineConfig, SelectionConfig};
pub use error::GraphError;
pub use graph::{GraphStats, NodeId, WeightedGraph, remove_nodes};
pub use metrics::{CentralityMap, betweenness_centrality, degree_centrality};
pub use paths::{ShortestPaths, shortest_paths};
