//! Summary statistics for a weighted graph.
//!
//! # Statistics Provided
//!
//! - **node_count**: Number of nodes.
//! - **edge_count**: Number of stored directed entries. An undirected edge
//!   counts twice (once per direction), a self-loop once.
//! - **density**: `edge_count / (node_count * (node_count - 1))`. Zero for
//!   graphs with fewer than two nodes.
//! - **isolated_node_count**: Nodes with no incoming and no outgoing entries.
//! - **max_degree**: Largest number of neighbor entries on one node.
//! - **component_count**: Weakly connected components (direction ignored).
//!
//! Comparing the stats of a graph before and after
//! [`remove_nodes`](super::mutate::remove_nodes) shows how much a removal
//! fragmented it.

use petgraph::unionfind::UnionFind;

use super::weighted::{NodeId, WeightedGraph};

/// Summary statistics for a [`WeightedGraph`].
#[derive(Debug, Clone, PartialEq)]
pub struct GraphStats {
    /// Number of nodes.
    pub node_count: usize,
    /// Number of stored directed entries.
    pub edge_count: usize,
    /// `edge_count / (node_count * (node_count - 1))`, or 0.0 below 2 nodes.
    pub density: f64,
    /// Nodes with no entries in either direction.
    pub isolated_node_count: usize,
    /// Largest neighbor-entry count over all nodes.
    pub max_degree: usize,
    /// Number of weakly connected components.
    pub component_count: usize,
}

impl GraphStats {
    /// Compute statistics for `graph`.
    #[must_use]
    pub fn from_graph<N: NodeId>(graph: &WeightedGraph<N>) -> Self {
        let node_count = graph.order();
        let edge_count = graph.entry_count();

        let isolated_node_count = graph
            .node_indices()
            .filter(|&idx| {
                graph.arcs_from(idx).next().is_none() && graph.arcs_into(idx).next().is_none()
            })
            .count();

        let max_degree = graph
            .node_indices()
            .map(|idx| graph.arcs_from(idx).count())
            .max()
            .unwrap_or(0);

        Self {
            node_count,
            edge_count,
            density: compute_density(node_count, edge_count),
            isolated_node_count,
            max_degree,
            component_count: weak_components(graph),
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn compute_density(node_count: usize, edge_count: usize) -> f64 {
    if node_count < 2 {
        return 0.0;
    }
    edge_count as f64 / (node_count * (node_count - 1)) as f64
}

fn weak_components<N: NodeId>(graph: &WeightedGraph<N>) -> usize {
    let mut uf = UnionFind::<usize>::new(graph.node_bound());
    for idx in graph.node_indices() {
        for (t, _) in graph.arcs_from(idx) {
            uf.union(idx.index(), t.index());
        }
    }

    let mut roots: Vec<usize> = graph.node_indices().map(|i| uf.find(i.index())).collect();
    roots.sort_unstable();
    roots.dedup();
    roots.len()
}
