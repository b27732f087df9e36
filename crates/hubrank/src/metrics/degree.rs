//! Degree centrality: the cheap baseline ranking.
//!
//! A node's score is the number of entries in its neighbor mapping
//! (out-degree for directed graphs, degree for undirected ones). O(V), no
//! traversal.

use std::collections::HashMap;

use tracing::instrument;

use crate::graph::weighted::{NodeId, WeightedGraph};

/// Neighbor-entry count per node.
///
/// Returns an empty map for an empty graph.
#[must_use]
#[instrument(skip_all, fields(order = graph.order()))]
pub fn degree_centrality<N: NodeId>(graph: &WeightedGraph<N>) -> HashMap<N, usize> {
    graph
        .node_indices()
        .map(|idx| (graph.label(idx).clone(), graph.arcs_from(idx).count()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_graph_returns_empty() {
        let g = WeightedGraph::<u32>::undirected();
        assert!(degree_centrality(&g).is_empty());
    }

    #[test]
    fn star_center_has_highest_degree() {
        let g = WeightedGraph::from_edges(
            false,
            [("c", "a", 1.0), ("c", "b", 2.0), ("c", "d", 3.0)],
        )
        .expect("valid weights");
        let dc = degree_centrality(&g);

        assert_eq!(dc["c"], 3);
        for leaf in ["a", "b", "d"] {
            assert_eq!(dc[leaf], 1, "{leaf} is a leaf");
        }
    }

    #[test]
    fn directed_counts_out_entries_only() {
        let g = WeightedGraph::from_edges(true, [("a", "b", 1.0), ("c", "b", 1.0)])
            .expect("valid weights");
        let dc = degree_centrality(&g);

        assert_eq!(dc["a"], 1);
        assert_eq!(dc["b"], 0);
        assert_eq!(dc["c"], 1);
    }

    #[test]
    fn isolated_node_has_zero_degree() {
        let mut g = WeightedGraph::from_edges(false, [(1, 2, 1.0)]).expect("valid weights");
        g.add_node(3);
        assert_eq!(degree_centrality(&g)[&3], 0);
    }
}
