//! Weighted simple graph keyed by caller-chosen node identifiers.
//!
//! # Overview
//!
//! [`WeightedGraph`] stores an adjacency relation `node → {neighbor → weight}`
//! on top of a petgraph [`StableDiGraph`]. Every stored entry is a directed
//! arc; an undirected graph keeps both `u → v` and `v → u` with the same
//! weight, so a reader never has to special-case direction.
//!
//! ## Identity
//!
//! Nodes are any `Clone + Eq + Hash + Debug` value (see [`NodeId`]). A side
//! table maps identifiers to petgraph indices. `StableDiGraph` keeps indices
//! valid across removals, so the shortest-path engine can index flat vectors
//! by `NodeIndex::index()` without a remapping pass.
//!
//! ## Policies
//!
//! - Re-adding an edge overwrites its weight (last write wins). The model is
//!   a simple graph, never a multigraph.
//! - Weights must be finite and strictly positive; violations are rejected by
//!   [`WeightedGraph::add_edge`] and the graph is left unchanged.
//! - Lookups on absent nodes fail with [`GraphError::UnknownNode`]; only
//!   `add_node`/`add_edge` insert. `remove_node` on an absent node is a no-op.

#![allow(clippy::module_name_repetitions)]

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use petgraph::visit::{EdgeRef, IntoEdgeReferences, NodeIndexable};

use crate::error::GraphError;

/// Capability required of node identifiers.
pub trait NodeId: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> NodeId for T {}

// ---------------------------------------------------------------------------
// WeightedGraph
// ---------------------------------------------------------------------------

/// A directed or undirected simple graph with positive edge weights.
#[derive(Debug, Clone)]
pub struct WeightedGraph<N: NodeId> {
    graph: StableDiGraph<N, f64>,
    node_map: HashMap<N, NodeIndex>,
    directed: bool,
}

impl<N: NodeId> WeightedGraph<N> {
    /// Create an empty graph.
    #[must_use]
    pub fn new(directed: bool) -> Self {
        Self {
            graph: StableDiGraph::default(),
            node_map: HashMap::new(),
            directed,
        }
    }

    /// Create an empty directed graph.
    #[must_use]
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Create an empty undirected graph.
    #[must_use]
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Build a graph from `(u, v, weight)` triples.
    ///
    /// # Errors
    ///
    /// Returns the first weight validation error encountered.
    pub fn from_edges<I>(directed: bool, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (N, N, f64)>,
    {
        let mut g = Self::new(directed);
        for (u, v, w) in edges {
            g.add_edge(u, v, w)?;
        }
        Ok(g)
    }

    /// Insert `node` with no neighbors. Idempotent.
    pub fn add_node(&mut self, node: N) {
        self.ensure_node(node);
    }

    /// Delete `node` and every entry referencing it.
    ///
    /// Returns `true` if the node was present.
    pub fn remove_node(&mut self, node: &N) -> bool {
        match self.node_map.remove(node) {
            Some(idx) => {
                // StableGraph drops incoming and outgoing arcs with the node.
                self.graph.remove_node(idx);
                true
            }
            None => false,
        }
    }

    /// Set the weight of `u → v` (and `v → u` when undirected), inserting
    /// missing endpoints.
    ///
    /// # Errors
    ///
    /// [`GraphError::NonFiniteWeight`] for NaN/infinite weights and
    /// [`GraphError::NonPositiveWeight`] for zero or negative weights. Nothing is
    /// inserted when validation fails.
    pub fn add_edge(&mut self, u: N, v: N, weight: f64) -> Result<(), GraphError> {
        if !weight.is_finite() {
            return Err(GraphError::NonFiniteWeight {
                from: format!("{u:?}"),
                to: format!("{v:?}"),
                weight,
            });
        }
        if weight <= 0.0 {
            return Err(GraphError::NonPositiveWeight {
                from: format!("{u:?}"),
                to: format!("{v:?}"),
                weight,
            });
        }

        let a = self.ensure_node(u);
        let b = self.ensure_node(v);
        self.graph.update_edge(a, b, weight);
        if !self.directed && a != b {
            self.graph.update_edge(b, a, weight);
        }
        Ok(())
    }

    /// Neighbor → weight mapping for `node`.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownNode`] if `node` was never added.
    pub fn neighbors(&self, node: &N) -> Result<HashMap<N, f64>, GraphError> {
        let idx = self.require(node)?;
        Ok(self
            .arcs_from(idx)
            .map(|(t, w)| (self.graph[t].clone(), w))
            .collect())
    }

    /// Weight of the stored entry `u → v`, if any.
    #[must_use]
    pub fn weight(&self, u: &N, v: &N) -> Option<f64> {
        let a = self.index_of(u)?;
        let b = self.index_of(v)?;
        self.graph.find_edge(a, b).map(|e| self.graph[e])
    }

    /// Number of neighbor entries of `node` (out-degree when directed).
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownNode`] if `node` was never added.
    pub fn degree_of(&self, node: &N) -> Result<usize, GraphError> {
        let idx = self.require(node)?;
        Ok(self.graph.edges(idx).count())
    }

    /// Whether `node` is present.
    #[must_use]
    pub fn contains(&self, node: &N) -> bool {
        self.node_map.contains_key(node)
    }

    /// All nodes, in petgraph index order.
    ///
    /// Deterministic for a given sequence of mutations, but a node added
    /// after a removal may reuse the freed slot.
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.graph.node_indices().map(move |i| &self.graph[i])
    }

    /// Lazy view of every stored entry as `(u, v, weight)`.
    ///
    /// An undirected graph yields both `(u, v, w)` and `(v, u, w)`.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N, f64)> + '_ {
        self.graph
            .edge_references()
            .map(move |e| (&self.graph[e.source()], &self.graph[e.target()], *e.weight()))
    }

    /// Whether edges are one-way.
    #[must_use]
    pub const fn is_directed(&self) -> bool {
        self.directed
    }

    /// Number of nodes.
    #[must_use]
    pub fn order(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of stored directed entries (twice the edge count for an
    /// undirected graph without self-loops).
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    // -- index-level access for the engine ----------------------------------

    pub(crate) fn index_of(&self, node: &N) -> Option<NodeIndex> {
        self.node_map.get(node).copied()
    }

    pub(crate) fn require(&self, node: &N) -> Result<NodeIndex, GraphError> {
        self.index_of(node).ok_or_else(|| GraphError::unknown(node))
    }

    /// Upper bound on `NodeIndex::index()` for flat per-node buffers.
    pub(crate) fn node_bound(&self) -> usize {
        self.graph.node_bound()
    }

    pub(crate) fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    pub(crate) fn label(&self, idx: NodeIndex) -> &N {
        &self.graph[idx]
    }

    pub(crate) fn arcs_from(&self, idx: NodeIndex) -> impl Iterator<Item = (NodeIndex, f64)> + '_ {
        self.graph.edges(idx).map(|e| (e.target(), *e.weight()))
    }

    pub(crate) fn arcs_into(&self, idx: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph
            .neighbors_directed(idx, petgraph::Direction::Incoming)
    }

    fn ensure_node(&mut self, node: N) -> NodeIndex {
        if let Some(&idx) = self.node_map.get(&node) {
            return idx;
        }
        let idx = self.graph.add_node(node.clone());
        self.node_map.insert(node, idx);
        idx
    }
}

impl<N: NodeId> Default for WeightedGraph<N> {
    fn default() -> Self {
        Self::undirected()
    }
}

/// Structural equality: same directedness, same node set, same weighted
/// entries. Internal indices and insertion order are ignored.
impl<N: NodeId> PartialEq for WeightedGraph<N> {
    fn eq(&self, other: &Self) -> bool {
        if self.directed != other.directed
            || self.order() != other.order()
            || self.entry_count() != other.entry_count()
        {
            return false;
        }
        self.edges().all(|(u, v, w)| other.weight(u, v) == Some(w))
            && self.nodes().all(|n| other.contains(n))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_node_is_idempotent() {
        let mut g = WeightedGraph::<&str>::undirected();
        g.add_node("a");
        g.add_node("a");
        assert_eq!(g.order(), 1);
        assert!(g.neighbors(&"a").map(|m| m.is_empty()).unwrap_or(false));
    }

    #[test]
    fn undirected_edge_is_stored_both_ways() {
        let mut g = WeightedGraph::undirected();
        g.add_edge("a", "b", 2.5).expect("valid weight");

        assert_eq!(g.weight(&"a", &"b"), Some(2.5));
        assert_eq!(g.weight(&"b", &"a"), Some(2.5));
        assert_eq!(g.entry_count(), 2);
        assert_eq!(g.edges().count(), 2);
    }

    #[test]
    fn directed_edge_is_one_way() {
        let mut g = WeightedGraph::directed();
        g.add_edge(1, 2, 1.0).expect("valid weight");

        assert_eq!(g.weight(&1, &2), Some(1.0));
        assert_eq!(g.weight(&2, &1), None);
        assert_eq!(g.degree_of(&2), Ok(0));
    }

    #[test]
    fn readding_edge_overwrites_weight() {
        let mut g = WeightedGraph::undirected();
        g.add_edge("a", "b", 1.0).expect("valid weight");
        g.add_edge("b", "a", 7.0).expect("valid weight");

        assert_eq!(g.entry_count(), 2, "no parallel entries");
        assert_eq!(g.weight(&"a", &"b"), Some(7.0));
        assert_eq!(g.weight(&"b", &"a"), Some(7.0));
    }

    #[test]
    fn negative_weight_rejected_without_side_effects() {
        let mut g = WeightedGraph::undirected();
        let err = g.add_edge("a", "b", -1.0).expect_err("negative weight");
        assert!(matches!(err, GraphError::NonPositiveWeight { .. }));
        assert_eq!(g.order(), 0);
    }

    #[test]
    fn non_finite_weight_rejected() {
        let mut g = WeightedGraph::<u8>::directed();
        assert!(matches!(
            g.add_edge(0, 1, f64::NAN),
            Err(GraphError::NonFiniteWeight { .. })
        ));
        assert!(matches!(
            g.add_edge(0, 1, f64::INFINITY),
            Err(GraphError::NonFiniteWeight { .. })
        ));
        assert!(g.is_empty());
    }

    #[test]
    fn zero_weight_rejected_without_side_effects() {
        let mut g = WeightedGraph::directed();
        let err = g.add_edge('x', 'y', 0.0).expect_err("zero weight");
        assert!(matches!(err, GraphError::NonPositiveWeight { .. }));
        assert!(g.is_empty());

        let err = g.add_edge('x', 'y', -0.0).expect_err("negative zero");
        assert!(matches!(err, GraphError::NonPositiveWeight { .. }));
    }

    #[test]
    fn smallest_positive_weight_accepted() {
        let mut g = WeightedGraph::directed();
        g.add_edge('x', 'y', f64::MIN_POSITIVE).expect("positive weight");
        assert_eq!(g.weight(&'x', &'y'), Some(f64::MIN_POSITIVE));
    }

    #[test]
    fn node_listing_reuses_freed_slot() {
        let mut g = WeightedGraph::undirected();
        g.add_node("a");
        g.add_node("b");
        g.add_node("c");
        g.remove_node(&"a");
        g.add_node("d");
        let listed: Vec<&str> = g.nodes().copied().collect();
        assert_eq!(listed, vec!["d", "b", "c"]);
    }

    #[test]
    fn neighbors_of_unknown_node_errors() {
        let g = WeightedGraph::<&str>::undirected();
        assert_eq!(
            g.neighbors(&"ghost"),
            Err(GraphError::UnknownNode("\"ghost\"".to_string()))
        );
    }

    #[test]
    fn remove_node_drops_incident_entries() {
        let mut g = WeightedGraph::directed();
        g.add_edge("a", "b", 1.0).expect("valid weight");
        g.add_edge("b", "c", 1.0).expect("valid weight");
        g.add_edge("c", "b", 1.0).expect("valid weight");

        assert!(g.remove_node(&"b"));
        assert!(!g.contains(&"b"));
        assert_eq!(g.entry_count(), 0);
        for n in ["a", "c"] {
            let nb = g.neighbors(&n).expect("present");
            assert!(!nb.contains_key(&"b"));
        }
    }

    #[test]
    fn remove_absent_node_is_noop() {
        let mut g = WeightedGraph::undirected();
        g.add_edge(1, 2, 1.0).expect("valid weight");
        assert!(!g.remove_node(&9));
        assert_eq!(g.order(), 2);
    }

    #[test]
    fn nodes_follow_insertion_order_after_removal() {
        let mut g = WeightedGraph::undirected();
        for n in ["a", "b", "c", "d"] {
            g.add_node(n);
        }
        g.remove_node(&"b");
        let order: Vec<_> = g.nodes().copied().collect();
        assert_eq!(order, vec!["a", "c", "d"]);
    }

    #[test]
    fn self_loop_stored_once_when_undirected() {
        let mut g = WeightedGraph::undirected();
        g.add_edge("a", "a", 1.0).expect("valid weight");
        assert_eq!(g.entry_count(), 1);
        assert_eq!(g.degree_of(&"a"), Ok(1));
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let a = WeightedGraph::from_edges(false, [(1, 2, 1.0), (2, 3, 2.0)]).expect("valid");
        let b = WeightedGraph::from_edges(false, [(3, 2, 2.0), (2, 1, 1.0)]).expect("valid");
        assert_eq!(a, b);

        let c = WeightedGraph::from_edges(false, [(1, 2, 1.0), (2, 3, 9.0)]).expect("valid");
        assert_ne!(a, c);
    }
}
