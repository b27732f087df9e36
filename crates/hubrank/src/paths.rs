//! Single-source weighted shortest paths with path counting.
//!
//! # Algorithm
//!
//! Dijkstra's algorithm with a lazy-deletion binary heap, extended the way
//! Brandes (2001) needs it:
//!
//! 1. Push `(source, 0)`; `sigma(source) = 1`.
//! 2. Pop the minimum entry `(u, d)`. If `d` exceeds the best distance
//!    recorded for `u`, the entry is stale (a shorter path was found after it
//!    was pushed) and is dropped. The heap has no decrease-key, so stale
//!    duplicates are expected, not an error.
//! 3. Otherwise settle `u` (at most once) and relax each arc `u → v` with
//!    `alt = d + w`:
//!    - `alt < dist(v)`: new best. Predecessors become `{u}`,
//!      `sigma(v) = sigma(u)`, push `(v, alt)`.
//!    - `alt == dist(v)`: tie. Add `u` to the predecessors and
//!      `sigma(v) += sigma(u)`. No push, the distance did not change.
//!    - `alt > dist(v)`: ignored.
//!
//! Ties use exact equality on `f64`. Nodes never settled are unreached:
//! no distance, `sigma = 0`, absent from the finish order.
//!
//! Self-loops are skipped during relaxation; they never lie on a shortest
//! path.
//!
//! Complexity: O((V + E) log V) per source.
//!
//! # Precondition
//!
//! Weights are strictly positive. [`WeightedGraph::add_edge`] enforces this,
//! so every graph reaching this module satisfies it. Settled nodes are never
//! relaxed again, so the source keeps `sigma = 1` and no predecessors.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use fixedbitset::FixedBitSet;
use petgraph::stable_graph::NodeIndex;
use tracing::{instrument, trace};

use crate::error::GraphError;
use crate::graph::weighted::{NodeId, WeightedGraph};

// ---------------------------------------------------------------------------
// Heap entry
// ---------------------------------------------------------------------------

/// Tentative distance to a node. Ordered so that `BinaryHeap` pops the
/// smallest distance first; ties break on node index for determinism.
#[derive(Debug, Clone, Copy)]
struct Tentative {
    dist: f64,
    node: NodeIndex,
}

impl PartialEq for Tentative {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Tentative {}

impl PartialOrd for Tentative {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tentative {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .dist
            .total_cmp(&self.dist)
            .then_with(|| other.node.cmp(&self.node))
    }
}

// ---------------------------------------------------------------------------
// Index-level run state
// ---------------------------------------------------------------------------

/// Per-source buffers, indexed by `NodeIndex::index()`.
///
/// One instance is reused across sources by the betweenness accumulator;
/// [`SourceRun::run`] clears only what the previous run touched.
#[derive(Debug)]
pub(crate) struct SourceRun {
    pub(crate) dist: Vec<Option<f64>>,
    pub(crate) sigma: Vec<f64>,
    pub(crate) preds: Vec<Vec<NodeIndex>>,
    /// Settled nodes by non-decreasing distance.
    pub(crate) order: Vec<NodeIndex>,
    settled: FixedBitSet,
    heap: BinaryHeap<Tentative>,
    touched: Vec<NodeIndex>,
}

impl SourceRun {
    pub(crate) fn new(bound: usize) -> Self {
        Self {
            dist: vec![None; bound],
            sigma: vec![0.0; bound],
            preds: vec![Vec::new(); bound],
            order: Vec::with_capacity(bound),
            settled: FixedBitSet::with_capacity(bound),
            heap: BinaryHeap::new(),
            touched: Vec::with_capacity(bound),
        }
    }

    fn reset(&mut self) {
        for idx in self.touched.drain(..) {
            let i = idx.index();
            self.dist[i] = None;
            self.sigma[i] = 0.0;
            self.preds[i].clear();
        }
        self.order.clear();
        self.settled.clear();
        self.heap.clear();
    }

    /// Run Dijkstra from `source`, overwriting the previous run.
    #[allow(clippy::float_cmp)] // exact ties are the path-counting contract
    pub(crate) fn run<N: NodeId>(&mut self, graph: &WeightedGraph<N>, source: NodeIndex) {
        self.reset();

        let s = source.index();
        self.dist[s] = Some(0.0);
        self.sigma[s] = 1.0;
        self.touched.push(source);
        self.heap.push(Tentative {
            dist: 0.0,
            node: source,
        });

        let mut stale = 0usize;

        while let Some(Tentative { dist: d, node: u }) = self.heap.pop() {
            let ui = u.index();

            // Stale entry: superseded by a shorter distance pushed later.
            if self.dist[ui].is_some_and(|best| d > best) {
                stale += 1;
                continue;
            }
            if self.settled.put(ui) {
                continue;
            }
            self.order.push(u);

            let sigma_u = self.sigma[ui];
            for (v, w) in graph.arcs_from(u) {
                let vi = v.index();
                if v == u || self.settled[vi] {
                    continue;
                }
                let alt = d + w;
                let current = self.dist[vi];

                match current {
                    Some(cur) if alt > cur => {}
                    Some(cur) if alt == cur => {
                        self.preds[vi].push(u);
                        self.sigma[vi] += sigma_u;
                    }
                    _ => {
                        if current.is_none() {
                            self.touched.push(v);
                        }
                        self.dist[vi] = Some(alt);
                        self.preds[vi].clear();
                        self.preds[vi].push(u);
                        self.sigma[vi] = sigma_u;
                        self.heap.push(Tentative { dist: alt, node: v });
                    }
                }
            }
        }

        trace!(
            source = s,
            settled = self.order.len(),
            stale,
            "dijkstra run complete"
        );
    }
}

// ---------------------------------------------------------------------------
// Public result
// ---------------------------------------------------------------------------

/// Shortest-path data from one source, keyed by node identifier.
///
/// Holds no reference into the graph it was computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths<N: NodeId> {
    source: N,
    distance: HashMap<N, f64>,
    sigma: HashMap<N, f64>,
    predecessors: HashMap<N, Vec<N>>,
    finish_order: Vec<N>,
}

impl<N: NodeId> ShortestPaths<N> {
    /// The source node.
    #[must_use]
    pub const fn source(&self) -> &N {
        &self.source
    }

    /// Shortest distance to `node`, or `None` when unreached.
    #[must_use]
    pub fn distance(&self, node: &N) -> Option<f64> {
        self.distance.get(node).copied()
    }

    /// Number of distinct shortest paths to `node` (0 when unreached).
    ///
    /// Counted in `f64`; exact up to 2^53 paths.
    #[must_use]
    pub fn sigma(&self, node: &N) -> f64 {
        self.sigma.get(node).copied().unwrap_or(0.0)
    }

    /// Immediate predecessors of `node` on its shortest paths, in the order
    /// they were discovered. Empty for the source and for unreached nodes.
    #[must_use]
    pub fn predecessors(&self, node: &N) -> &[N] {
        self.predecessors.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Nodes in the order they were settled (non-decreasing distance).
    #[must_use]
    pub fn finish_order(&self) -> &[N] {
        &self.finish_order
    }

    /// Whether `node` was reached from the source.
    #[must_use]
    pub fn is_reached(&self, node: &N) -> bool {
        self.distance.contains_key(node)
    }

    /// Number of reached nodes, the source included.
    #[must_use]
    pub fn reached_count(&self) -> usize {
        self.finish_order.len()
    }

    /// One shortest path from the source to `target`, following the first
    /// recorded predecessor at each step. `None` when unreached.
    #[must_use]
    pub fn path_to(&self, target: &N) -> Option<Vec<N>> {
        if !self.is_reached(target) {
            return None;
        }
        let mut path = vec![target.clone()];
        let mut cur = target;
        while let Some(prev) = self.predecessors(cur).first() {
            path.push(prev.clone());
            cur = prev;
        }
        path.reverse();
        Some(path)
    }
}

/// Compute shortest paths, path counts, and predecessor sets from `source`.
///
/// # Errors
///
/// [`GraphError::UnknownNode`] if `source` is not in `graph`.
#[instrument(skip_all, fields(order = graph.order()))]
pub fn shortest_paths<N: NodeId>(
    graph: &WeightedGraph<N>,
    source: &N,
) -> Result<ShortestPaths<N>, GraphError> {
    let s = graph.require(source)?;
    let mut run = SourceRun::new(graph.node_bound());
    run.run(graph, s);

    let mut distance = HashMap::with_capacity(run.order.len());
    let mut sigma = HashMap::with_capacity(run.order.len());
    let mut predecessors = HashMap::with_capacity(run.order.len());

    for &idx in &run.order {
        let i = idx.index();
        let label = graph.label(idx).clone();
        if let Some(d) = run.dist[i] {
            distance.insert(label.clone(), d);
        }
        sigma.insert(label.clone(), run.sigma[i]);
        let preds: Vec<N> = run.preds[i].iter().map(|&p| graph.label(p).clone()).collect();
        predecessors.insert(label, preds);
    }

    Ok(ShortestPaths {
        source: source.clone(),
        distance,
        sigma,
        predecessors,
        finish_order: run.order.iter().map(|&i| graph.label(i).clone()).collect(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
