//! Weighted betweenness centrality via Brandes' algorithm.
//!
//! # Overview
//!
//! Betweenness centrality measures how often a node lies on shortest paths
//! between other pairs of nodes. High-betweenness nodes are the "hubs" whose
//! removal fragments a network, which is why experiments rank by it.
//!
//! # Algorithm
//!
//! Brandes (2001), weighted variant:
//!
//! 1. For each source `s`, run Dijkstra ([`crate::paths`]) to get distances,
//!    path counts `sigma`, predecessor sets, and the finish order.
//! 2. Walk the finish order backwards (farthest first). For node `w` and each
//!    predecessor `v`: `delta(v) += (sigma(v) / sigma(w)) * (1 + delta(w))`.
//!    Every successor is finalized before it feeds its predecessors.
//! 3. Add `delta(w)` into the global score of `w` unless `w == s`.
//!
//! Complexity: O(V (V + E) log V).
//!
//! # Output
//!
//! Scores are summed over ordered pairs `(s, t)` and are **not** normalized
//! by default: an undirected edge pair is counted in both directions. Set
//! [`CentralityConfig::normalized`] to scale by `1 / ((n - 1)(n - 2))`.
//!
//! # Parallelism
//!
//! Sources are independent: each run reads the graph and writes private
//! buffers. With [`CentralityConfig::parallel`] each rayon worker folds its
//! sources into a private score vector and the vectors are summed at the end,
//! so no lock is taken per update. Summation order can differ from the
//! sequential run by rounding only.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use petgraph::stable_graph::NodeIndex;
use rayon::prelude::*;
use tracing::{debug, instrument, warn};

use crate::config::CentralityConfig;
use crate::graph::weighted::{NodeId, WeightedGraph};
use crate::paths::SourceRun;

/// Node → score mapping produced by a centrality computation.
pub type CentralityMap<N> = HashMap<N, f64>;

/// Outcome of a cancellable betweenness computation.
#[derive(Debug, Clone, PartialEq)]
pub struct BetweennessRun<N: NodeId> {
    /// Scores accumulated over the sources that were processed.
    pub scores: CentralityMap<N>,
    /// Number of sources whose dependencies were accumulated.
    pub sources_processed: usize,
    /// `false` when cancellation stopped the run early; `scores` is then a
    /// partial sum and must not be compared with a complete result.
    pub complete: bool,
}

/// Unnormalized weighted betweenness, computed sequentially.
///
/// Returns an empty map for an empty graph. Isolated nodes score 0.
#[must_use]
#[instrument(skip_all, fields(order = graph.order(), entries = graph.entry_count()))]
pub fn betweenness_centrality<N: NodeId>(graph: &WeightedGraph<N>) -> CentralityMap<N> {
    let never = AtomicBool::new(false);
    let (cb, processed) = accumulate_sequential(graph, &never);
    debug!(sources = processed, "betweenness complete");
    into_map(graph, &cb)
}

/// Betweenness with the execution and scaling options of `config`.
#[must_use]
#[instrument(skip_all, fields(order = graph.order(), parallel = config.parallel))]
pub fn betweenness_with<N>(graph: &WeightedGraph<N>, config: &CentralityConfig) -> CentralityMap<N>
where
    N: NodeId + Send + Sync,
{
    let never = AtomicBool::new(false);
    betweenness_cancellable(graph, config, &never).scores
}

/// Betweenness that checks `cancel` between sources.
///
/// Once the flag is raised no further source is started; sources already
/// running finish. The result records how many sources contributed.
#[must_use]
#[instrument(skip_all, fields(order = graph.order(), parallel = config.parallel))]
pub fn betweenness_cancellable<N>(
    graph: &WeightedGraph<N>,
    config: &CentralityConfig,
    cancel: &AtomicBool,
) -> BetweennessRun<N>
where
    N: NodeId + Send + Sync,
{
    let total = graph.order();
    let (mut cb, processed) = if config.parallel {
        accumulate_parallel(graph, cancel)
    } else {
        accumulate_sequential(graph, cancel)
    };

    let complete = processed == total;
    if complete {
        debug!(sources = processed, "betweenness complete");
    } else {
        warn!(
            sources = processed,
            total, "betweenness cancelled, returning partial scores"
        );
    }

    if config.normalized {
        normalize(&mut cb, total);
    }

    BetweennessRun {
        scores: into_map(graph, &cb),
        sources_processed: processed,
        complete,
    }
}

// ---------------------------------------------------------------------------
// Accumulation
// ---------------------------------------------------------------------------

/// Per-worker state: reusable Dijkstra buffers plus a private score vector.
struct Partial {
    run: SourceRun,
    delta: Vec<f64>,
    cb: Vec<f64>,
    processed: usize,
}

impl Partial {
    fn new(bound: usize) -> Self {
        Self {
            run: SourceRun::new(bound),
            delta: vec![0.0; bound],
            cb: vec![0.0; bound],
            processed: 0,
        }
    }

    /// Run one source and fold its dependencies into `cb`.
    fn add_source<N: NodeId>(&mut self, graph: &WeightedGraph<N>, s: NodeIndex) {
        self.run.run(graph, s);
        let run = &self.run;
        let delta = &mut self.delta;

        for &w in run.order.iter().rev() {
            let wi = w.index();
            let sigma_w = run.sigma[wi];
            let coeff = 1.0 + delta[wi];
            for &v in &run.preds[wi] {
                let vi = v.index();
                delta[vi] += (run.sigma[vi] / sigma_w) * coeff;
            }
            if w != s {
                self.cb[wi] += delta[wi];
            }
        }

        // Only settled nodes can carry a dependency.
        for &w in &run.order {
            delta[w.index()] = 0.0;
        }
        self.processed += 1;
    }
}

fn accumulate_sequential<N: NodeId>(
    graph: &WeightedGraph<N>,
    cancel: &AtomicBool,
) -> (Vec<f64>, usize) {
    let mut partial = Partial::new(graph.node_bound());
    for s in graph.node_indices() {
        if cancel.load(Ordering::Relaxed) {
            break;
        }
        partial.add_source(graph, s);
    }
    (partial.cb, partial.processed)
}

fn accumulate_parallel<N>(graph: &WeightedGraph<N>, cancel: &AtomicBool) -> (Vec<f64>, usize)
where
    N: NodeId + Send + Sync,
{
    let bound = graph.node_bound();
    let sources: Vec<NodeIndex> = graph.node_indices().collect();

    sources
        .par_iter()
        .fold(
            || Partial::new(bound),
            |mut partial, &s| {
                if !cancel.load(Ordering::Relaxed) {
                    partial.add_source(graph, s);
                }
                partial
            },
        )
        .map(|p| (p.cb, p.processed))
        .reduce(
            || (vec![0.0; bound], 0),
            |(mut a, na), (b, nb)| {
                for (x, y) in a.iter_mut().zip(&b) {
                    *x += y;
                }
                (a, na + nb)
            },
        )
}

#[allow(clippy::cast_precision_loss)]
fn normalize(cb: &mut [f64], n: usize) {
    if n <= 2 {
        return;
    }
    let scale = 1.0 / ((n - 1) * (n - 2)) as f64;
    for b in cb.iter_mut() {
        *b *= scale;
    }
}

fn into_map<N: NodeId>(graph: &WeightedGraph<N>, cb: &[f64]) -> CentralityMap<N> {
    graph
        .node_indices()
        .map(|idx| (graph.label(idx).clone(), cb[idx.index()]))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
