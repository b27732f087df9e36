//! Synthetic graph families.
//!
//! Deterministic constructors for the families centrality is usually
//! exercised on: paths, cycles, complete graphs, planar grids, Erdős–Rényi
//! `G(n, p)` and Barabási–Albert preferential attachment. All of them build
//! undirected `WeightedGraph<usize>` with unit weights on nodes `0..n`; the
//! `with_random_*_weights` helpers return reweighted copies.
//!
//! Randomized constructors take a seed and use [`StdRng`], so a seed always
//! reproduces the same graph on the same `rand` version.

use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::instrument;

use crate::error::GraphError;
use crate::graph::weighted::{NodeId, WeightedGraph};

fn unit_graph(n: usize, edges: impl IntoIterator<Item = (usize, usize)>) -> WeightedGraph<usize> {
    let mut g = WeightedGraph::undirected();
    for i in 0..n {
        g.add_node(i);
    }
    for (u, v) in edges {
        g.add_edge(u, v, 1.0).expect("unit weight is valid");
    }
    g
}

/// `0 - 1 - … - (n-1)`.
#[must_use]
pub fn path(n: usize) -> WeightedGraph<usize> {
    unit_graph(n, (1..n).map(|i| (i - 1, i)))
}

/// A path closed back to node 0. Fewer than 3 nodes degrade to a path.
#[must_use]
pub fn cycle(n: usize) -> WeightedGraph<usize> {
    let closing = (n >= 3).then(|| (n - 1, 0));
    unit_graph(n, (1..n).map(|i| (i - 1, i)).chain(closing))
}

/// Every pair of distinct nodes connected.
#[must_use]
pub fn complete(n: usize) -> WeightedGraph<usize> {
    unit_graph(n, (0..n).flat_map(|u| (u + 1..n).map(move |v| (u, v))))
}

/// `rows × cols` lattice; node `r * cols + c` links to its right and lower
/// neighbors.
#[must_use]
pub fn grid(rows: usize, cols: usize) -> WeightedGraph<usize> {
    let id = move |r: usize, c: usize| r * cols + c;
    let edges = (0..rows).flat_map(move |r| {
        (0..cols).flat_map(move |c| {
            let right = (c + 1 < cols).then(|| (id(r, c), id(r, c + 1)));
            let down = (r + 1 < rows).then(|| (id(r, c), id(r + 1, c)));
            right.into_iter().chain(down)
        })
    });
    unit_graph(rows * cols, edges)
}

/// `G(n, p)`: each of the `n(n-1)/2` pairs is an edge with probability `p`.
///
/// # Errors
///
/// [`GraphError::InvalidParameter`] when `p` is outside `[0, 1]`.
#[instrument]
pub fn erdos_renyi(n: usize, p: f64, seed: u64) -> Result<WeightedGraph<usize>, GraphError> {
    if !(0.0..=1.0).contains(&p) {
        return Err(GraphError::InvalidParameter(format!(
            "edge probability must be within [0, 1], got {p}"
        )));
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = Vec::new();
    for u in 0..n {
        for v in u + 1..n {
            if rng.gen_bool(p) {
                edges.push((u, v));
            }
        }
    }
    Ok(unit_graph(n, edges))
}

/// Preferential attachment: start from a star on `m + 1` nodes, then attach
/// each new node to `m` distinct existing nodes chosen proportionally to
/// their degree.
///
/// # Errors
///
/// [`GraphError::InvalidParameter`] unless `1 <= m < n`.
#[instrument]
pub fn barabasi_albert(n: usize, m: usize, seed: u64) -> Result<WeightedGraph<usize>, GraphError> {
    if m < 1 || m >= n {
        return Err(GraphError::InvalidParameter(format!(
            "barabasi-albert needs 1 <= m < n, got m={m} n={n}"
        )));
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges: Vec<(usize, usize)> = (1..=m).map(|leaf| (0, leaf)).collect();

    // Each node appears once per incident edge.
    let mut repeated: Vec<usize> = edges.iter().flat_map(|&(u, v)| [u, v]).collect();

    for source in m + 1..n {
        let mut targets: Vec<usize> = Vec::with_capacity(m);
        while targets.len() < m {
            if let Some(&candidate) = repeated.choose(&mut rng) {
                if !targets.contains(&candidate) {
                    targets.push(candidate);
                }
            }
        }
        for &t in &targets {
            edges.push((source, t));
            repeated.push(t);
            repeated.push(source);
        }
    }
    Ok(unit_graph(n, edges))
}

/// Copy of `graph` with every edge reweighted to a uniform random integer
/// in `range`. Undirected edges get one weight for both directions.
///
/// # Errors
///
/// [`GraphError::InvalidParameter`] for an empty range or one that
/// includes zero.
pub fn with_random_integer_weights<N: NodeId>(
    graph: &WeightedGraph<N>,
    range: RangeInclusive<u32>,
    seed: u64,
) -> Result<WeightedGraph<N>, GraphError> {
    if range.is_empty() || *range.start() == 0 {
        return Err(GraphError::InvalidParameter(format!(
            "weight range must be non-empty and start above zero, got {range:?}"
        )));
    }
    let mut rng = StdRng::seed_from_u64(seed);
    reweight(graph, || f64::from(rng.gen_range(range.clone())))
}

/// Copy of `graph` with every edge reweighted uniformly in `[low, high)`.
///
/// # Errors
///
/// [`GraphError::InvalidParameter`] unless `0 < low < high` and both are
/// finite.
pub fn with_random_uniform_weights<N: NodeId>(
    graph: &WeightedGraph<N>,
    low: f64,
    high: f64,
    seed: u64,
) -> Result<WeightedGraph<N>, GraphError> {
    if !(low.is_finite() && high.is_finite() && low > 0.0 && low < high) {
        return Err(GraphError::InvalidParameter(format!(
            "weight interval must satisfy 0 < low < high, got [{low}, {high})"
        )));
    }
    let mut rng = StdRng::seed_from_u64(seed);
    reweight(graph, || rng.gen_range(low..high))
}

fn reweight<N: NodeId>(
    graph: &WeightedGraph<N>,
    mut draw: impl FnMut() -> f64,
) -> Result<WeightedGraph<N>, GraphError> {
    let mut out = WeightedGraph::new(graph.is_directed());
    for n in graph.nodes() {
        out.add_node(n.clone());
    }
    for (u, v, _) in graph.edges() {
        if !graph.is_directed() && out.weight(u, v).is_some() {
            continue;
        }
        out.add_edge(u.clone(), v.clone(), draw())?;
    }
    Ok(out)
}
