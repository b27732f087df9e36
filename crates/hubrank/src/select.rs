//! Picking the nodes to remove from a ranking.
//!
//! Experiments take the top `k%` of nodes by some score, remove them with
//! [`remove_nodes`](crate::graph::remove_nodes), and re-measure. Rankings are
//! deterministic: ties keep the graph's node order.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::error::GraphError;
use crate::graph::weighted::{NodeId, WeightedGraph};

/// Every scored node of `graph`, highest score first.
///
/// Nodes missing from `scores` are skipped. The sort is stable, so equal
/// scores keep the graph's node index order.
#[must_use]
pub fn rank_descending<N, S>(graph: &WeightedGraph<N>, scores: &HashMap<N, S>) -> Vec<(N, S)>
where
    N: NodeId,
    S: PartialOrd + Copy,
{
    let mut ranked: Vec<(N, S)> = graph
        .nodes()
        .filter_map(|n| scores.get(n).map(|&s| (n.clone(), s)))
        .collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    ranked
}

/// The `k` highest-scoring nodes (fewer if the graph is smaller).
#[must_use]
pub fn top_k<N, S>(graph: &WeightedGraph<N>, scores: &HashMap<N, S>, k: usize) -> Vec<N>
where
    N: NodeId,
    S: PartialOrd + Copy,
{
    rank_descending(graph, scores)
        .into_iter()
        .take(k)
        .map(|(n, _)| n)
        .collect()
}

/// Number of nodes a `fraction` selection picks from `order` nodes:
/// `max(1, floor(order * fraction))`, or 0 for an empty graph.
///
/// # Errors
///
/// [`GraphError::InvalidFraction`] when `fraction` is NaN or outside `[0, 1]`.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn selection_size(order: usize, fraction: f64) -> Result<usize, GraphError> {
    if !(0.0..=1.0).contains(&fraction) {
        return Err(GraphError::InvalidFraction(fraction));
    }
    if order == 0 {
        return Ok(0);
    }
    Ok(((order as f64 * fraction).floor() as usize).max(1))
}

/// The top `fraction` of nodes by score.
///
/// # Errors
///
/// [`GraphError::InvalidFraction`] for a fraction outside `[0, 1]`.
pub fn top_fraction<N, S>(
    graph: &WeightedGraph<N>,
    scores: &HashMap<N, S>,
    fraction: f64,
) -> Result<Vec<N>, GraphError>
where
    N: NodeId,
    S: PartialOrd + Copy,
{
    let k = selection_size(graph.order(), fraction)?;
    Ok(top_k(graph, scores, k))
}

/// Half from each ranking: the union of the top `max(1, k / 2)` nodes of
/// `first` and of `second`, where `k` is the [`selection_size`] for
/// `fraction`. Duplicates are dropped; `first`'s picks come first.
///
/// # Errors
///
/// [`GraphError::InvalidFraction`] for a fraction outside `[0, 1]`.
pub fn mixed_top<N, A, B>(
    graph: &WeightedGraph<N>,
    first: &HashMap<N, A>,
    second: &HashMap<N, B>,
    fraction: f64,
) -> Result<Vec<N>, GraphError>
where
    N: NodeId,
    A: PartialOrd + Copy,
    B: PartialOrd + Copy,
{
    let k = selection_size(graph.order(), fraction)?;
    if k == 0 {
        return Ok(Vec::new());
    }
    let half = (k / 2).max(1);

    let mut seen = HashSet::new();
    Ok(top_k(graph, first, half)
        .into_iter()
        .chain(top_k(graph, second, half))
        .filter(|n| seen.insert(n.clone()))
        .collect())
}

/// `k` distinct nodes drawn uniformly with a seeded RNG: the random
/// baseline that centrality-based removal is compared against.
#[must_use]
pub fn random_sample<N: NodeId>(graph: &WeightedGraph<N>, k: usize, seed: u64) -> Vec<N> {
    let nodes: Vec<&N> = graph.nodes().collect();
    let mut rng = StdRng::seed_from_u64(seed);
    nodes
        .choose_multiple(&mut rng, k)
        .map(|&n| n.clone())
        .collect()
}
