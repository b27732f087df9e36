//! Copy-on-write node removal.
//!
//! Experiments compare a graph before and after its top-ranked nodes are
//! taken out, so removal never touches the caller's graph: it clones, then
//! deletes from the clone.

use tracing::{debug, instrument};

use super::weighted::{NodeId, WeightedGraph};

/// Return a copy of `graph` without the nodes in `nodes` and their incident
/// entries. Identifiers not present in `graph` are ignored.
///
/// Applying the same removal twice yields the same graph as applying it
/// once, and an empty removal set yields a graph equal to the original.
#[must_use]
#[instrument(skip_all, fields(order = graph.order()))]
pub fn remove_nodes<'a, N, I>(graph: &WeightedGraph<N>, nodes: I) -> WeightedGraph<N>
where
    N: NodeId + 'a,
    I: IntoIterator<Item = &'a N>,
{
    let mut out = graph.clone();
    let mut removed = 0usize;
    for node in nodes {
        if out.remove_node(node) {
            removed += 1;
        }
    }
    debug!(removed, remaining = out.order(), "removed nodes");
    out
}
