//! Independent betweenness reference for cross-checking the Brandes engine.
//!
//! Shares nothing with `hubrank::paths`: distances come from Floyd–Warshall,
//! path counts from a distance-ordered dynamic program over incoming arcs,
//! and scores from the pair definition
//!
//! ```text
//! CB(v) = Σ_{s ≠ v ≠ t, s ≠ t}  σ(s,v) σ(v,t) / σ(s,t)   if d(s,v) + d(v,t) = d(s,t)
//! ```
//!
//! O(n³) time and memory, so only for small graphs with **positive integer**
//! weights (sums stay exact in `f64`, making distance equality reliable).

#![allow(dead_code)]

use std::collections::HashMap;

use hubrank::graph::{NodeId, WeightedGraph};

pub struct Reference<N: NodeId> {
    pub nodes: Vec<N>,
    pub index: HashMap<N, usize>,
    pub dist: Vec<Vec<Option<f64>>>,
    pub sigma: Vec<Vec<f64>>,
}

impl<N: NodeId> Reference<N> {
    pub fn new(graph: &WeightedGraph<N>) -> Self {
        let nodes: Vec<N> = graph.nodes().cloned().collect();
        let n = nodes.len();
        let index: HashMap<N, usize> =
            nodes.iter().cloned().enumerate().map(|(i, v)| (v, i)).collect();

        // incoming[t] = [(u, w)] for every arc u → t, self-loops excluded.
        let mut incoming: Vec<Vec<(usize, f64)>> = vec![Vec::new(); n];
        let mut dist: Vec<Vec<Option<f64>>> = vec![vec![None; n]; n];
        for (i, row) in dist.iter_mut().enumerate() {
            row[i] = Some(0.0);
        }
        for (u, v, w) in graph.edges() {
            let (a, b) = (index[u], index[v]);
            if a == b {
                continue;
            }
            incoming[b].push((a, w));
            dist[a][b] = Some(dist[a][b].map_or(w, |d: f64| d.min(w)));
        }

        for k in 0..n {
            for i in 0..n {
                let Some(dik) = dist[i][k] else { continue };
                for j in 0..n {
                    if let Some(dkj) = dist[k][j] {
                        let via = dik + dkj;
                        if dist[i][j].is_none_or(|d| via < d) {
                            dist[i][j] = Some(via);
                        }
                    }
                }
            }
        }

        let mut sigma = vec![vec![0.0; n]; n];
        for s in 0..n {
            let mut by_distance: Vec<usize> = (0..n).filter(|&t| dist[s][t].is_some()).collect();
            by_distance.sort_by(|&a, &b| {
                dist[s][a]
                    .unwrap_or(f64::INFINITY)
                    .total_cmp(&dist[s][b].unwrap_or(f64::INFINITY))
            });

            sigma[s][s] = 1.0;
            for &t in by_distance.iter().filter(|&&t| t != s) {
                let Some(dt) = dist[s][t] else { continue };
                sigma[s][t] = incoming[t]
                    .iter()
                    .filter(|&&(u, w)| dist[s][u].is_some_and(|du| du + w == dt))
                    .map(|&(u, _)| sigma[s][u])
                    .sum();
            }
        }

        Self {
            nodes,
            index,
            dist,
            sigma,
        }
    }

    /// Unnormalized betweenness over ordered pairs.
    pub fn betweenness(&self) -> HashMap<N, f64> {
        let n = self.nodes.len();
        let mut cb = vec![0.0; n];
        for s in 0..n {
            for t in 0..n {
                if s == t {
                    continue;
                }
                let Some(dst) = self.dist[s][t] else { continue };
                for (v, score) in cb.iter_mut().enumerate() {
                    if v == s || v == t {
                        continue;
                    }
                    if let (Some(dsv), Some(dvt)) = (self.dist[s][v], self.dist[v][t]) {
                        if dsv + dvt == dst {
                            *score += self.sigma[s][v] * self.sigma[v][t] / self.sigma[s][t];
                        }
                    }
                }
            }
        }
        self.nodes.iter().cloned().zip(cb).collect()
    }

    pub fn distance(&self, s: &N, t: &N) -> Option<f64> {
        self.dist[self.index[s]][self.index[t]]
    }

    pub fn path_count(&self, s: &N, t: &N) -> f64 {
        self.sigma[self.index[s]][self.index[t]]
    }
}

/// Count shortest `s → t` paths by enumerating every simple path.
/// Exponential; keep graphs to a handful of nodes.
pub fn enumerate_shortest_paths<N: NodeId>(graph: &WeightedGraph<N>, s: &N, t: &N) -> usize {
    fn walk<N: NodeId>(
        graph: &WeightedGraph<N>,
        at: &N,
        target: &N,
        cost: f64,
        on_path: &mut Vec<N>,
        found: &mut Vec<f64>,
    ) {
        if at == target {
            found.push(cost);
            return;
        }
        let Ok(neighbors) = graph.neighbors(at) else { return };
        for (next, w) in neighbors {
            if on_path.contains(&next) {
                continue;
            }
            on_path.push(next.clone());
            walk(graph, &next, target, cost + w, on_path, found);
            on_path.pop();
        }
    }

    let mut found = Vec::new();
    let mut on_path = vec![s.clone()];
    walk(graph, s, t, 0.0, &mut on_path, &mut found);

    let Some(best) = found.iter().copied().min_by(f64::total_cmp) else {
        return 0;
    };
    found.iter().filter(|&&c| c == best).count()
}
