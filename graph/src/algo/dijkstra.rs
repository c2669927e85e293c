use crate::error::{GraphError, Result};
use crate::frontier::{Frontier, SmallestFirst};
use crate::graph::{Distance, NodeIndex, WeightedGraph};
use std::sync::atomic::{AtomicBool, Ordering};

/// Result of a single-source shortest path query.
///
///   * dist[i] := the weight of the s--i shortest path, `None` if i is unreachable
///   * prev[i] := the previous node on that path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceTable {
    source: NodeIndex,
    dist: Vec<Option<Distance>>,
    prev: Vec<Option<NodeIndex>>,
}

impl DistanceTable {
    pub fn source(&self) -> NodeIndex {
        self.source
    }

    pub fn len(&self) -> usize {
        self.dist.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dist.is_empty()
    }

    pub fn distance(&self, v: NodeIndex) -> Option<Distance> {
        self.dist.get(v).copied().flatten()
    }

    pub fn is_reachable(&self, v: NodeIndex) -> bool {
        self.distance(v).is_some()
    }

    pub fn reachable_count(&self) -> usize {
        self.dist.iter().filter(|d| d.is_some()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeIndex, Option<Distance>)> + '_ {
        self.dist.iter().copied().enumerate()
    }

    /// Vertices of a shortest source--v path, both ends included.
    pub fn path_to(&self, v: NodeIndex) -> Option<Vec<NodeIndex>> {
        if !self.is_reachable(v) {
            return None;
        }
        let mut path = vec![v];
        let mut cur = v;
        while let Some(p) = self.prev[cur] {
            path.push(p);
            cur = p;
        }
        path.reverse();
        Some(path)
    }
}

/// Computes the shortest distances from `s` to every vertex of `g`.
pub fn dijkstra(g: &WeightedGraph, s: NodeIndex) -> Result<DistanceTable> {
    run(g, s, || false)
}

/// Same as [`dijkstra`], but gives up with `GraphError::Cancelled` once
/// `cancel` is set. The flag is checked between frontier extractions.
pub fn dijkstra_with_cancel(g: &WeightedGraph, s: NodeIndex, cancel: &AtomicBool) -> Result<DistanceTable> {
    run(g, s, || cancel.load(Ordering::Relaxed))
}

fn run<F>(g: &WeightedGraph, s: NodeIndex, cancelled: F) -> Result<DistanceTable> where F: Fn() -> bool {
    g.check_vertex(s)?;
    let node_size = g.vertex_count();
    let mut dist: Vec<Option<Distance>> = vec![None; node_size];
    let mut prev = vec![None; node_size];
    let mut finalized = 0usize;
    let mut stale = 0usize;

    let mut que: Frontier<Distance, NodeIndex, SmallestFirst> = Frontier::new();
    que.push(0, s);
    dist[s] = Some(0);
    while let Some((d, v)) = que.pop() {
        if cancelled() {
            log::debug!("dijkstra from {} cancelled after {} finalized vertices", s, finalized);
            return Err(GraphError::Cancelled);
        }
        // lazy deletion: a better entry for `v` was pushed after this one
        if dist[v].map_or(false, |d2| d > d2) {
            log::trace!("discard stale entry ({}, {})", d, v);
            stale += 1;
            continue;
        }
        finalized += 1;
        for (to, w) in g.incidences(v) {
            let nd = match d.checked_add(w) {
                Some(nd) => nd,
                None => continue,
            };
            if dist[to].map_or(true, |d2| nd < d2) {
                dist[to] = Some(nd);
                prev[to] = Some(v);
                que.push(nd, to);
            }
        }
    }

    log::debug!(
        "dijkstra from {}: {} vertices, {} finalized, {} stale entries discarded",
        s, node_size, finalized, stale
    );
    Ok(DistanceTable { source: s, dist, prev })
}
