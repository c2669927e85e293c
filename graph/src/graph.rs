pub type NodeIndex = usize;
pub type EdgeIndex = usize;
pub type Weight = u64;
pub type Distance = u64;

use crate::error::{GraphError, Result};

#[derive(Debug, Clone, Default)]
struct Node {
    /// Incident edges in insertion order. A self-loop appears twice.
    incident: Vec<EdgeIndex>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    source: NodeIndex,
    target: NodeIndex,
    weight: Weight,
}

impl Edge {
    pub fn new(source: NodeIndex, target: NodeIndex, weight: Weight) -> Self {
        Self {
            source,
            target,
            weight
        }
    }

    pub fn source(&self) -> NodeIndex {
        self.source
    }

    pub fn target(&self) -> NodeIndex {
        self.target
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// The endpoint opposite to `u`.
    pub fn other(&self, u: NodeIndex) -> NodeIndex {
        if self.source == u {
            self.target
        } else {
            self.source
        }
    }
}

/// An undirected graph over the vertices `0..vertex_count` with
/// non-negative edge weights.
///
/// The vertex set is fixed at construction. Edges can only be added;
/// each edge is traversable in both directions with the same weight.
/// Parallel edges are kept as they are.
#[derive(Debug, Clone)]
pub struct WeightedGraph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl WeightedGraph {
    pub fn new(vertex_count: i64) -> Result<Self> {
        let n = usize::try_from(vertex_count).map_err(|_| GraphError::InvalidSize(vertex_count))?;
        let mut nodes = Vec::new();
        nodes.try_reserve_exact(n).map_err(|_| GraphError::InvalidSize(vertex_count))?;
        nodes.resize_with(n, Node::default);
        Ok(Self {
            nodes,
            edges: Vec::new(),
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge(&self, eid: EdgeIndex) -> Option<&Edge> {
        self.edges.get(eid)
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter()
    }

    pub fn contains(&self, u: NodeIndex) -> bool {
        u < self.nodes.len()
    }

    pub(crate) fn check_vertex(&self, u: NodeIndex) -> Result<()> {
        if self.contains(u) {
            Ok(())
        } else {
            Err(GraphError::OutOfRange { vertex: u, vertex_count: self.vertex_count() })
        }
    }

    /// Inserts the undirected edge `{u, v}`.
    ///
    /// Nothing is modified when the call fails.
    pub fn add_edge(&mut self, u: NodeIndex, v: NodeIndex, weight: i64) -> Result<EdgeIndex> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        let weight = Weight::try_from(weight).map_err(|_| GraphError::InvalidWeight(weight))?;

        let eid = self.edges.len();
        self.edges.push(Edge::new(u, v, weight));
        self.nodes[u].incident.push(eid);
        self.nodes[v].incident.push(eid);
        Ok(eid)
    }

    /// Returns `(neighbor, weight)` pairs of `u` in insertion order.
    pub fn neighbors_of(&self, u: NodeIndex) -> Result<impl Iterator<Item = (NodeIndex, Weight)> + '_> {
        self.check_vertex(u)?;
        Ok(self.incidences(u))
    }

    /// Unchecked variant used by the algorithms once `u` is known to be valid.
    pub(crate) fn incidences(&self, u: NodeIndex) -> impl Iterator<Item = (NodeIndex, Weight)> + '_ {
        self.nodes[u].incident.iter().map(move |&eid| {
            let e = &self.edges[eid];
            (e.other(u), e.weight())
        })
    }
}
