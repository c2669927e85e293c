use anyhow::{Context, Result};
use graph::{GraphError, NodeIndex, WeightedGraph};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Description of a graph and the vertex to query from.
///
/// Counts and weights stay signed here so that bad input is reported by
/// the graph itself (`InvalidSize`, `InvalidWeight`) instead of by serde.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GraphSpec {
    /// Defaults to one past the largest endpoint
    #[serde(default)]
    vertices: Option<i64>,
    #[serde(default)]
    edges: Vec<(NodeIndex, NodeIndex, i64)>,
    #[serde(default = "default_source")]
    source: NodeIndex,
}

impl GraphSpec {
    pub fn new(vertices: Option<i64>, edges: Vec<(NodeIndex, NodeIndex, i64)>) -> Self {
        Self {
            vertices,
            edges,
            source: default_source(),
        }
    }

    pub fn from_json(path: &Path) -> Result<Self> {
        let json_str = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_json_str(&json_str)
            .with_context(|| format!("failed to load graph from {}", path.display()))
    }

    pub fn from_json_str(json_str: &str) -> Result<Self> {
        Ok(serde_json::from_str(json_str)?)
    }

    pub fn with_source(mut self, source: NodeIndex) -> Self {
        self.source = source;
        self
    }

    pub fn source(&self) -> NodeIndex {
        self.source
    }

    pub fn edges(&self) -> &[(NodeIndex, NodeIndex, i64)] {
        &self.edges
    }

    /// The declared vertex count, or one past the largest endpoint.
    ///
    /// Fails with `OutOfRange` when an endpoint admits no `i64` vertex count.
    pub fn vertex_count(&self) -> graph::Result<i64> {
        if let Some(n) = self.vertices {
            return Ok(n);
        }
        let max = match self.edges.iter().map(|&(u, v, _)| usize::max(u, v)).max() {
            Some(max) => max,
            None => return Ok(0),
        };
        i64::try_from(max).ok()
            .and_then(|m| m.checked_add(1))
            .ok_or(GraphError::OutOfRange { vertex: max, vertex_count: i64::MAX as usize })
    }

    pub fn build(&self) -> graph::Result<WeightedGraph> {
        let mut g = WeightedGraph::new(self.vertex_count()?)?;
        for &(u, v, w) in &self.edges {
            g.add_edge(u, v, w)?;
        }
        log::info!("built graph with {} vertices and {} edges", g.vertex_count(), g.edge_count());
        Ok(g)
    }
}

fn default_source() -> NodeIndex {
    0
}

#[cfg(test)]
mod test {
    use super::GraphSpec;
    use graph::GraphError;

    #[test]
    fn test_from_json() {
        let spec = GraphSpec::from_json_str(r#"{
            "vertices": 3,
            "edges": [[0, 1, 4]],
            "source": 1
        }"#).unwrap();
        assert_eq!(spec.vertex_count(), Ok(3));
        assert_eq!(spec.source(), 1);
        assert_eq!(spec.edges(), &[(0, 1, 4)]);
        let g = spec.build().unwrap();
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_defaults() {
        let spec = GraphSpec::from_json_str(r#"{ "edges": [[0, 4, 1], [2, 1, 3]] }"#).unwrap();
        assert_eq!(spec.vertex_count(), Ok(5));
        assert_eq!(spec.source(), 0);

        let empty = GraphSpec::from_json_str("{}").unwrap();
        assert_eq!(empty.vertex_count(), Ok(0));
        assert!(empty.edges().is_empty());
    }

    #[test]
    fn test_invalid_input_is_reported_by_graph() {
        let spec = GraphSpec::from_json_str(r#"{ "vertices": -2 }"#).unwrap();
        assert_eq!(spec.build().unwrap_err(), GraphError::InvalidSize(-2));

        let spec = GraphSpec::from_json_str(r#"{ "edges": [[0, 1, -1]] }"#).unwrap();
        assert_eq!(spec.build().unwrap_err(), GraphError::InvalidWeight(-1));

        let spec = GraphSpec::from_json_str(r#"{ "vertices": 3, "edges": [[5, 0, 1]] }"#).unwrap();
        assert_eq!(spec.build().unwrap_err(), GraphError::OutOfRange { vertex: 5, vertex_count: 3 });
    }

    #[test]
    fn test_inferred_count_beyond_i64() {
        let max = i64::MAX as usize;
        let spec = GraphSpec::from_json_str(r#"{ "edges": [[9223372036854775807, 0, 1]] }"#).unwrap();
        let err = GraphError::OutOfRange { vertex: max, vertex_count: max };
        assert_eq!(spec.vertex_count(), Err(err.clone()));
        assert_eq!(spec.build().unwrap_err(), err);

        let spec = GraphSpec::from_json_str(r#"{ "edges": [[0, 9223372036854775808, 1]] }"#).unwrap();
        let err = GraphError::OutOfRange { vertex: max + 1, vertex_count: max };
        assert_eq!(spec.vertex_count(), Err(err.clone()));
        assert_eq!(spec.build().unwrap_err(), err);
    }

    #[test]
    fn test_huge_declared_count() {
        let spec = GraphSpec::from_json_str(r#"{ "vertices": 9223372036854775807 }"#).unwrap();
        assert_eq!(spec.build().unwrap_err(), GraphError::InvalidSize(i64::MAX));
    }

    #[test]
    fn test_malformed_json() {
        assert!(GraphSpec::from_json_str(r#"{ "edges": [[0, 1]] }"#).is_err());
        assert!(GraphSpec::from_json_str(r#"{ "edges": [[-1, 1, 2]] }"#).is_err());
    }
}
