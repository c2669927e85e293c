use graph::{Distance, DistanceTable, NodeIndex};
use itertools::Itertools;
use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Row {
    vertex: NodeIndex,
    /// `null` when the vertex is unreachable
    distance: Option<Distance>,
    path: Option<Vec<NodeIndex>>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Report {
    source: NodeIndex,
    reachable: usize,
    vertices: Vec<Row>,
}

#[derive(Debug, Clone)]
pub struct TextOptions {
    /// Printed in place of a distance for unreachable vertices
    pub unreachable: String,
    pub show_paths: bool,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            unreachable: "INF".to_string(),
            show_paths: false,
        }
    }
}

impl Report {
    pub fn new(table: &DistanceTable) -> Self {
        let vertices = table.iter()
            .map(|(vertex, distance)| Row {
                vertex,
                distance,
                path: table.path_to(vertex),
            })
            .collect();
        Self {
            source: table.source(),
            reachable: table.reachable_count(),
            vertices,
        }
    }

    pub fn source(&self) -> NodeIndex {
        self.source
    }

    pub fn to_text(&self, opts: &TextOptions) -> String {
        let mut out = format!("Shortest distances from vertex {}:\n", self.source);
        for row in &self.vertices {
            let dist = match row.distance {
                Some(d) => d.to_string(),
                None => opts.unreachable.clone(),
            };
            out += &format!("Vertex {}: {}", row.vertex, dist);
            if opts.show_paths {
                if let Some(path) = &row.path {
                    out += &format!(" (path: {})", path.iter().join(" -> "));
                }
            }
            out.push('\n');
        }
        out
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
