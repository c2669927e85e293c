use crate::graph::NodeIndex;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("invalid vertex count: {0}")]
    InvalidSize(i64),

    #[error("vertex {vertex} is out of range (vertex count: {vertex_count})")]
    OutOfRange {
        vertex: NodeIndex,
        vertex_count: usize,
    },

    #[error("invalid edge weight: {0} (weights must be non-negative)")]
    InvalidWeight(i64),

    #[error("shortest path query was cancelled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, GraphError>;
