pub mod algo;
pub mod error;
pub mod frontier;
pub mod graph;

pub use algo::{dijkstra, dijkstra_with_cancel, DistanceTable};
pub use error::{GraphError, Result};
pub use frontier::{Frontier, LargestFirst, OrderPolicy, SmallestFirst};
pub use graph::{Distance, Edge, EdgeIndex, NodeIndex, Weight, WeightedGraph};
