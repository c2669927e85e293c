pub mod dijkstra;

pub use dijkstra::{dijkstra, dijkstra_with_cancel, DistanceTable};
