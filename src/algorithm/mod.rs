pub mod dijkstra;
pub mod engine;
pub mod traits;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
