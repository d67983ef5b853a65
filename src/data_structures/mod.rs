pub mod frontier;
pub mod priority_queue;
pub mod rebuild;

pub use frontier::{FrontierStrategy, PriorityFrontier};
pub use priority_queue::LazyFrontier;
pub use rebuild::RebuildFrontier;
