pub mod builder;
pub mod directed;
pub mod generators;
pub mod traits;

pub use builder::GraphBuilder;
pub use directed::DirectedGraph;
pub use traits::{Graph, Weight};
