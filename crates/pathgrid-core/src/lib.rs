pub mod error;
pub mod graph;
pub mod id;
pub mod node;

// Re-export commonly used types
pub use error::GraphError;
pub use graph::{WeightedGraph, MAX_WEIGHT, MIN_WEIGHT};
pub use id::{EdgeId, NodeId};
pub use node::PathNode;
