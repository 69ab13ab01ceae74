pub mod error;
pub mod generator;
pub mod report;
pub mod solver;

// Re-export commonly used types
pub use error::SolveError;
pub use generator::{GraphGenerator, MAX_NODES, MIN_NODES};
pub use report::{EdgeReport, NodeReport, SolveReport};
pub use solver::{path_to, solve};
