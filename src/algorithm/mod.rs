pub mod traits;
pub mod topological;
pub mod longest_path;
pub mod paths;

pub use traits::{LongestPathAlgorithm, LongestPathResult, Weight};
