//! DAG Longest Path - maximum-weight paths between two vertices of a weighted DAG
//!
//! The graph is a dense adjacency matrix where a zero weight means "no edge".
//! Vertices are ordered with Kahn's algorithm, distances are relaxed once over
//! that order, and every tied optimal path is reconstructed from the
//! predecessor sets collected during relaxation.

pub mod algorithm;
pub mod graph;
pub mod input;
pub mod report;

pub use algorithm::{
    longest_path::DagLongestPath, topological::topological_order, LongestPathAlgorithm,
    LongestPathResult,
};
/// Re-export main types for convenient use
pub use graph::matrix::AdjacencyMatrix;
pub use input::{parse_input, read_input, ProblemInput};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Graph has a cycle: only {sorted} of {vertex_count} vertices could be ordered")]
    CycleDetected { sorted: usize, vertex_count: usize },

    #[error("Vertex index {index} out of range [0, {vertex_count})")]
    IndexOutOfRange { index: usize, vertex_count: usize },

    #[error("Matrix row {row} has {found} columns, expected {expected}")]
    DimensionMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Graph must have at least one vertex")]
    EmptyGraph,

    #[error("A {vertex_count} x {vertex_count} matrix does not fit in memory")]
    GraphTooLarge { vertex_count: usize },

    #[error("Order is not a topological order of the {vertex_count} vertices")]
    InvalidOrder { vertex_count: usize },

    #[error("Invalid {name}: {message}")]
    InvalidParameter { name: &'static str, message: String },

    #[error("Distance overflow relaxing edge {from} -> {to}")]
    WeightOverflow { from: usize, to: usize },

    #[error("{count} optimal paths exceed the limit of {limit}")]
    TooManyPaths { count: u128, limit: usize },

    #[error("Input is empty after removing comments")]
    EmptyInput,

    #[error("Input ended early: expected {expected}")]
    MissingLine { expected: &'static str },

    #[error("Line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
