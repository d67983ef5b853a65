//! Dijkstra SSSP - single-source shortest paths over small in-memory graphs
//!
//! The engine settles every node exactly once in non-decreasing distance order
//! and produces a distance table plus a parent table from which each shortest
//! path can be reconstructed. Edge costs must be non-negative; graphs are
//! validated when they are built, never during the search.

pub mod algorithm;
pub mod data_structures;
pub mod driver;
pub mod graph;

pub use algorithm::{
    dijkstra::Dijkstra, engine::EngineState, engine::ShortestPathEngine, ShortestPathAlgorithm,
    ShortestPathResult,
};
pub use data_structures::{FrontierStrategy, LazyFrontier, PriorityFrontier, RebuildFrontier};
/// Re-export main types for convenient use
pub use graph::{DirectedGraph, Graph, GraphBuilder, Weight};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    InvalidReference { vertex: usize, vertex_count: usize },

    #[error("Negative edge weight {weight} on edge {from} -> {to}")]
    NegativeWeight {
        from: usize,
        to: usize,
        weight: String,
    },

    #[error("Path cost overflows the weight type when relaxing edge {from} -> {to}")]
    CostOverflow { from: usize, to: usize },

    #[error("Cannot allocate a graph with {vertices} vertices")]
    TooManyVertices { vertices: usize },

    #[error("Expected an integer at token {position}, found {token:?}")]
    Parse { token: String, position: usize },

    #[error("Input ended early: expected {expected}")]
    UnexpectedEnd { expected: &'static str },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
