//! This module contains all custom errors used in this library.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The edge `(v, v)` was requested. Covers are only defined over simple graphs.
    #[error("Graph: self-loop on vertex {0}")]
    SelfLoop(String),
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Import: IoError")]
    IoError(#[from] std::io::Error),
    #[error("Import: Input is malformed.")]
    InputMalformedError,
    #[error("Import: Integer is malformed.")]
    BadIntError(#[from] std::num::ParseIntError),
    #[error("Import: {0}")]
    Graph(#[from] GraphError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessingError {
    #[error("InvalidSolution: {0}")]
    InvalidSolution(String),
    #[error("Unknown vertex: {0}")]
    UnknownVertex(String),
    /// The greedy frontier ran dry before the candidate became a connected cover.
    /// `partial` holds the node ids chosen so far.
    #[error("Greedy construction did not converge after {} vertices", .partial.len())]
    NonConvergence { partial: Vec<usize> },
    #[error("Unknown solver: {0}")]
    UnknownSolver(String),
}
