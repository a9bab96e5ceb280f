//! Error types for grid construction and search.

use thiserror::Error;

/// A grid failed validation: it is not a permutation of `0..16`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("expected 16 cells, found {0}")]
    WrongCellCount(usize),
    #[error("cell `{0}` is not a tile number")]
    InvalidCell(String),
    #[error("tile {0} is out of range 0..=15")]
    OutOfRange(u8),
    #[error("tile {0} appears more than once")]
    Duplicate(u8),
}

/// Ways a search can end without producing a solution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The goal cannot be reached from the initial grid.
    #[error("no solution: goal is unreachable from the initial grid")]
    NoSolution,
    /// Generating another node would exceed the caller's ceiling.
    #[error("node budget of {limit} exceeded")]
    NodeBudgetExceeded { limit: usize },
    #[error("invalid search configuration: {0}")]
    InvalidConfig(String),
}
