//! A* solver for the 15-puzzle using the Manhattan-distance heuristic.
//!
//! ```text
//! puzzle (Grid, Move) ─┬─ heuristic
//!                      ├─ explored
//!                      └─ node ── frontier ── solver
//! ```
//!
//! [`solve`] takes a [`Problem`] (initial and goal grids) and returns a
//! [`Solution`] with the move sequence, its f-value trace and the number
//! of nodes generated.

pub mod config;
pub mod error;
pub mod explored;
pub mod frontier;
pub mod heuristic;
pub mod node;
pub mod puzzle;
pub mod solver;

pub use config::SearchConfig;
pub use error::{GridError, SolveError};
pub use heuristic::manhattan;
pub use puzzle::{Grid, Move};
pub use solver::{solve, Problem, Solution};
