//! Set of every grid a node has been generated for.

use rustc_hash::FxHashSet;

use crate::puzzle::Grid;

/// Membership is by packed [`Grid::key`]. Grids enter the set when their
/// node is created, not when it is expanded.
#[derive(Debug, Default)]
pub struct ExploredSet {
    keys: FxHashSet<u64>,
}

impl ExploredSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: u64) -> bool {
        self.keys.contains(&key)
    }

    /// Returns `false` if the key was already present.
    pub fn insert(&mut self, key: u64) -> bool {
        self.keys.insert(key)
    }

    pub fn contains_grid(&self, grid: &Grid) -> bool {
        self.contains(grid.key())
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
