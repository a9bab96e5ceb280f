//! Min-f priority queue of nodes awaiting expansion.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::node::NodeId;

/// Ordering key: lower `f` first, then earlier insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct FrontierKey {
    f: u32,
    order: u64,
}

/// `BinaryHeap` is a max-heap, so entries carry `Reverse<FrontierKey>`.
#[derive(Debug)]
struct FrontierEntry {
    key: Reverse<FrontierKey>,
    node: NodeId,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// Entries keep the f they were pushed with; there is no decrease-key.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    pushed: u64,
    high_water: usize,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: NodeId, f: u32) {
        let key = FrontierKey {
            f,
            order: self.pushed,
        };
        self.pushed += 1;
        self.heap.push(FrontierEntry {
            key: Reverse(key),
            node,
        });
        self.high_water = self.high_water.max(self.heap.len());
    }

    pub fn pop_min(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|entry| entry.node)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest size the frontier reached.
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{NodeArena, SearchNode};
    use crate::puzzle::Grid;

    fn ids(count: usize) -> Vec<NodeId> {
        let mut arena = NodeArena::new();
        (0..count)
            .map(|_| arena.insert(SearchNode::root(Grid::solved(), 0)))
            .collect()
    }

    #[test]
    fn pops_lowest_f_first() {
        let ids = ids(3);
        let mut frontier = Frontier::new();
        frontier.push(ids[0], 10);
        frontier.push(ids[1], 5);
        frontier.push(ids[2], 15);

        assert_eq!(frontier.pop_min(), Some(ids[1]));
        assert_eq!(frontier.pop_min(), Some(ids[0]));
        assert_eq!(frontier.pop_min(), Some(ids[2]));
        assert_eq!(frontier.pop_min(), None);
        assert!(frontier.is_empty());
    }

    #[test]
    fn high_water_survives_pops() {
        let ids = ids(3);
        let mut frontier = Frontier::new();
        for &id in &ids {
            frontier.push(id, 1);
        }
        assert_eq!(frontier.len(), 3);
        let _ = frontier.pop_min();
        assert_eq!(frontier.len(), 2);
        assert_eq!(frontier.high_water(), 3);
    }
}
