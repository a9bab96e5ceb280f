//! Search nodes and the arena that owns them.
//!
//! Parents are referenced by [`NodeId`], an index into the arena, so the
//! whole search tree is released when the arena is dropped.

use crate::puzzle::{Grid, Move};

/// Handle to a node in a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct SearchNode {
    pub grid: Grid,
    /// Move that produced this node from its parent (`None` for the root).
    pub origin: Option<Move>,
    pub parent: Option<NodeId>,
    /// Moves from the root.
    pub g: u32,
    /// Heuristic estimate to the goal.
    pub h: u32,
}

impl SearchNode {
    pub fn root(grid: Grid, h: u32) -> Self {
        Self {
            grid,
            origin: None,
            parent: None,
            g: 0,
            h,
        }
    }

    pub fn f(&self) -> u32 {
        self.g + self.h
    }
}

/// Append-only store of every node created during one search.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Ids are only minted by `insert`, so lookup never misses for ids from
    /// this arena.
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SearchNode> {
        self.nodes.iter()
    }

    /// Walks parent links from `id` to the root and returns the moves and
    /// f-values in root-to-`id` order. The root adds an f-value but no move.
    pub fn trace(&self, id: NodeId) -> (Vec<Move>, Vec<u32>) {
        let mut moves = Vec::new();
        let mut f_values = Vec::new();
        let mut current = Some(id);

        while let Some(node_id) = current {
            let node = self.get(node_id);
            if let Some(dir) = node.origin {
                moves.push(dir);
            }
            f_values.push(node.f());
            current = node.parent;
        }

        moves.reverse();
        f_values.reverse();
        (moves, f_values)
    }
}
