//! A* driver: seeds the frontier with the initial grid, expands nodes in
//! f order, and reconstructs the path once the goal is popped.

use std::fmt;

use log::{debug, trace};

use crate::config::SearchConfig;
use crate::error::SolveError;
use crate::explored::ExploredSet;
use crate::frontier::Frontier;
use crate::heuristic::Manhattan;
use crate::node::{NodeArena, NodeId, SearchNode};
use crate::puzzle::{Grid, Move};

/// One puzzle instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Problem {
    pub initial: Grid,
    pub goal: Grid,
}

impl Problem {
    pub fn new(initial: Grid, goal: Grid) -> Self {
        Self { initial, goal }
    }

    pub fn solve(&self, config: &SearchConfig) -> Result<Solution, SolveError> {
        solve(self, config)
    }
}

/// Result of a successful search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// g-value of the goal node.
    pub depth: u32,
    /// Nodes created during the search, root included.
    pub nodes_generated: usize,
    pub moves: Vec<Move>,
    /// f-values from root to goal; one longer than `moves`.
    pub f_trace: Vec<u32>,
}

impl Solution {
    /// Applies the moves to `initial`. `None` if a move is illegal.
    pub fn replay(&self, initial: &Grid) -> Option<Grid> {
        self.moves
            .iter()
            .try_fold(*initial, |grid, &dir| grid.apply_move(dir))
    }

    pub fn move_string(&self) -> String {
        self.moves
            .iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.depth)?;
        writeln!(f, "{}", self.nodes_generated)?;
        writeln!(f, "{}", self.move_string())?;
        let trace: Vec<String> = self.f_trace.iter().map(|v| v.to_string()).collect();
        write!(f, "{}", trace.join(" "))
    }
}

/// Runs A* from `problem.initial` to `problem.goal`.
///
/// Grids are marked explored when their node is created, and a node's
/// parent and cost never change afterwards: the first path found to a
/// grid is the one kept.
pub fn solve(problem: &Problem, config: &SearchConfig) -> Result<Solution, SolveError> {
    config.validate()?;

    if config.check_solvability && !problem.initial.is_solvable_to(&problem.goal) {
        debug!("rejecting instance: parity differs from goal");
        return Err(SolveError::NoSolution);
    }

    let mut search = Search::new(problem, config);
    let goal = search.run()?;
    Ok(search.solution(goal))
}

struct Search {
    goal: Grid,
    heuristic: Manhattan,
    arena: NodeArena,
    frontier: Frontier,
    explored: ExploredSet,
    max_nodes: Option<usize>,
    expanded: usize,
}

impl Search {
    fn new(problem: &Problem, config: &SearchConfig) -> Self {
        let heuristic = Manhattan::new(&problem.goal, config.count_blank);
        let mut search = Self {
            goal: problem.goal,
            heuristic,
            arena: NodeArena::new(),
            frontier: Frontier::new(),
            explored: ExploredSet::new(),
            max_nodes: config.max_nodes,
            expanded: 0,
        };

        let h = search.heuristic.evaluate(&problem.initial);
        let root = search.arena.insert(SearchNode::root(problem.initial, h));
        search.frontier.push(root, h);
        search.explored.insert(problem.initial.key());
        debug!("search started: h={h}");
        search
    }

    fn run(&mut self) -> Result<NodeId, SolveError> {
        while let Some(id) = self.frontier.pop_min() {
            let node = self.arena.get(id).clone();
            if node.grid == self.goal {
                debug!(
                    "goal reached: depth={} generated={} expanded={} frontier_high_water={}",
                    node.g,
                    self.arena.len(),
                    self.expanded,
                    self.frontier.high_water()
                );
                return Ok(id);
            }

            self.expanded += 1;
            trace!("expanding g={} h={} f={}", node.g, node.h, node.f());
            self.expand(id, &node)?;
        }

        debug!("frontier exhausted after {} nodes", self.arena.len());
        Err(SolveError::NoSolution)
    }

    fn expand(&mut self, id: NodeId, node: &SearchNode) -> Result<(), SolveError> {
        for dir in node.grid.legal_moves() {
            let Some(grid) = node.grid.apply_move(dir) else {
                continue;
            };
            let key = grid.key();
            if self.explored.contains(key) {
                continue;
            }
            if let Some(limit) = self.max_nodes {
                if self.arena.len() >= limit {
                    debug!("node budget of {limit} exhausted");
                    return Err(SolveError::NodeBudgetExceeded { limit });
                }
            }

            let child = SearchNode {
                grid,
                origin: Some(dir),
                parent: Some(id),
                g: node.g + 1,
                h: self.heuristic.evaluate(&grid),
            };
            let f = child.f();
            let child_id = self.arena.insert(child);
            self.frontier.push(child_id, f);
            self.explored.insert(key);
        }
        Ok(())
    }

    fn solution(&self, goal: NodeId) -> Solution {
        let (moves, f_trace) = self.arena.trace(goal);
        Solution {
            depth: self.arena.get(goal).g,
            nodes_generated: self.arena.len(),
            moves,
            f_trace,
        }
    }
}
