//! Manhattan-distance estimate of the remaining moves.

use crate::puzzle::{Grid, CELLS};

/// Sum of `|row - goal_row| + |col - goal_col|` over the cells of a grid.
///
/// Goal positions are indexed once per search so each evaluation is a
/// single pass over the 16 cells.
#[derive(Debug, Clone)]
pub struct Manhattan {
    goal_positions: [(usize, usize); CELLS],
    count_blank: bool,
}

impl Manhattan {
    pub fn new(goal: &Grid, count_blank: bool) -> Self {
        let mut goal_positions = [(0, 0); CELLS];
        for (row, col, value) in goal.iter() {
            goal_positions[value as usize] = (row, col);
        }
        Self {
            goal_positions,
            count_blank,
        }
    }

    pub fn evaluate(&self, state: &Grid) -> u32 {
        state
            .iter()
            .filter(|&(_, _, value)| self.count_blank || value != 0)
            .map(|(row, col, value)| {
                let (goal_row, goal_col) = self.goal_positions[value as usize];
                (row.abs_diff(goal_row) + col.abs_diff(goal_col)) as u32
            })
            .sum()
    }
}

/// Manhattan distance from `state` to `goal`, blank included.
pub fn manhattan(state: &Grid, goal: &Grid) -> u32 {
    Manhattan::new(goal, true).evaluate(state)
}
