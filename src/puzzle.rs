use rand::{seq::SliceRandom, Rng};
use std::fmt;
use std::str::FromStr;

use crate::error::GridError;

pub const SIZE: usize = 4;
pub const CELLS: usize = SIZE * SIZE;

/// Direction the blank travels. `Up` swaps the blank with the tile above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Expansion order used by the solver.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Move::Up => 'U',
            Move::Down => 'D',
            Move::Left => 'L',
            Move::Right => 'R',
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A 4x4 arrangement of tiles `1..=15` and the blank `0`.
///
/// Every `Grid` is a permutation of `0..16`; the constructors reject
/// anything else, so the blank position is always defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [[u8; SIZE]; SIZE],
    blank: (usize, usize),
}

impl Grid {
    pub fn new(cells: [[u8; SIZE]; SIZE]) -> Result<Self, GridError> {
        let mut seen = [false; CELLS];
        let mut blank = (0, 0);

        for (row, values) in cells.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                if value as usize >= CELLS {
                    return Err(GridError::OutOfRange(value));
                }
                if seen[value as usize] {
                    return Err(GridError::Duplicate(value));
                }
                seen[value as usize] = true;
                if value == 0 {
                    blank = (row, col);
                }
            }
        }

        Ok(Self { cells, blank })
    }

    /// Build a grid from 16 row-major values.
    pub fn from_cells(values: &[u8]) -> Result<Self, GridError> {
        if values.len() != CELLS {
            return Err(GridError::WrongCellCount(values.len()));
        }
        let mut cells = [[0; SIZE]; SIZE];
        for (i, &value) in values.iter().enumerate() {
            cells[i / SIZE][i % SIZE] = value;
        }
        Self::new(cells)
    }

    /// The conventional goal: tiles in order with the blank bottom-right.
    pub fn solved() -> Self {
        let mut cells = [[0; SIZE]; SIZE];
        let mut value = 1;

        for (i, row) in cells.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                if i == SIZE - 1 && j == SIZE - 1 {
                    *cell = 0;
                } else {
                    *cell = value;
                    value += 1;
                }
            }
        }

        Self {
            cells,
            blank: (SIZE - 1, SIZE - 1),
        }
    }

    pub fn cells(&self) -> &[[u8; SIZE]; SIZE] {
        &self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row][col]
    }

    /// `(row, col)` of the blank.
    pub fn blank(&self) -> (usize, usize) {
        self.blank
    }

    pub fn position(&self, value: u8) -> Option<(usize, usize)> {
        self.iter()
            .find(|&(_, _, v)| v == value)
            .map(|(row, col, _)| (row, col))
    }

    /// Row-major `(row, col, value)` triples.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, values)| {
            values
                .iter()
                .enumerate()
                .map(move |(col, &value)| (row, col, value))
        })
    }

    pub fn can_move(&self, movement: Move) -> bool {
        let (row, col) = self.blank;
        match movement {
            Move::Up => row > 0,
            Move::Down => row < SIZE - 1,
            Move::Left => col > 0,
            Move::Right => col < SIZE - 1,
        }
    }

    pub fn legal_moves(&self) -> impl Iterator<Item = Move> + '_ {
        Move::ALL.into_iter().filter(move |&m| self.can_move(m))
    }

    /// Returns the grid after sliding the blank, or `None` if the blank
    /// would leave the board. `self` is left untouched.
    pub fn apply_move(&self, movement: Move) -> Option<Self> {
        if !self.can_move(movement) {
            return None;
        }

        let (dx, dy) = movement.as_offset();
        let (x, y) = self.blank;
        let new_x = x.checked_add_signed(dx)?;
        let new_y = y.checked_add_signed(dy)?;

        let mut next = *self;
        next.cells[x][y] = self.cells[new_x][new_y];
        next.cells[new_x][new_y] = 0;
        next.blank = (new_x, new_y);
        Some(next)
    }

    /// Packs the cells row-major into one nibble each. Keys compare in the
    /// same order as the cell sequences they encode.
    pub fn key(&self) -> u64 {
        self.iter()
            .fold(0u64, |key, (_, _, value)| (key << 4) | u64::from(value))
    }

    pub fn from_key(key: u64) -> Result<Self, GridError> {
        let mut values = [0u8; CELLS];
        for (i, value) in values.iter_mut().enumerate() {
            let shift = 4 * (CELLS - 1 - i);
            *value = ((key >> shift) & 0xF) as u8;
        }
        Self::from_cells(&values)
    }

    /// Comma-joined row-major values, e.g. `1,2,3,...,15,0`.
    pub fn serialize(&self) -> String {
        self.iter()
            .map(|(_, _, value)| value.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Whether `goal` is reachable by legal moves.
    ///
    /// Tiles are relabelled by their goal index; the number of inversions
    /// among non-blank tiles plus the blank's row distance to its goal row
    /// keeps its parity under every move, and is zero at the goal.
    pub fn is_solvable_to(&self, goal: &Grid) -> bool {
        let mut goal_index = [0usize; CELLS];
        for (row, col, value) in goal.iter() {
            goal_index[value as usize] = row * SIZE + col;
        }

        let relabelled: Vec<usize> = self
            .iter()
            .filter(|&(_, _, value)| value != 0)
            .map(|(_, _, value)| goal_index[value as usize])
            .collect();

        let inversions = Self::count_inversions(&relabelled);
        let row_distance = self.blank.0.abs_diff(goal.blank.0);

        (inversions + row_distance) % 2 == 0
    }

    fn count_inversions(flattened: &[usize]) -> usize {
        flattened
            .iter()
            .enumerate()
            .map(|(i, &val)| {
                flattened[i + 1..]
                    .iter()
                    .filter(|&&next| next < val)
                    .count()
            })
            .sum()
    }

    /// Random walk of `moves` blank moves that never undoes the previous one.
    pub fn scramble<R: Rng + ?Sized>(&self, moves: usize, rng: &mut R) -> Self {
        let mut grid = *self;
        let mut last: Option<Move> = None;

        for _ in 0..moves {
            let options: Vec<Move> = grid
                .legal_moves()
                .filter(|m| last.map_or(true, |l| *m != l.opposite()))
                .collect();
            let Some(&dir) = options.choose(rng) else {
                break;
            };
            if let Some(next) = grid.apply_move(dir) {
                grid = next;
                last = Some(dir);
            }
        }

        grid
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(',')
            .map(|cell| {
                let cell = cell.trim();
                cell.parse::<u8>()
                    .map_err(|_| GridError::InvalidCell(cell.to_string()))
            })
            .collect::<Result<Vec<u8>, _>>()?;
        Self::from_cells(&values)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for &val in row {
                write!(f, "{:2} ", val)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
