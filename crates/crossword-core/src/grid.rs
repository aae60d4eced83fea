use serde::{Deserialize, Serialize};

/// Board edge length. The grid is always 12x12, never resized.
pub const GRID_SIZE: usize = 12;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    pub fn toggle(&self) -> Direction {
        match self {
            Direction::Across => Direction::Down,
            Direction::Down => Direction::Across,
        }
    }

    /// Coordinate of the cell `i` steps from (x, y) along this direction.
    pub fn offset(&self, x: usize, y: usize, i: usize) -> (usize, usize) {
        match self {
            Direction::Across => (x + i, y),
            Direction::Down => (x, y + i),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Direction::Across => "Across",
            Direction::Down => "Down",
        }
    }
}

/// One grid position. A blank cell carries no letter and no number,
/// so the solution letter only exists where a word actually runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Blank,
    Letter { letter: char, number: Option<usize> },
}

impl Cell {
    pub fn letter(&self) -> Option<char> {
        match self {
            Cell::Letter { letter, .. } => Some(*letter),
            Cell::Blank => None,
        }
    }

    pub fn number(&self) -> Option<usize> {
        match self {
            Cell::Letter { number, .. } => *number,
            Cell::Blank => None,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Cell::Blank)
    }
}

/// Row-major solution grid: `grid[y][x]`.
pub type Grid = [[Cell; GRID_SIZE]; GRID_SIZE];

/// The solver's input, one optional letter per cell. Kept entirely
/// separate from the solution grid; owned by the interactive session.
pub type AnswerGrid = [[Option<char>; GRID_SIZE]; GRID_SIZE];

pub fn blank_grid() -> Grid {
    [[Cell::Blank; GRID_SIZE]; GRID_SIZE]
}

pub fn blank_answers() -> AnswerGrid {
    [[None; GRID_SIZE]; GRID_SIZE]
}
