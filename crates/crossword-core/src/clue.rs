use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grid::{Direction, GRID_SIZE};

/// Shortest answer the clue source may supply.
pub const MIN_ANSWER_LEN: usize = 3;

/// One clue/answer record as returned by the clue source. The
/// direction is an advisory hint; the placer decides where words go.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawClue {
    pub clue: String,
    pub answer: String,
    pub direction: Direction,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClueError {
    #[error("answer is empty")]
    EmptyAnswer,
    #[error("answer {0:?} contains non-letter characters")]
    NonAlphabetic(String),
    #[error("answer {0:?} is shorter than {MIN_ANSWER_LEN} letters")]
    TooShort(String),
    #[error("answer {0:?} cannot fit a {GRID_SIZE}x{GRID_SIZE} grid")]
    TooLong(String),
}

/// Where a word landed: start coordinate, direction, and the clue
/// number assigned in placement order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub x: usize,
    pub y: usize,
    pub direction: Direction,
    pub number: usize,
}

/// A validated clue. `placement` stays `None` for words the placer
/// could not fit; those never appear on the grid and are excluded
/// from numbering and scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClueEntry {
    pub clue: String,
    /// Uppercase ASCII letters only.
    pub answer: String,
    /// Direction suggested by the clue source.
    pub hint_direction: Direction,
    pub placement: Option<Placement>,
}

impl ClueEntry {
    /// Validate a raw record at the clue-source boundary. Anything the
    /// placer cannot legally handle is rejected here, never inside it.
    pub fn from_raw(raw: RawClue) -> Result<Self, ClueError> {
        let answer = raw.answer.trim();
        if answer.is_empty() {
            return Err(ClueError::EmptyAnswer);
        }
        if !answer.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ClueError::NonAlphabetic(raw.answer));
        }
        if answer.len() < MIN_ANSWER_LEN {
            return Err(ClueError::TooShort(raw.answer));
        }
        if answer.len() > GRID_SIZE {
            return Err(ClueError::TooLong(raw.answer));
        }

        Ok(Self {
            clue: raw.clue,
            answer: answer.to_ascii_uppercase(),
            hint_direction: raw.direction,
            placement: None,
        })
    }

    pub fn answer_len(&self) -> usize {
        self.answer.len()
    }

    pub fn is_placed(&self) -> bool {
        self.placement.is_some()
    }

    /// Grid coordinate of the i-th letter, if the word was placed.
    pub fn cell(&self, i: usize) -> Option<(usize, usize)> {
        let p = self.placement?;
        Some(p.direction.offset(p.x, p.y, i))
    }

    /// Whether the placed word runs through (x, y).
    pub fn covers(&self, x: usize, y: usize) -> bool {
        (0..self.answer_len()).any(|i| self.cell(i) == Some((x, y)))
    }
}
