use serde::{Deserialize, Serialize};

use crate::clue::RawClue;
use crate::difficulty::Difficulty;

/// Clues requested from the clue source per puzzle.
pub const PUZZLE_WORD_COUNT: usize = 10;

/// Body of `POST /generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub topic: String,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub clues: Vec<RawClue>,
}

/// Error body for failed generation attempts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}
