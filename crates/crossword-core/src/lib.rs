pub mod clue;
pub mod difficulty;
pub mod grid;
pub mod placer;
pub mod protocol;
pub mod validation;

pub use clue::{ClueEntry, ClueError, Placement, RawClue};
pub use difficulty::Difficulty;
pub use grid::{blank_answers, blank_grid, AnswerGrid, Cell, Direction, Grid, GRID_SIZE};
pub use protocol::{ErrorResponse, GenerateRequest, GenerateResponse};
