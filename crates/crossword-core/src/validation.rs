use crate::clue::ClueEntry;
use crate::grid::{AnswerGrid, Grid, GRID_SIZE};

/// Check that every non-blank cell belongs to a horizontal or vertical
/// run of at least three letters. A consistency check on finished
/// grids; the placer is expected to always satisfy it.
pub fn validate_grid(grid: &Grid) -> bool {
    for y in 0..GRID_SIZE {
        for x in 0..GRID_SIZE {
            if grid[y][x].is_blank() {
                continue;
            }
            if run_length_across(grid, x, y) < 3 && run_length_down(grid, x, y) < 3 {
                return false;
            }
        }
    }
    true
}

/// Length of the maximal contiguous non-blank run through (x, y) in
/// its row.
fn run_length_across(grid: &Grid, x: usize, y: usize) -> usize {
    let mut start = x;
    while start > 0 && !grid[y][start - 1].is_blank() {
        start -= 1;
    }
    let mut end = x;
    while end + 1 < GRID_SIZE && !grid[y][end + 1].is_blank() {
        end += 1;
    }
    end - start + 1
}

fn run_length_down(grid: &Grid, x: usize, y: usize) -> usize {
    let mut start = y;
    while start > 0 && !grid[start - 1][x].is_blank() {
        start -= 1;
    }
    let mut end = y;
    while end + 1 < GRID_SIZE && !grid[end + 1][x].is_blank() {
        end += 1;
    }
    end - start + 1
}

/// Completeness/correctness verdict for one word, shown to the solver
/// right after they fill its last cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordFeedback {
    pub word: String,
    pub correct: bool,
}

/// Feedback for a single entry. `None` until every cell of the word
/// has user input, and always `None` for entries that never made it
/// onto the grid.
pub fn check_word(user: &AnswerGrid, entry: &ClueEntry) -> Option<WordFeedback> {
    entry.placement?;

    let mut typed = String::with_capacity(entry.answer_len());
    for i in 0..entry.answer_len() {
        let (x, y) = entry.cell(i)?;
        typed.push(user[y][x]?.to_ascii_uppercase());
    }

    Some(WordFeedback {
        correct: typed == entry.answer,
        word: entry.answer.clone(),
    })
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScoreReport {
    /// round(100 * correct_count / total).
    pub percentage: u32,
    /// Non-blank cells whose user letter matches the solution.
    pub correct_count: u32,
    /// All non-blank cells, each counted once even where words cross.
    pub total: u32,
    /// Answers of placed words whose every cell matches.
    pub correct_words: Vec<String>,
}

/// Grade the user's matrix against the solution grid. Entries without
/// a placement are skipped entirely; they have no cells to grade.
pub fn score_answers(grid: &Grid, user: &AnswerGrid, entries: &[ClueEntry]) -> ScoreReport {
    let mut total = 0u32;
    let mut correct_count = 0u32;

    for y in 0..GRID_SIZE {
        for x in 0..GRID_SIZE {
            let Some(letter) = grid[y][x].letter() else {
                continue;
            };
            total += 1;
            if user[y][x].map(|c| c.to_ascii_uppercase()) == Some(letter) {
                correct_count += 1;
            }
        }
    }

    let correct_words = entries
        .iter()
        .filter(|e| e.is_placed())
        .filter(|e| check_word(user, e).is_some_and(|fb| fb.correct))
        .map(|e| e.answer.clone())
        .collect();

    let percentage = if total > 0 {
        (f64::from(correct_count) / f64::from(total) * 100.0).round() as u32
    } else {
        0
    };

    ScoreReport {
        percentage,
        correct_count,
        total,
        correct_words,
    }
}

/// Filled and fillable cell counts, for progress display.
pub fn fill_progress(grid: &Grid, user: &AnswerGrid) -> (u32, u32) {
    let mut filled = 0u32;
    let mut total = 0u32;
    for y in 0..GRID_SIZE {
        for x in 0..GRID_SIZE {
            if grid[y][x].is_blank() {
                continue;
            }
            total += 1;
            if user[y][x].is_some() {
                filled += 1;
            }
        }
    }
    (filled, total)
}
