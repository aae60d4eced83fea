use crossword_core::placer::place_words;
use crossword_core::validation::{check_word, fill_progress, score_answers, ScoreReport, WordFeedback};
use crossword_core::{
    blank_answers, blank_grid, AnswerGrid, ClueEntry, Difficulty, Direction, Grid, RawClue,
    GRID_SIZE,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    Menu,
    Playing,
}

/// Topics offered on the menu, forwarded verbatim to the clue source.
pub const TOPICS: &[&str] = &[
    "Science",
    "History",
    "Geography",
    "Literature",
    "Movies",
    "Sports",
    "Technology",
    "Music",
];

pub struct Game {
    pub state: GameState,
    // Menu
    pub topic_selection: usize,
    pub difficulty: Difficulty,
    pub loading: bool,
    pub error_message: Option<String>,
    // Puzzle. The solution grid is read-only once generated; only the
    // answer matrix changes while playing.
    pub grid: Grid,
    pub entries: Vec<ClueEntry>,
    pub answers: AnswerGrid,
    pub cursor_x: usize,
    pub cursor_y: usize,
    pub direction: Direction,
    pub show_answers: bool,
    pub score: Option<ScoreReport>,
    pub feedback: Option<WordFeedback>,
    pub show_quit_confirm: bool,
}

impl Game {
    pub fn new() -> Self {
        Self {
            state: GameState::Menu,
            topic_selection: 0,
            difficulty: Difficulty::Easy,
            loading: false,
            error_message: None,
            grid: blank_grid(),
            entries: Vec::new(),
            answers: blank_answers(),
            cursor_x: 0,
            cursor_y: 0,
            direction: Direction::Across,
            show_answers: false,
            score: None,
            feedback: None,
            show_quit_confirm: false,
        }
    }

    pub fn topic(&self) -> &'static str {
        TOPICS[self.topic_selection]
    }

    pub fn prev_topic(&mut self) {
        self.topic_selection = if self.topic_selection == 0 {
            TOPICS.len() - 1
        } else {
            self.topic_selection - 1
        };
    }

    pub fn next_topic(&mut self) {
        self.topic_selection = (self.topic_selection + 1) % TOPICS.len();
    }

    /// Validate the raw clues, place them, and switch to the board.
    /// Returns false (staying on the menu) when nothing usable landed
    /// on the grid.
    pub fn start_puzzle(&mut self, raw_clues: Vec<RawClue>) -> bool {
        let mut entries: Vec<ClueEntry> = raw_clues
            .into_iter()
            .filter_map(|raw| ClueEntry::from_raw(raw).ok())
            .collect();

        if entries.is_empty() {
            self.error_message = Some("The clue source returned no usable clues".to_string());
            return false;
        }

        let grid = place_words(&mut entries);

        let Some(first) = entries
            .iter()
            .filter_map(|e| e.placement)
            .min_by_key(|p| p.number)
        else {
            self.error_message = Some("No clues could be placed on the grid".to_string());
            return false;
        };

        self.grid = grid;
        self.entries = entries;
        self.answers = blank_answers();
        self.cursor_x = first.x;
        self.cursor_y = first.y;
        self.direction = first.direction;
        self.show_answers = false;
        self.score = None;
        self.feedback = None;
        self.show_quit_confirm = false;
        self.error_message = None;
        self.state = GameState::Playing;
        true
    }

    pub fn back_to_menu(&mut self) {
        self.state = GameState::Menu;
        self.score = None;
        self.feedback = None;
        self.show_quit_confirm = false;
    }

    /// Step the cursor, skipping over blocked squares until the next
    /// letter cell in that direction, or staying put at the edge.
    pub fn move_cursor(&mut self, dx: i32, dy: i32) {
        let mut x = self.cursor_x as i32;
        let mut y = self.cursor_y as i32;
        loop {
            x += dx;
            y += dy;
            if x < 0 || y < 0 || x >= GRID_SIZE as i32 || y >= GRID_SIZE as i32 {
                return;
            }
            if !self.grid[y as usize][x as usize].is_blank() {
                self.cursor_x = x as usize;
                self.cursor_y = y as usize;
                return;
            }
        }
    }

    pub fn toggle_direction(&mut self) {
        self.direction = self.direction.toggle();
    }

    /// Type one letter at the cursor, then advance along the current
    /// direction while the word continues.
    pub fn enter_letter(&mut self, c: char) {
        if self.state != GameState::Playing || self.show_answers {
            return;
        }
        let (x, y) = (self.cursor_x, self.cursor_y);
        if self.grid[y][x].is_blank() {
            return;
        }

        self.answers[y][x] = Some(c.to_ascii_uppercase());
        self.update_feedback(x, y);

        let (nx, ny) = self.direction.offset(x, y, 1);
        if nx < GRID_SIZE && ny < GRID_SIZE && !self.grid[ny][nx].is_blank() {
            self.cursor_x = nx;
            self.cursor_y = ny;
        }
    }

    /// Clear the cursor cell, or step back along the word when the
    /// cell is already empty.
    pub fn erase(&mut self) {
        if self.state != GameState::Playing || self.show_answers {
            return;
        }
        let (x, y) = (self.cursor_x, self.cursor_y);
        if self.answers[y][x].is_some() {
            self.answers[y][x] = None;
            self.feedback = None;
            return;
        }
        match self.direction {
            Direction::Across if x > 0 && !self.grid[y][x - 1].is_blank() => {
                self.cursor_x = x - 1;
                self.answers[y][x - 1] = None;
            }
            Direction::Down if y > 0 && !self.grid[y - 1][x].is_blank() => {
                self.cursor_y = y - 1;
                self.answers[y - 1][x] = None;
            }
            _ => {}
        }
        self.feedback = None;
    }

    fn update_feedback(&mut self, x: usize, y: usize) {
        for entry in self.entries.iter().filter(|e| e.covers(x, y)) {
            if let Some(fb) = check_word(&self.answers, entry) {
                self.feedback = Some(fb);
            }
        }
    }

    pub fn check_answers(&mut self) {
        self.score = Some(score_answers(&self.grid, &self.answers, &self.entries));
    }

    pub fn toggle_reveal(&mut self) {
        self.show_answers = !self.show_answers;
    }

    pub fn progress(&self) -> (u32, u32) {
        fill_progress(&self.grid, &self.answers)
    }

    /// The placed entry the cursor sits on, preferring the current
    /// typing direction; used for clue and cell highlighting.
    pub fn active_entry(&self) -> Option<&ClueEntry> {
        let covering = |e: &&ClueEntry| e.covers(self.cursor_x, self.cursor_y);
        self.entries
            .iter()
            .filter(covering)
            .find(|e| e.placement.map(|p| p.direction) == Some(self.direction))
            .or_else(|| self.entries.iter().find(covering))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossword_core::Cell;

    fn raw(clue: &str, answer: &str) -> RawClue {
        RawClue {
            clue: clue.to_string(),
            answer: answer.to_string(),
            direction: Direction::Across,
        }
    }

    fn started_game() -> Game {
        let mut game = Game::new();
        assert!(game.start_puzzle(vec![
            raw("feline", "CAT"),
            raw("vehicle", "CAR"),
            raw("painting", "ART"),
        ]));
        game
    }

    #[test]
    fn start_puzzle_positions_cursor_on_word_one() {
        let game = started_game();
        assert_eq!(game.state, GameState::Playing);

        let first = game
            .entries
            .iter()
            .find(|e| e.placement.map(|p| p.number) == Some(1))
            .unwrap()
            .placement
            .unwrap();
        assert_eq!((game.cursor_x, game.cursor_y), (first.x, first.y));
        assert_eq!(game.direction, first.direction);
    }

    #[test]
    fn start_puzzle_drops_invalid_clues_quietly() {
        let mut game = Game::new();
        assert!(game.start_puzzle(vec![raw("feline", "CAT"), raw("bad", "a1"), raw("", "")]));
        assert_eq!(game.entries.len(), 1);
    }

    #[test]
    fn start_puzzle_with_no_usable_clues_stays_on_menu() {
        let mut game = Game::new();
        assert!(!game.start_puzzle(vec![raw("bad", "x"), raw("worse", "1234")]));
        assert_eq!(game.state, GameState::Menu);
        assert!(game.error_message.is_some());
    }

    #[test]
    fn typing_fills_and_advances_along_the_word() {
        let mut game = started_game();
        let entry = game.active_entry().unwrap().clone();
        let (x0, y0) = entry.cell(0).unwrap();
        let (x1, y1) = entry.cell(1).unwrap();

        game.enter_letter('c');
        assert_eq!(game.answers[y0][x0], Some('C'));
        assert_eq!((game.cursor_x, game.cursor_y), (x1, y1));
    }

    #[test]
    fn completing_a_word_sets_feedback() {
        let mut game = started_game();
        let entry = game.active_entry().unwrap().clone();

        for c in entry.answer.chars() {
            game.enter_letter(c);
        }
        let fb = game.feedback.clone().unwrap();
        assert_eq!(fb.word, entry.answer);
        assert!(fb.correct);
    }

    #[test]
    fn cursor_never_lands_on_a_blank_cell() {
        let mut game = started_game();
        for _ in 0..40 {
            game.move_cursor(1, 0);
            game.move_cursor(0, 1);
            let cell = game.grid[game.cursor_y][game.cursor_x];
            assert_ne!(cell, Cell::Blank);
        }
    }

    #[test]
    fn reveal_mode_blocks_input() {
        let mut game = started_game();
        let (x, y) = (game.cursor_x, game.cursor_y);

        game.toggle_reveal();
        game.enter_letter('z');
        assert_eq!(game.answers[y][x], None);

        game.toggle_reveal();
        game.enter_letter('z');
        assert_eq!(game.answers[y][x], Some('Z'));
    }

    #[test]
    fn check_answers_scores_the_session() {
        let mut game = started_game();
        for entry in game.entries.clone() {
            if !entry.is_placed() {
                continue;
            }
            for (i, c) in entry.answer.chars().enumerate() {
                let (x, y) = entry.cell(i).unwrap();
                game.answers[y][x] = Some(c);
            }
        }

        game.check_answers();
        let report = game.score.clone().unwrap();
        assert_eq!(report.percentage, 100);
        assert_eq!(game.progress(), (report.total, report.total));
    }
}
