use std::io;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use futures_util::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::game::{Game, GameState};
use crate::net::PuzzleClient;
use crate::ui;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async_run())
}

async fn async_run() -> Result<(), Box<dyn std::error::Error>> {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut game = Game::new();
    let result = run_loop(&mut terminal, &mut game).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    game: &mut Game,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut event_stream = EventStream::new();
    let tick_rate = Duration::from_millis(250);

    loop {
        terminal.draw(|f| ui::draw(f, game))?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                if let Some(Ok(Event::Key(key))) = maybe_event {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if handle_key(game, key).await {
                        return Ok(());
                    }
                }
            }
            _ = tokio::time::sleep(tick_rate) => {}
        }
    }
}

async fn handle_key(game: &mut Game, key: KeyEvent) -> bool {
    match game.state {
        GameState::Menu => handle_menu_key(game, key).await,
        GameState::Playing => handle_playing_key(game, key),
    }
}

async fn handle_menu_key(game: &mut Game, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Up => game.prev_topic(),
        KeyCode::Down => game.next_topic(),
        KeyCode::Left => game.difficulty = game.difficulty.prev(),
        KeyCode::Right => game.difficulty = game.difficulty.next(),
        KeyCode::Enter => {
            // One-shot call-and-wait: a failure here aborts the whole
            // attempt and leaves the menu up for a retry.
            game.loading = true;
            game.error_message = None;
            match PuzzleClient::generate(game.topic(), game.difficulty).await {
                Ok(clues) => {
                    game.start_puzzle(clues);
                }
                Err(e) => {
                    game.error_message = Some(format!("Generation failed: {}", e));
                }
            }
            game.loading = false;
        }
        KeyCode::Char('q') | KeyCode::Esc => return true,
        _ => {}
    }
    false
}

fn handle_playing_key(game: &mut Game, key: KeyEvent) -> bool {
    if game.show_quit_confirm {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => return true,
            _ => game.show_quit_confirm = false,
        }
        return false;
    }

    // A score popup swallows keys until dismissed.
    if game.score.is_some() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
            game.score = None;
        }
        return false;
    }

    match key.code {
        KeyCode::Up => game.move_cursor(0, -1),
        KeyCode::Down => game.move_cursor(0, 1),
        KeyCode::Left => game.move_cursor(-1, 0),
        KeyCode::Right => game.move_cursor(1, 0),
        KeyCode::Tab => game.toggle_direction(),
        KeyCode::Enter => game.check_answers(),
        KeyCode::Delete | KeyCode::Backspace => game.erase(),
        KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            game.toggle_reveal();
        }
        KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            game.back_to_menu();
        }
        KeyCode::Char(c) if c.is_ascii_alphabetic() => game.enter_letter(c),
        KeyCode::Esc => game.show_quit_confirm = true,
        _ => {}
    }
    false
}
