use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Wrap},
    Frame,
};

use crossword_core::{Difficulty, Direction, GRID_SIZE};

use crate::game::{Game, GameState};

// ── Constants ────────────────────────────────────────────────────────────────

// Each cell renders as 4 columns: 2 for the clue number, 1 letter, 1 gap.
const CELL_WIDTH: u16 = 4;
const GRID_WIDTH: u16 = GRID_SIZE as u16 * CELL_WIDTH + 2;
const GRID_HEIGHT: u16 = GRID_SIZE as u16 + 2;
const CLUES_WIDTH: u16 = 36;

// ── Public entry point ───────────────────────────────────────────────────────

pub fn draw(f: &mut Frame, game: &Game) {
    match game.state {
        GameState::Menu => draw_menu(f, game),
        GameState::Playing => draw_playing(f, game),
    }

    if let Some(report) = &game.score {
        draw_score_popup(f, report);
    }

    if game.show_quit_confirm {
        draw_quit_confirm(f);
    }
}

// ── Menu screen ──────────────────────────────────────────────────────────────

fn draw_menu(f: &mut Frame, game: &Game) {
    let area = f.area();

    let chunks = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(13),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(6),
        Constraint::Length(2),
        Constraint::Min(0),
    ])
    .split(center_rect(60, 40, area));

    let banner = [
        r" ██████╗██████╗  ██████╗ ███████╗███████╗",
        r"██╔════╝██╔══██╗██╔═══██╗██╔════╝██╔════╝",
        r"██║     ██████╔╝██║   ██║███████╗███████╗",
        r"██║     ██╔══██╗██║   ██║╚════██║╚════██║",
        r"╚██████╗██║  ██║╚██████╔╝███████║███████║",
        r" ╚═════╝╚═╝  ╚═╝ ╚═════╝ ╚══════╝╚══════╝",
        r"██╗    ██╗ ██████╗ ██████╗ ██████╗ ",
        r"██║    ██║██╔═══██╗██╔══██╗██╔══██╗",
        r"██║ █╗ ██║██║   ██║██████╔╝██║  ██║",
        r"██║███╗██║██║   ██║██╔══██╗██║  ██║",
        r"╚███╔███╔╝╚██████╔╝██║  ██║██████╔╝",
        r" ╚══╝╚══╝  ╚═════╝ ╚═╝  ╚═╝╚═════╝ ",
    ];
    let title_lines: Vec<Line> = banner
        .iter()
        .map(|row| {
            Line::from(Span::styled(
                *row,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ))
        })
        .collect();
    let title = Paragraph::new(title_lines).alignment(Alignment::Center);
    f.render_widget(title, chunks[1]);

    let topic_line = Line::from(vec![
        Span::styled("▲  ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("  {}  ", game.topic()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  ▼", Style::default().fg(Color::DarkGray)),
    ]);
    let topic = Paragraph::new(vec![
        Line::from(Span::styled("Topic", Style::default().fg(Color::White))),
        Line::from(""),
        topic_line,
    ])
    .alignment(Alignment::Center);
    f.render_widget(topic, chunks[3]);

    let diff_color = difficulty_color(game.difficulty);
    let diff_line = Line::from(vec![
        Span::styled("◄  ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("  {}  ", game.difficulty.label()),
            Style::default().fg(diff_color).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  ►", Style::default().fg(Color::DarkGray)),
    ]);
    let difficulty = Paragraph::new(vec![
        Line::from(Span::styled(
            "Difficulty",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        diff_line,
    ])
    .alignment(Alignment::Center);
    f.render_widget(difficulty, chunks[4]);

    let controls = Paragraph::new(vec![
        Line::from(Span::styled(
            "Controls",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
            Span::styled("    Change topic", Style::default().fg(Color::Gray)),
        ]),
        Line::from(vec![
            Span::styled("←/→", Style::default().fg(Color::Yellow)),
            Span::styled("    Change difficulty", Style::default().fg(Color::Gray)),
        ]),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::styled("  Generate puzzle", Style::default().fg(Color::Gray)),
        ]),
        Line::from(vec![
            Span::styled("q", Style::default().fg(Color::Yellow)),
            Span::styled("      Quit", Style::default().fg(Color::Gray)),
        ]),
    ])
    .alignment(Alignment::Center);
    f.render_widget(controls, chunks[6]);

    let status = if game.loading {
        Line::from(Span::styled(
            "Generating puzzle...",
            Style::default().fg(Color::Yellow),
        ))
    } else if let Some(ref msg) = game.error_message {
        Line::from(Span::styled(
            msg.as_str(),
            Style::default().fg(Color::Red),
        ))
    } else {
        Line::from("")
    };
    let status = Paragraph::new(status).alignment(Alignment::Center);
    f.render_widget(status, chunks[7]);
}

// ── Playing screen ───────────────────────────────────────────────────────────

fn draw_playing(f: &mut Frame, game: &Game) {
    let area = f.area();

    let outer = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(area);

    let h_chunks = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(GRID_WIDTH),
        Constraint::Length(2),
        Constraint::Length(CLUES_WIDTH),
        Constraint::Min(0),
    ])
    .split(outer[0]);

    let grid_v = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(GRID_HEIGHT),
        Constraint::Min(0),
    ])
    .split(h_chunks[1]);

    draw_grid(f, game, grid_v[1]);
    draw_clues(f, game, h_chunks[3]);
    draw_status_bar(f, game, outer[1]);
    draw_key_hints(f, outer[2]);
}

fn draw_grid(f: &mut Frame, game: &Game, area: Rect) {
    let active_cells: Vec<(usize, usize)> = game
        .active_entry()
        .map(|e| (0..e.answer_len()).filter_map(|i| e.cell(i)).collect())
        .unwrap_or_default();

    let mut lines: Vec<Line> = Vec::with_capacity(GRID_SIZE);

    for y in 0..GRID_SIZE {
        let mut spans: Vec<Span> = Vec::new();
        for x in 0..GRID_SIZE {
            let cell = game.grid[y][x];

            let Some(solution) = cell.letter() else {
                spans.push(Span::styled(
                    "████",
                    Style::default().fg(Color::DarkGray),
                ));
                continue;
            };

            let is_cursor = (x, y) == (game.cursor_x, game.cursor_y);
            let in_active_word = active_cells.contains(&(x, y));

            let bg = if is_cursor {
                Color::Yellow
            } else if in_active_word {
                Color::DarkGray
            } else {
                Color::Reset
            };
            let number_fg = if is_cursor { Color::Black } else { Color::DarkGray };

            let number_text = match cell.number() {
                Some(n) => format!("{:>2}", n),
                None => "  ".to_string(),
            };
            spans.push(Span::styled(
                number_text,
                Style::default().fg(number_fg).bg(bg),
            ));

            let (letter, letter_fg) = if game.show_answers {
                (solution, Color::Green)
            } else {
                match game.answers[y][x] {
                    Some(c) => (c, Color::Cyan),
                    None if is_cursor => ('·', Color::Black),
                    None => (' ', Color::Reset),
                }
            };
            let letter_fg = if is_cursor && letter != '·' {
                Color::Black
            } else {
                letter_fg
            };
            spans.push(Span::styled(
                format!("{} ", letter),
                Style::default()
                    .fg(letter_fg)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        lines.push(Line::from(spans));
    }

    let mode = if game.show_answers {
        " Crossword (answers revealed) "
    } else {
        " Crossword "
    };
    let block = Block::bordered()
        .title(mode)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Color::White));

    let grid_paragraph = Paragraph::new(lines).block(block);
    f.render_widget(grid_paragraph, area);
}

fn draw_clues(f: &mut Frame, game: &Game, area: Rect) {
    let active_number = game
        .active_entry()
        .and_then(|e| e.placement)
        .map(|p| (p.number, p.direction));

    let mut lines = vec![Line::from("")];

    for direction in [Direction::Across, Direction::Down] {
        lines.push(Line::from(Span::styled(
            format!(" {}", direction.label()),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )));

        let mut section: Vec<_> = game
            .entries
            .iter()
            .filter_map(|e| e.placement.map(|p| (p, e)))
            .filter(|(p, _)| p.direction == direction)
            .collect();
        section.sort_by_key(|(p, _)| p.number);

        if section.is_empty() {
            lines.push(Line::from(Span::styled(
                "  (none)",
                Style::default().fg(Color::DarkGray),
            )));
        }

        for (p, entry) in section {
            let is_active = active_number == Some((p.number, p.direction));
            let style = if is_active {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            lines.push(Line::from(Span::styled(
                format!("  {:>2}. {} ({})", p.number, entry.clue, entry.answer_len()),
                style,
            )));
        }
        lines.push(Line::from(""));
    }

    let block = Block::bordered()
        .title(" Clues ")
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn draw_status_bar(f: &mut Frame, game: &Game, area: Rect) {
    let (filled, total) = game.progress();
    let bar_len = 20usize;
    let bar_filled = if total > 0 {
        (filled as usize * bar_len) / total as usize
    } else {
        0
    };
    let bar = format!(
        "{}{}",
        "█".repeat(bar_filled),
        "░".repeat(bar_len - bar_filled)
    );

    let mut spans = vec![
        Span::styled(" Progress ", Style::default().fg(Color::Gray)),
        Span::styled(bar, Style::default().fg(Color::Cyan)),
        Span::styled(
            format!(" {}/{}  ", filled, total),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("[{}] ", game.direction.label()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    if let Some(ref fb) = game.feedback {
        let (mark, color) = if fb.correct {
            ("✓", Color::Green)
        } else {
            ("✗", Color::Red)
        };
        spans.push(Span::styled(
            format!(" {} {}", mark, fb.word),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
    }

    let bar = Paragraph::new(Line::from(spans));
    f.render_widget(bar, area);
}

fn draw_key_hints(f: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::styled(" ←↑↓→", Style::default().fg(Color::Yellow)),
        Span::styled(" Move  ", Style::default().fg(Color::Gray)),
        Span::styled("a-z", Style::default().fg(Color::Yellow)),
        Span::styled(" Fill  ", Style::default().fg(Color::Gray)),
        Span::styled("Tab", Style::default().fg(Color::Yellow)),
        Span::styled(" Direction  ", Style::default().fg(Color::Gray)),
        Span::styled("Del", Style::default().fg(Color::Yellow)),
        Span::styled(" Erase  ", Style::default().fg(Color::Gray)),
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::styled(" Check  ", Style::default().fg(Color::Gray)),
        Span::styled("^R", Style::default().fg(Color::Yellow)),
        Span::styled(" Reveal  ", Style::default().fg(Color::Gray)),
        Span::styled("^N", Style::default().fg(Color::Yellow)),
        Span::styled(" New  ", Style::default().fg(Color::Gray)),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::styled(" Quit", Style::default().fg(Color::Gray)),
    ]);

    let bar = Paragraph::new(hints).style(Style::default().bg(Color::DarkGray));
    f.render_widget(bar, area);
}

// ── Score popup ──────────────────────────────────────────────────────────────

fn draw_score_popup(f: &mut Frame, report: &crossword_core::validation::ScoreReport) {
    let area = f.area();
    let height = 11 + report.correct_words.len().min(10) as u16;
    let popup = center_rect(44, height, area);

    f.render_widget(Clear, popup);

    let (title, color) = if report.percentage == 100 {
        (" Solved! ", Color::Green)
    } else {
        (" Score ", Color::Yellow)
    };

    let block = Block::bordered()
        .title(title)
        .border_type(BorderType::Double)
        .style(Style::default().fg(color));

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{}%", report.percentage),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Correct cells: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}/{}", report.correct_count, report.total),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
    ];

    if report.correct_words.is_empty() {
        lines.push(Line::from(Span::styled(
            "No complete words yet.",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "Correct words:",
            Style::default().fg(Color::Gray),
        )));
        for word in report.correct_words.iter().take(10) {
            lines.push(Line::from(Span::styled(
                word.clone(),
                Style::default().fg(Color::Green),
            )));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press Enter to continue",
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, popup);
}

// ── Quit confirmation dialog ─────────────────────────────────────────────────

fn draw_quit_confirm(f: &mut Frame) {
    let area = f.area();
    let popup = center_rect(36, 7, area);

    f.render_widget(Clear, popup);

    let block = Block::bordered()
        .title(" Quit? ")
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Color::Red));

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Are you sure you want to quit?",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "Y",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled("/", Style::default().fg(Color::Gray)),
            Span::styled(
                "Enter",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" Yes   ", Style::default().fg(Color::Gray)),
            Span::styled(
                "Any key",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" No", Style::default().fg(Color::Gray)),
        ]),
    ])
    .block(block)
    .alignment(Alignment::Center);

    f.render_widget(text, popup);
}

// ── Layout helpers ───────────────────────────────────────────────────────────

fn center_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vert = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(height),
        Constraint::Min(0),
    ])
    .split(area);

    let horiz = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(width),
        Constraint::Min(0),
    ])
    .split(vert[1]);

    horiz[1]
}

fn difficulty_color(d: Difficulty) -> Color {
    match d {
        Difficulty::Easy => Color::Green,
        Difficulty::Medium => Color::Yellow,
        Difficulty::Hard => Color::Red,
    }
}
