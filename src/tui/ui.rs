//! Rendering for the terminal client.
//!
//! The play field maps the 800x600 logical canvas onto whatever inner
//! area the terminal gives us; all game math stays in logical units.

use crate::game::{CANVAS_HEIGHT, CANVAS_WIDTH, FallingWord};
use crate::words::Difficulty;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use strum::IntoEnumIterator;

use super::app::{App, Screen};

/// Draws the current screen.
pub fn draw(f: &mut Frame, app: &App) {
    match app.screen() {
        Screen::Menu => draw_menu(f, app),
        Screen::Loading => draw_loading(f, app),
        Screen::Playing => draw_play(f, app),
        Screen::GameOver => draw_game_over(f, app),
    }
}

fn draw_menu(f: &mut Frame, app: &App) {
    let mut lines = vec![
        Line::from(Span::styled(
            "W O R D F A L L",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Type the falling words before they hit the ground."),
        Line::from(""),
    ];
    for (i, tier) in Difficulty::iter().enumerate() {
        let label = format!("  {}. {}", i + 1, tier);
        if app.cursor_on(i) {
            lines.push(Line::from(Span::styled(
                format!("> {}", label.trim_start()),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )));
        } else {
            lines.push(Line::from(label));
        }
    }
    lines.push(Line::from(""));
    if let Some(error) = app.error() {
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red),
        )));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(
        "Up/Down or 1-3 to choose, Enter to play, q to quit",
    ));

    let paragraph = Paragraph::new(lines)
        .block(Block::default().title("Wordfall").borders(Borders::ALL))
        .centered();
    f.render_widget(paragraph, f.area());
}

fn draw_loading(f: &mut Frame, app: &App) {
    let text = format!(
        "Fetching {} words...\n\nEsc to cancel",
        app.session().difficulty()
    );
    let paragraph = Paragraph::new(text)
        .block(Block::default().title("Wordfall").borders(Borders::ALL))
        .centered();
    f.render_widget(paragraph, f.area());
}

fn draw_play(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(3)])
        .split(f.area());

    let title = format!(
        " Score: {}  Level: {}  (Esc for menu) ",
        app.session().score(),
        app.session().difficulty()
    );
    let field_block = Block::default().title(title).borders(Borders::ALL);
    let inner = field_block.inner(chunks[0]);
    f.render_widget(field_block, chunks[0]);
    f.render_widget(
        Paragraph::new(field_lines(app.session().words(), inner)),
        inner,
    );

    let typed = Paragraph::new(Line::from(vec![
        Span::from("> "),
        Span::styled(
            app.session().typed().to_string(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
    ]))
    .block(Block::default().title(" typed ").borders(Borders::ALL));
    f.render_widget(typed, chunks[1]);
}

/// Rasterizes the falling words into one text line per terminal row.
fn field_lines(words: &[FallingWord], area: Rect) -> Vec<Line<'static>> {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return Vec::new();
    }
    let mut rows = vec![vec![b' '; width]; height];
    for word in words {
        let row = ((word.y / CANVAS_HEIGHT) * height as f32) as usize;
        let col = ((word.x / CANVAS_WIDTH) * width as f32) as usize;
        let Some(row) = rows.get_mut(row.min(height - 1)) else {
            continue;
        };
        let col = col.min(width.saturating_sub(1));
        for (i, byte) in word.text.bytes().enumerate() {
            if col + i >= width {
                break;
            }
            row[col + i] = byte;
        }
    }
    rows.into_iter()
        .map(|row| Line::from(String::from_utf8_lossy(&row).into_owned()))
        .collect()
}

fn draw_game_over(f: &mut Frame, app: &App) {
    let text = format!(
        "Game Over!\n\nFinal Score: {}\n\nr to restart, m for menu, q to quit",
        app.final_score()
    );
    let paragraph = Paragraph::new(text)
        .block(Block::default().title("Wordfall").borders(Borders::ALL))
        .centered();
    f.render_widget(paragraph, f.area());
}
