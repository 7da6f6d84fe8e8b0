//! TUI rendering with ratatui
//!
//! Board, alert line, settings screen and status bar.

use super::app::{App, Screen};
use crate::core::WORD_LEN;
use crate::game::{Difficulty, Grade, MAX_GUESSES, Status};
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(1),  // Alert line
            Constraint::Min(11),    // Board / settings
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_alert(f, app, chunks[1]);

    match app.screen {
        Screen::Game => render_board(f, app, chunks[2]),
        Screen::Settings => render_settings(f, app, chunks[2]),
    }

    render_status(f, app, chunks[3]);
}

fn render_header<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    // Hard mode tints the title crimson
    let title_color = match app.session.difficulty() {
        Difficulty::Normal => Color::White,
        Difficulty::Hard => Color::Red,
    };

    let header = Paragraph::new("L I N G O")
        .style(
            Style::default()
                .fg(title_color)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(header, area);
}

fn render_alert<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let Some(text) = app.session.notice() else {
        return;
    };

    let style = if app.session.status() == Status::Won {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    };

    let alert = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(alert, area);
}

fn render_board<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let board = app.session.board();
    let grades = app.session.grades();
    let current_line = app.session.line();
    let cursor = app.session.cursor();
    let playing = app.session.status() == Status::InProgress;

    let mut lines: Vec<Line> = Vec::with_capacity(MAX_GUESSES * 2);
    for row in 0..MAX_GUESSES {
        let mut spans: Vec<Span> = Vec::with_capacity(WORD_LEN * 2);
        for column in 0..WORD_LEN {
            let letter = board
                .cell(row, column)
                .map_or(' ', |c| c.to_ascii_uppercase());

            let mut style = match grades.grade(row, column) {
                Grade::RightSpot => Style::default().fg(Color::Black).bg(Color::Green),
                Grade::WrongSpot => Style::default().fg(Color::Black).bg(Color::Yellow),
                Grade::None => Style::default().fg(Color::White).bg(Color::DarkGray),
            };
            if playing && row == current_line && column == cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }

            spans.push(Span::styled(format!(" {letter} "), style));
            if column + 1 < WORD_LEN {
                spans.push(Span::raw(" "));
            }
        }
        lines.push(Line::from(spans).alignment(Alignment::Center));
        if row + 1 < MAX_GUESSES {
            lines.push(Line::default());
        }
    }

    let board_widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board_widget, area);
}

fn render_settings<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let item = |mode: Difficulty| {
        let label = mode.as_str().to_uppercase();
        let line = if mode == app.selected {
            Line::from(Span::styled(
                format!("▸ {label}"),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(format!("  {label}"))
        };
        line.alignment(Alignment::Center)
    };

    let lines = vec![
        Line::default(),
        Line::from("Difficulty").alignment(Alignment::Center),
        Line::default(),
        item(Difficulty::Normal),
        item(Difficulty::Hard),
        Line::default(),
        Line::from(app.selected.description()).alignment(Alignment::Center),
        Line::default(),
        Line::from(Span::styled(
            "Enter: apply  |  Esc: back",
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center),
    ];

    let settings = Paragraph::new(lines).block(
        Block::default()
            .title(" Settings ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(settings, area);
}

fn render_status<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let help = match app.session.status() {
        Status::InProgress => "Type letters | Enter: submit | Space: new game | Tab: settings | Esc: quit",
        Status::Won | Status::Lost => "Enter or Space: new game | Tab: settings | Esc: quit",
    };

    let status = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(status, area);
}
