//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::output::formatters::{format_grid, percent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(5), // Grid
            Constraint::Min(8),    // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_grid(f, app, chunks[1]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);

    render_words_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 TARGET UA - find the words")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let content = vec![
        Line::from(Span::styled(
            format_grid(&app.round.letters),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::raw("Part of speech: "),
            Span::styled(
                app.round.part.name(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let grid = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" Round ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn render_words_panel(f: &mut Frame, app: &App, area: Rect) {
    let correct = app.verdict.as_ref().map(|v| v.correct.as_slice());

    let items: Vec<ListItem> = app
        .submitted
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let style = match correct {
                Some(correct) if correct.contains(word) => Style::default().fg(Color::Green),
                Some(_) => Style::default().fg(Color::Red),
                None => Style::default().fg(Color::White),
            };
            ListItem::new(format!("{:>2}. {word}", i + 1)).style(style)
        })
        .collect();

    let title = format!(" Your words ({}) ", app.submitted.len());
    let list = List::new(items).block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    if app.verdict.is_some() {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Score gauge
                Constraint::Min(3),    // Missed words
                Constraint::Length(7), // Messages
            ])
            .split(area);

        render_score(f, app, chunks[0]);
        render_missed(f, app, chunks[1]);
        render_messages(f, app, chunks[2]);
    } else {
        render_messages(f, app, area);
    }
}

fn render_score(f: &mut Frame, app: &App, area: Rect) {
    let Some(verdict) = app.verdict.as_ref() else {
        return;
    };

    let found = verdict.score();
    let total = found + verdict.missed.len();
    let ratio = if total == 0 {
        0.0
    } else {
        found as f64 / total as f64
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Score ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{found}/{total} words ({}%)", percent(found, total)));

    f.render_widget(gauge, area);
}

fn render_missed(f: &mut Frame, app: &App, area: Rect) {
    let missed = app
        .verdict
        .as_ref()
        .map(|v| v.missed.join(", "))
        .unwrap_or_default();

    let paragraph = Paragraph::new(missed)
        .style(Style::default().fg(Color::Yellow))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" More words ")
                .borders(Borders::ALL),
        );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Results => (
            " Round over | Press 'n' for a new round or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Typing => (
            " Enter a word | Space: add | Enter on empty: finish ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    let rounds = Paragraph::new(format!("Rounds: {}", app.stats.rounds))
        .alignment(Alignment::Center);
    f.render_widget(rounds, chunks[0]);

    let found = app.stats.words_found;
    let seen = found + app.stats.words_missed;
    let score = Paragraph::new(format!("Found: {found}/{seen} ({}%)", percent(found, seen)))
        .alignment(Alignment::Center);
    f.render_widget(score, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::Typing => "Esc: Quit | Backspace on empty: Undo",
        InputMode::Results => "q: Quit | n: New Round",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
