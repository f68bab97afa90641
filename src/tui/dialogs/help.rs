//! Help dialog
//!
//! Keyboard shortcuts plus the background asset credit

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(70, 80, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines(app))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading("Form"),
        key_line("Tab/S-Tab", "Next / previous control"),
        key_line("Enter", "Add expense"),
        key_line("Esc", "Go to the expense list"),
        Line::from(""),
        heading("Expense List"),
        key_line("j/k", "Move selection down/up"),
        key_line("g/G", "First / last expense"),
        key_line("d/Del", "Delete selected expense"),
        key_line("a/i", "Back to the form"),
        key_line("q", "Quit"),
        Line::from(""),
        key_line("Ctrl+C", "Quit from anywhere"),
    ];

    if let Some(url) = &app.background_url {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Background: {}", url),
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press Esc or ? to close",
        Style::default().fg(Color::DarkGray),
    )));

    lines
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    ))
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
