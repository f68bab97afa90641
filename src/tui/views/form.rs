//! Entry form
//!
//! Title, the description and amount inputs, and the Add Expense button.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::{App, FocusedField};

/// Button colour of the add trigger
pub const ADD_COLOR: Color = Color::Rgb(0x00, 0x7B, 0xFF);

/// Render the screen title
pub fn render_title(frame: &mut Frame, title: &str, area: Rect) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        title.to_string(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

/// Render both text inputs
pub fn render_inputs(frame: &mut Frame, app: &App, description: Rect, amount: Rect) {
    frame.render_widget(&app.description_input, description);
    frame.render_widget(&app.amount_input, amount);
}

/// Render the Add Expense button
pub fn render_add_button(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focused == FocusedField::AddButton;
    let style = if focused {
        Style::default()
            .fg(Color::White)
            .bg(ADD_COLOR)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(ADD_COLOR).add_modifier(Modifier::BOLD)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ADD_COLOR));

    let button = Paragraph::new(Span::styled(" Add Expense ", style))
        .alignment(Alignment::Center)
        .block(block);

    frame.render_widget(button, area);
}
