//! Status bar view
//!
//! Shows the expense count and key hints for the focused control

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, FocusedField};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let count = app.tracker.len();
    let noun = if count == 1 { "expense" } else { "expenses" };

    let mut spans = vec![
        Span::styled(
            format!(" {} {} ", count, noun),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("│ "),
    ];

    let hints = match app.focused {
        FocusedField::Description | FocusedField::Amount => {
            "Enter:Add  Tab:Next  Esc:List  Ctrl+C:Quit"
        }
        FocusedField::AddButton => "Enter:Add  Tab:Next  ?:Help  Ctrl+C:Quit",
        FocusedField::List => "j/k:Move  d:Delete  a:Add  ?:Help  q:Quit",
    };
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
