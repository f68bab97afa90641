//! Expense list view
//!
//! One row per expense with its Delete trigger. The selected row is the
//! one `d` deletes when the list has focus.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::services::ExpenseRow;
use crate::tui::app::{App, FocusedField};

/// Colour of the delete trigger
pub const DELETE_COLOR: Color = Color::Rgb(0xFF, 0x41, 0x36);

const DELETE_LABEL: &str = "[Delete]";
const HIGHLIGHT_SYMBOL: &str = "▶ ";

/// Render the expense list
pub fn render(frame: &mut Frame, app: &App, rows: &[ExpenseRow], area: Rect) {
    let is_focused = app.focused == FocusedField::List;
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::White
    };

    let block = Block::default()
        .title(format!(" Expenses ({}) ", rows.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if rows.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No expenses yet",
            Style::default().fg(Color::DarkGray),
        ))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    // Right-align the delete trigger inside the row
    let row_width = block
        .inner(area)
        .width
        .saturating_sub(HIGHLIGHT_SYMBOL.chars().count() as u16) as usize;

    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| ListItem::new(row_line(row, row_width)))
        .collect();

    let highlight_style = if is_focused {
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let list = List::new(items)
        .block(block)
        .highlight_style(highlight_style)
        .highlight_symbol(HIGHLIGHT_SYMBOL);

    let mut state = ListState::default();
    state.select(Some(app.selected_index.min(rows.len() - 1)));

    frame.render_stateful_widget(list, area, &mut state);
}

/// Build one row with the delete trigger pushed to the right edge
///
/// Padding is measured in terminal columns, so wide characters in the
/// description don't push the trigger out of view.
fn row_line(row: &ExpenseRow, row_width: usize) -> Line<'static> {
    let text = Span::styled(row.text.clone(), Style::default().fg(Color::White));
    let label = Span::styled(DELETE_LABEL, Style::default().fg(DELETE_COLOR));
    let padding = row_width.saturating_sub(text.width() + label.width()).max(1);
    Line::from(vec![text, Span::raw(" ".repeat(padding)), label])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseId;

    fn row(text: &str) -> ExpenseRow {
        ExpenseRow {
            id: ExpenseId::new(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_row_fills_width_exactly() {
        let line = row_line(&row("Tea - $2.00 (User: Bob)"), 40);
        assert_eq!(line.width(), 40);
        assert_eq!(line.spans[2].content, DELETE_LABEL);
    }

    #[test]
    fn test_wide_characters_measured_by_columns() {
        // Each CJK character takes two columns
        let line = row_line(&row("寿司 - $12.00 (User: Bob)"), 40);
        assert_eq!(line.width(), 40);
        assert_eq!(line.spans[1].content.len(), 40 - 25 - DELETE_LABEL.len());
    }

    #[test]
    fn test_overlong_row_keeps_one_space() {
        let line = row_line(&row("A very long description - $1.00 (User: Dave)"), 20);
        assert_eq!(line.spans[1].content, " ");
    }
}
