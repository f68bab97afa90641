//! Layout definitions for the TUI
//!
//! A single card centred over the background: title, the two inputs, the
//! add button and the expense list, with a status bar underneath.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Bordered card holding the form and the list
    pub card: Rect,
    pub title: Rect,
    pub description: Rect,
    pub amount: Rect,
    pub add_button: Rect,
    pub list: Rect,
    /// Status bar at the bottom of the screen
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Card
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        // The card takes 90% of the width
        let card = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(5),
                Constraint::Percentage(90),
                Constraint::Percentage(5),
            ])
            .split(vertical[0])[1];

        let inner = Rect {
            x: card.x.saturating_add(1),
            y: card.y.saturating_add(1),
            width: card.width.saturating_sub(2),
            height: card.height.saturating_sub(2),
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Title
                Constraint::Length(3), // Description
                Constraint::Length(3), // Amount
                Constraint::Length(3), // Add button
                Constraint::Min(3),    // List
            ])
            .split(inner);

        Self {
            card,
            title: chunks[0],
            description: chunks[1],
            amount: chunks[2],
            add_button: chunks[3],
            list: chunks[4],
            status_bar: vertical[1],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

/// Rect in the top-right corner of `r` for toasts
pub fn top_right_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect::new(r.x + r.width - width, r.y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_regions_stack_vertically() {
        let layout = AppLayout::new(Rect::new(0, 0, 100, 40));

        assert_eq!(layout.status_bar, Rect::new(0, 39, 100, 1));
        assert_eq!(layout.card.width, 90);
        assert!(layout.title.y < layout.description.y);
        assert!(layout.description.y < layout.amount.y);
        assert!(layout.amount.y < layout.add_button.y);
        assert!(layout.add_button.y < layout.list.y);
        assert_eq!(layout.description.height, 3);
    }

    #[test]
    fn test_centered_rect_fixed_clamps() {
        let area = Rect::new(0, 0, 20, 5);
        assert_eq!(centered_rect_fixed(50, 7, area), Rect::new(0, 0, 20, 5));
        assert_eq!(centered_rect_fixed(10, 3, area), Rect::new(5, 1, 10, 3));
    }

    #[test]
    fn test_top_right_rect() {
        let area = Rect::new(2, 1, 40, 10);
        assert_eq!(top_right_rect(10, 3, area), Rect::new(32, 1, 10, 3));
    }
}
