//! TUI Views module
//!
//! The screen is drawn from `&App` only, so drawing never changes state and
//! drawing twice without an event in between produces the same frame.

pub mod expense_list;
pub mod form;
pub mod status_bar;

use ratatui::{
    style::Style,
    widgets::{Block, Borders},
    Frame,
};

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::{top_right_rect, AppLayout};
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let layout = AppLayout::new(area);
    let view = app.view();

    // Background stands in for the decorative image
    frame.render_widget(Block::default().style(Style::default().bg(app.fill_color)), area);

    let card = Block::default()
        .borders(Borders::ALL)
        .style(Style::default().bg(ratatui::style::Color::Black));
    frame.render_widget(card, layout.card);

    form::render_title(frame, &view.title, layout.title);
    form::render_inputs(frame, app, layout.description, layout.amount);
    form::render_add_button(frame, app, layout.add_button);
    expense_list::render(frame, app, &view.rows, layout.list);
    status_bar::render(frame, app, layout.status_bar);

    if let Some(notification) = app.notifications.current() {
        let toast_area = top_right_rect(40, 3, layout.card);
        frame.render_widget(NotificationWidget::new(notification), toast_area);
    }

    match &app.active_dialog {
        ActiveDialog::Alert(message) => dialogs::alert::render(frame, message),
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::None => {}
    }
}
