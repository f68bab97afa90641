//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! The expense list and drafts live in the [`ExpenseTracker`]; the text
//! inputs only add cursor state and are kept in sync with the drafts.

use ratatui::style::Color;
use tracing::warn;

use crate::config::Settings;
use crate::models::ExpenseId;
use crate::services::{ExpenseTracker, TrackerView};

use super::widgets::{Notification, NotificationQueue, TextInput};

/// Which control currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedField {
    #[default]
    Description,
    Amount,
    AddButton,
    List,
}

impl FocusedField {
    /// Get the next control (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Description => Self::Amount,
            Self::Amount => Self::AddButton,
            Self::AddButton => Self::List,
            Self::List => Self::Description,
        }
    }

    /// Get the previous control (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Description => Self::List,
            Self::Amount => Self::Description,
            Self::AddButton => Self::Amount,
            Self::List => Self::AddButton,
        }
    }
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    /// Blocking message that must be dismissed
    Alert(String),
    Help,
}

/// Main application state
pub struct App {
    /// Expense list and drafts
    pub tracker: ExpenseTracker,

    /// Description field, bound to the description draft
    pub description_input: TextInput,

    /// Amount field, bound to the amount draft
    pub amount_input: TextInput,

    /// Which control has focus
    pub focused: FocusedField,

    /// Selected row in the expense list
    pub selected_index: usize,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Toasts for completed operations
    pub notifications: NotificationQueue,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Colour painted where the background image would be
    pub fill_color: Color,

    /// Decorative background image reference
    pub background_url: Option<String>,
}

impl App {
    /// Create a new App instance from settings
    pub fn new(settings: &Settings) -> Self {
        let fill_color = settings
            .background
            .fill_color
            .parse::<Color>()
            .unwrap_or_else(|_| {
                warn!(color = %settings.background.fill_color, "unknown fill colour, using terminal default");
                Color::Reset
            });

        let mut app = Self::with_tracker(ExpenseTracker::new().with_title(settings.title.clone()));
        app.fill_color = fill_color;
        app.background_url = settings.background.image_url.clone();
        app
    }

    /// Create an App around an existing tracker
    pub fn with_tracker(tracker: ExpenseTracker) -> Self {
        let mut app = Self {
            tracker,
            description_input: TextInput::new().placeholder("Description"),
            amount_input: TextInput::new().placeholder("Amount"),
            focused: FocusedField::default(),
            selected_index: 0,
            active_dialog: ActiveDialog::default(),
            notifications: NotificationQueue::new(),
            should_quit: false,
            fill_color: Color::Reset,
            background_url: None,
        };
        app.load_drafts();
        app.focus(FocusedField::Description);
        app
    }

    /// Projection of the tracker the screen is drawn from
    pub fn view(&self) -> TrackerView {
        self.tracker.view()
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Move focus to a control
    pub fn focus(&mut self, field: FocusedField) {
        self.focused = field;
        self.description_input.focused = field == FocusedField::Description;
        self.amount_input.focused = field == FocusedField::Amount;
    }

    pub fn focus_next(&mut self) {
        self.focus(self.focused.next());
    }

    pub fn focus_prev(&mut self) {
        self.focus(self.focused.prev());
    }

    /// Apply an edit to the focused text input and push it into the drafts
    pub fn edit_focused_input(&mut self, edit: impl FnOnce(&mut TextInput)) {
        match self.focused {
            FocusedField::Description => {
                edit(&mut self.description_input);
                self.tracker
                    .set_description_draft(self.description_input.value());
            }
            FocusedField::Amount => {
                edit(&mut self.amount_input);
                self.tracker.set_amount_draft(self.amount_input.value());
            }
            FocusedField::AddButton | FocusedField::List => {}
        }
    }

    /// Reload both inputs from the tracker's drafts
    fn load_drafts(&mut self) {
        self.description_input
            .set_content(self.tracker.description_draft());
        self.amount_input.set_content(self.tracker.amount_draft());
    }

    /// Trigger the add operation
    ///
    /// A rejected add opens a blocking alert with the error message.
    pub fn add_expense(&mut self) {
        let outcome = self
            .tracker
            .add_expense()
            .map(|expense| expense.description.clone());

        match outcome {
            Ok(description) => {
                self.load_drafts();
                self.notifications
                    .push(Notification::success(format!("Added {}", description)));
            }
            Err(err) => self.open_dialog(ActiveDialog::Alert(err.to_string())),
        }
    }

    /// Trigger the delete operation for one expense
    pub fn delete_expense(&mut self, id: ExpenseId) {
        if let Some(removed) = self.tracker.delete_expense(&id) {
            self.notifications
                .push(Notification::info(format!("Deleted {}", removed.description)));
            self.clamp_selection();
        }
    }

    /// Delete the expense on the selected row
    pub fn delete_selected(&mut self) {
        if let Some(id) = self.tracker.get(self.selected_index).map(|e| e.id) {
            self.delete_expense(id);
        }
    }

    fn clamp_selection(&mut self) {
        self.selected_index = self
            .selected_index
            .min(self.tracker.len().saturating_sub(1));
    }

    /// Move list selection up
    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Move list selection down
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.tracker.len() {
            self.selected_index += 1;
        }
    }

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Periodic housekeeping
    pub fn on_tick(&mut self) {
        self.notifications.remove_expired();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::with_tracker(ExpenseTracker::with_seed(11))
    }

    fn type_into(app: &mut App, field: FocusedField, text: &str) {
        app.focus(field);
        for c in text.chars() {
            app.edit_focused_input(|input| input.insert(c));
        }
    }

    #[test]
    fn test_focus_cycle() {
        let mut app = app();
        assert_eq!(app.focused, FocusedField::Description);
        assert!(app.description_input.focused);

        app.focus_next();
        assert_eq!(app.focused, FocusedField::Amount);
        assert!(!app.description_input.focused);
        assert!(app.amount_input.focused);

        app.focus_prev();
        app.focus_prev();
        assert_eq!(app.focused, FocusedField::List);
    }

    #[test]
    fn test_typing_updates_drafts() {
        let mut app = app();
        type_into(&mut app, FocusedField::Description, "Coffee");
        type_into(&mut app, FocusedField::Amount, "4.5");

        assert_eq!(app.tracker.description_draft(), "Coffee");
        assert_eq!(app.tracker.amount_draft(), "4.5");
    }

    #[test]
    fn test_add_clears_inputs_and_notifies() {
        let mut app = app();
        type_into(&mut app, FocusedField::Description, "Coffee");
        type_into(&mut app, FocusedField::Amount, "4.5");

        app.add_expense();

        assert_eq!(app.tracker.len(), 1);
        assert_eq!(app.description_input.value(), "");
        assert_eq!(app.amount_input.value(), "");
        assert!(!app.has_dialog());
        assert_eq!(app.notifications.current().unwrap().message, "Added Coffee");
    }

    #[test]
    fn test_add_missing_field_opens_single_alert() {
        let mut app = app();
        type_into(&mut app, FocusedField::Amount, "10");

        app.add_expense();

        assert!(app.tracker.is_empty());
        assert_eq!(
            app.active_dialog,
            ActiveDialog::Alert("Please enter all fields".into())
        );
        assert!(app.notifications.is_empty());
        assert_eq!(app.amount_input.value(), "10");
    }

    #[test]
    fn test_delete_selected_clamps_selection() {
        let mut app = app();
        for name in ["a", "b"] {
            type_into(&mut app, FocusedField::Description, name);
            type_into(&mut app, FocusedField::Amount, "1");
            app.add_expense();
        }
        app.move_down();
        assert_eq!(app.selected_index, 1);

        app.delete_selected();

        assert_eq!(app.tracker.len(), 1);
        assert_eq!(app.tracker.expenses()[0].description, "a");
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_delete_on_empty_list_is_noop() {
        let mut app = app();
        app.delete_selected();
        app.delete_expense(ExpenseId::new());
        assert!(app.tracker.is_empty());
        assert!(app.notifications.is_empty());
    }

    #[test]
    fn test_settings_drive_title_and_background() {
        let mut settings = Settings::default();
        settings.title = "Trip".into();
        settings.background.fill_color = "blue".into();

        let app = App::new(&settings);

        assert_eq!(app.view().title, "Trip");
        assert_eq!(app.fill_color, Color::Blue);
        assert!(app.background_url.is_some());
    }

    #[test]
    fn test_unknown_fill_color_falls_back() {
        let mut settings = Settings::default();
        settings.background.fill_color = "not-a-colour".into();

        assert_eq!(App::new(&settings).fill_color, Color::Reset);
    }
}
