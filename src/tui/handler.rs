//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the open
//! dialog and the focused control.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{ActiveDialog, App, FocusedField};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key_event(app, key),
        Event::Key(_) => Ok(()),
        // Mouse input is not used; all triggers are reachable from the keyboard
        Event::Mouse(_) => Ok(()),
        Event::Resize(_, _) => Ok(()),
        Event::Tick => {
            app.on_tick();
            Ok(())
        }
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    // Focus navigation works from every control
    match key.code {
        KeyCode::Tab => {
            app.focus_next();
            return Ok(());
        }
        KeyCode::BackTab => {
            app.focus_prev();
            return Ok(());
        }
        _ => {}
    }

    match app.focused {
        FocusedField::Description | FocusedField::Amount => handle_input_key(app, key),
        FocusedField::AddButton => handle_add_button_key(app, key),
        FocusedField::List => handle_list_key(app, key),
    }
}

/// Handle keys while a dialog is open
///
/// Dialogs are modal: anything but a dismiss key is swallowed.
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::Alert(_) => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                app.close_dialog();
            }
        }
        ActiveDialog::Help => {
            if matches!(
                key.code,
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
            ) {
                app.close_dialog();
            }
        }
        ActiveDialog::None => {}
    }
    Ok(())
}

/// Handle keys in the description and amount fields
fn handle_input_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Enter => app.add_expense(),
        KeyCode::Esc => app.focus(FocusedField::List),
        KeyCode::Down => app.focus_next(),
        KeyCode::Up => app.focus_prev(),
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.edit_focused_input(|input| input.insert(c));
        }
        KeyCode::Backspace => app.edit_focused_input(|input| input.backspace()),
        KeyCode::Delete => app.edit_focused_input(|input| input.delete()),
        KeyCode::Left => app.edit_focused_input(|input| input.move_left()),
        KeyCode::Right => app.edit_focused_input(|input| input.move_right()),
        KeyCode::Home => app.edit_focused_input(|input| input.move_start()),
        KeyCode::End => app.edit_focused_input(|input| input.move_end()),
        _ => {}
    }
    Ok(())
}

/// Handle keys on the Add Expense button
fn handle_add_button_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => app.add_expense(),
        KeyCode::Down => app.focus_next(),
        KeyCode::Up => app.focus_prev(),
        KeyCode::Esc => app.focus(FocusedField::List),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        _ => {}
    }
    Ok(())
}

/// Handle keys in the expense list
fn handle_list_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.selected_index = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.selected_index = app.tracker.len().saturating_sub(1);
        }
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),
        KeyCode::Char('a') | KeyCode::Char('i') => app.focus(FocusedField::Description),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ExpenseTracker;

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn app() -> App {
        App::with_tracker(ExpenseTracker::with_seed(5))
    }

    fn add(app: &mut App, description: &str, amount: &str) {
        app.focus(FocusedField::Description);
        type_text(app, description);
        press(app, KeyCode::Tab);
        type_text(app, amount);
        press(app, KeyCode::Enter);
    }

    #[test]
    fn test_typing_and_enter_adds_expense() {
        let mut app = app();
        add(&mut app, "Coffee", "4.5");

        assert_eq!(app.tracker.len(), 1);
        let expense = &app.tracker.expenses()[0];
        assert_eq!(expense.description, "Coffee");
        assert_eq!(expense.amount, 4.5);
        assert_eq!(app.tracker.description_draft(), "");
        assert_eq!(app.tracker.amount_draft(), "");
    }

    #[test]
    fn test_q_is_text_inside_inputs() {
        let mut app = app();
        type_text(&mut app, "quiche");
        assert!(!app.should_quit);
        assert_eq!(app.tracker.description_draft(), "quiche");
    }

    #[test]
    fn test_add_button_triggers_add() {
        let mut app = app();
        type_text(&mut app, "Bus");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "2.75");
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused, FocusedField::AddButton);

        press(&mut app, KeyCode::Enter);

        assert_eq!(app.tracker.len(), 1);
    }

    #[test]
    fn test_missing_field_alert_blocks_until_dismissed() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "10");
        press(&mut app, KeyCode::Enter);

        assert!(app.tracker.is_empty());
        assert_eq!(
            app.active_dialog,
            ActiveDialog::Alert("Please enter all fields".into())
        );

        // Typing while the alert is up changes nothing
        type_text(&mut app, "5");
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.tracker.amount_draft(), "10");
        assert_eq!(app.focused, FocusedField::Amount);

        press(&mut app, KeyCode::Enter);
        assert!(!app.has_dialog());
        assert!(app.tracker.is_empty());
    }

    #[test]
    fn test_delete_from_list() {
        let mut app = app();
        add(&mut app, "a", "1");
        add(&mut app, "b", "2");
        add(&mut app, "c", "3");

        app.focus(FocusedField::List);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('d'));

        let remaining: Vec<&str> = app
            .tracker
            .expenses()
            .iter()
            .map(|e| e.description.as_str())
            .collect();
        assert_eq!(remaining, ["a", "c"]);
    }

    #[test]
    fn test_list_navigation_bounds() {
        let mut app = app();
        add(&mut app, "a", "1");
        add(&mut app, "b", "2");
        app.focus(FocusedField::List);

        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected_index, 0);
        press(&mut app, KeyCode::Char('G'));
        assert_eq!(app.selected_index, 1);
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.selected_index, 1);
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_quit_and_help_from_list() {
        let mut app = app();
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.focused, FocusedField::List);

        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.active_dialog, ActiveDialog::Help);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.has_dialog());
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_a_and_i_return_to_form() {
        let mut app = app();
        for key in ['a', 'i'] {
            app.focus(FocusedField::List);
            press(&mut app, KeyCode::Char(key));
            assert_eq!(app.focused, FocusedField::Description);
            assert_eq!(app.tracker.description_draft(), "");
        }
    }

    #[test]
    fn test_ctrl_c_quits_anywhere() {
        let mut app = app();
        app.open_dialog(ActiveDialog::Alert("x".into()));
        handle_event(
            &mut app,
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        )
        .unwrap();
        assert!(app.should_quit);
    }
}
