mod edit;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Focus};

use edit::{handle_edit, insert_at_cursor};
use navigate::handle_navigate;

/// Handle a key event for the focused region
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
    {
        app.should_quit = true;
        return;
    }

    // Help overlay intercepts all input
    if app.show_help {
        if matches!(
            key.code,
            KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Esc
        ) {
            app.show_help = false;
        }
        return;
    }

    match app.focus {
        Focus::Input => handle_edit(app, key),
        Focus::List => handle_navigate(app, key),
    }
}

/// Handle a bracketed paste event (terminal sends pasted text as a single string).
/// Only active while the input box has focus; newlines and tabs become spaces.
pub fn handle_paste(app: &mut App, text: &str) {
    if app.focus != Focus::Input || text.is_empty() {
        return;
    }
    let clean = text.replace("\r\n", " ").replace(['\n', '\r', '\t'], " ");
    insert_at_cursor(app, &clean);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Config, Filter, TaskId};
    use crossterm::event::KeyEventKind;
    use pretty_assertions::assert_eq;

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, c: char) {
        handle_key(app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn texts(app: &App) -> Vec<String> {
        app.projection()
            .visible
            .iter()
            .map(|t| t.text.clone())
            .collect()
    }

    #[test]
    fn typing_and_enter_adds_task() {
        let mut app = App::new(&Config::default());
        type_str(&mut app, "Buy milk");
        assert_eq!(app.store.state().draft(), "Buy milk");
        assert_eq!(app.draft_cursor, 8);

        press(&mut app, KeyCode::Enter);
        assert_eq!(texts(&app), vec!["Buy milk"]);
        assert_eq!(app.store.state().draft(), "");
        assert_eq!(app.draft_cursor, 0);
        assert_eq!(app.focus, Focus::Input);
    }

    #[test]
    fn enter_on_blank_draft_keeps_it() {
        let mut app = App::new(&Config::default());
        type_str(&mut app, "   ");
        press(&mut app, KeyCode::Enter);
        assert!(app.store.state().tasks().is_empty());
        assert_eq!(app.store.state().draft(), "   ");
    }

    #[test]
    fn end_to_end_filter_scenario() {
        let mut app = App::new(&Config::default());
        type_str(&mut app, "Buy milk");
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "Walk dog");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::List);
        press(&mut app, KeyCode::Char('g'));
        press(&mut app, KeyCode::Char(' '));
        assert!(app.store.state().find(TaskId(1)).unwrap().completed);

        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.store.state().filter(), Filter::Active);
        assert_eq!(texts(&app), vec!["Walk dog"]);

        press(&mut app, KeyCode::Char('3'));
        assert_eq!(texts(&app), vec!["Buy milk"]);
        assert_eq!(app.projection().items_left(), "1 item left");
    }

    #[test]
    fn list_keys_delete_and_clear() {
        let mut app = App::new(&Config::default());
        for text in ["a", "b", "c"] {
            type_str(&mut app, text);
            press(&mut app, KeyCode::Enter);
        }
        press(&mut app, KeyCode::Esc);
        // Cursor follows the last added task
        assert_eq!(app.cursor, 2);
        press(&mut app, KeyCode::Char('g'));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(texts(&app), vec!["a", "c"]);

        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(texts(&app), vec!["a"]);
    }

    #[test]
    fn ctrl_c_quits_from_input() {
        let mut app = App::new(&Config::default());
        ctrl(&mut app, 'c');
        assert!(app.should_quit);
    }

    #[test]
    fn q_types_in_input_but_quits_in_list() {
        let mut app = App::new(&Config::default());
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.store.state().draft(), "q");

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn help_overlay_swallows_keys() {
        let mut app = App::new(&Config::default());
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }

    #[test]
    fn release_modifier_is_ignored() {
        let mut app = App::new(&Config::default());
        let key = KeyEvent::new_with_kind(
            KeyCode::Modifier(crossterm::event::ModifierKeyCode::LeftShift),
            KeyModifiers::SHIFT,
            KeyEventKind::Press,
        );
        handle_key(&mut app, key);
        assert_eq!(app.store.state().draft(), "");
    }

    #[test]
    fn paste_flattens_newlines() {
        let mut app = App::new(&Config::default());
        type_str(&mut app, "ab");
        press(&mut app, KeyCode::Left);
        handle_paste(&mut app, "x\ny\r\nz");
        assert_eq!(app.store.state().draft(), "ax y zb");
        assert_eq!(app.draft_cursor, 6);
    }

    #[test]
    fn pasted_tab_becomes_space() {
        let mut app = App::new(&Config::default());
        handle_paste(&mut app, "a\tb");
        press(&mut app, KeyCode::Enter);
        assert_eq!(texts(&app), vec!["a b"]);
    }

    #[test]
    fn paste_ignored_in_list() {
        let mut app = App::new(&Config::default());
        press(&mut app, KeyCode::Tab);
        handle_paste(&mut app, "hello");
        assert_eq!(app.store.state().draft(), "");
    }
}
