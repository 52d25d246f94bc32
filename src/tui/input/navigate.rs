use crossterm::event::{KeyCode, KeyEvent};

use crate::model::{Filter, Intent};
use crate::tui::app::{App, Focus};

/// Keys while the task list has focus
pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,

        // Back to the input box
        KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Tab | KeyCode::Esc => {
            app.focus = Focus::Input;
        }

        // Cursor
        KeyCode::Char('j') | KeyCode::Down => move_cursor(app, 1),
        KeyCode::Char('k') | KeyCode::Up => {
            if app.cursor == 0 {
                app.focus = Focus::Input;
            } else {
                move_cursor(app, -1);
            }
        }
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.cursor = app.projection().visible.len().saturating_sub(1);
        }

        // Task actions
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('x') => {
            if let Some(id) = app.cursor_task_id() {
                app.dispatch(Intent::Toggle(id));
            }
        }
        KeyCode::Char('d') | KeyCode::Delete | KeyCode::Backspace => {
            if let Some(id) = app.cursor_task_id() {
                app.dispatch(Intent::Delete(id));
            }
        }
        KeyCode::Char('c') => {
            app.dispatch(Intent::ClearCompleted);
        }

        // Filters
        KeyCode::Char('1') => select_filter(app, Filter::All),
        KeyCode::Char('2') => select_filter(app, Filter::Active),
        KeyCode::Char('3') => select_filter(app, Filter::Completed),
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Char('f') => {
            let next = app.store.state().filter().next();
            select_filter(app, next);
        }
        KeyCode::Char('h') | KeyCode::Left => {
            let prev = app.store.state().filter().prev();
            select_filter(app, prev);
        }
        _ => {}
    }
}

/// Move the cursor by `delta`, clamped to the visible list
fn move_cursor(app: &mut App, delta: isize) {
    let len = app.projection().visible.len();
    if len == 0 {
        app.cursor = 0;
        return;
    }
    let target = app.cursor.saturating_add_signed(delta);
    app.cursor = target.min(len - 1);
}

/// Switch filters, keeping the cursor on the same task when it stays visible
fn select_filter(app: &mut App, filter: Filter) {
    let current = app.cursor_task_id();
    app.dispatch(Intent::SelectFilter(filter));
    match current {
        Some(id) if app.store.state().find(id).is_some_and(|t| filter.matches(t)) => {
            app.select_task(id);
        }
        _ => app.cursor = 0,
    }
}
