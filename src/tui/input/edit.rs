use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::Intent;
use crate::tui::app::{App, Focus};
use crate::util::unicode;

/// Keys while the input box has focus
pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Enter => submit(app),
        KeyCode::Tab | KeyCode::Esc | KeyCode::Down => app.focus = Focus::List,

        KeyCode::Char('u') if ctrl => set_draft(app, String::new(), 0),
        KeyCode::Char('w') if ctrl => delete_word_back(app),
        KeyCode::Backspace if alt => delete_word_back(app),
        KeyCode::Char('a') if ctrl => app.draft_cursor = 0,
        KeyCode::Char('e') if ctrl => app.draft_cursor = draft(app).len(),
        KeyCode::Char(c) if !ctrl && !alt => {
            let mut buf = [0u8; 4];
            insert_at_cursor(app, c.encode_utf8(&mut buf));
        }

        KeyCode::Backspace => delete_back(app),
        KeyCode::Delete => delete_forward(app),
        KeyCode::Left => {
            if let Some(prev) = unicode::prev_grapheme_boundary(draft(app), app.draft_cursor) {
                app.draft_cursor = prev;
            }
        }
        KeyCode::Right => {
            if let Some(next) = unicode::next_grapheme_boundary(draft(app), app.draft_cursor) {
                app.draft_cursor = next;
            }
        }
        KeyCode::Home => app.draft_cursor = 0,
        KeyCode::End => app.draft_cursor = draft(app).len(),
        _ => {}
    }
}

fn draft(app: &App) -> &str {
    app.store.state().draft()
}

/// Replace the whole draft and place the edit cursor
fn set_draft(app: &mut App, text: String, cursor: usize) {
    app.draft_cursor = cursor;
    app.dispatch(Intent::SetDraft(text));
}

/// Insert text at the edit cursor
pub(super) fn insert_at_cursor(app: &mut App, text: &str) {
    let mut buf = draft(app).to_string();
    let at = app.draft_cursor.min(buf.len());
    buf.insert_str(at, text);
    set_draft(app, buf, at + text.len());
}

fn delete_back(app: &mut App) {
    let at = app.draft_cursor;
    if let Some(prev) = unicode::prev_grapheme_boundary(draft(app), at) {
        let mut buf = draft(app).to_string();
        buf.replace_range(prev..at, "");
        set_draft(app, buf, prev);
    }
}

fn delete_forward(app: &mut App) {
    let at = app.draft_cursor;
    if let Some(next) = unicode::next_grapheme_boundary(draft(app), at) {
        let mut buf = draft(app).to_string();
        buf.replace_range(at..next, "");
        set_draft(app, buf, at);
    }
}

fn delete_word_back(app: &mut App) {
    let at = app.draft_cursor;
    let start = unicode::word_boundary_left(draft(app), at);
    if start < at {
        let mut buf = draft(app).to_string();
        buf.replace_range(start..at, "");
        set_draft(app, buf, start);
    }
}

/// Submit the draft; on success the list cursor follows the new task
fn submit(app: &mut App) {
    if app.dispatch(Intent::Submit)
        && let Some(id) = app.store.state().tasks().last().map(|t| t.id)
    {
        app.select_task(id);
    }
}
