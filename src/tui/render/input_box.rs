use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, Focus};
use crate::util::unicode;

const ADD_BUTTON: &str = " + Add ";

/// Render the bordered draft input with the add button on its right
pub fn render_input_box(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let focused = app.focus == Focus::Input;
    let border_color = if focused {
        app.theme.accent
    } else {
        app.theme.border
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let button_width = ADD_BUTTON.len() as u16;
    let field = if inner.width > button_width + 1 {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(1),
                Constraint::Length(button_width),
            ])
            .split(inner);
        let button = Paragraph::new(ADD_BUTTON).style(
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.accent)
                .add_modifier(Modifier::BOLD),
        );
        frame.render_widget(button, chunks[2]);
        chunks[0]
    } else {
        inner
    };

    let (line, cursor_col) = draft_line(app, field.width as usize);
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), field);

    if focused {
        frame.set_cursor_position((field.x + cursor_col as u16, field.y));
    }
}

/// The visible slice of the draft and the cursor column within it.
/// Scrolls so the cursor stays inside `width`.
fn draft_line(app: &App, width: usize) -> (Line<'_>, usize) {
    let bg = app.theme.background;
    let draft = app.store.state().draft();

    if draft.is_empty() {
        let placeholder = unicode::truncate_to_width(&app.ui.placeholder, width);
        let line = Line::from(Span::styled(
            placeholder,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
        return (line, 0);
    }

    let cursor = if draft.is_char_boundary(app.draft_cursor) {
        app.draft_cursor
    } else {
        draft.len()
    };
    let (before, after) = draft.split_at(cursor);
    let before = unicode::display_safe(before);
    let after = unicode::display_safe(after);
    let shown_before = unicode::tail_to_width(&before, width.saturating_sub(1));
    let before_width = unicode::display_width(shown_before);
    let shown_after = unicode::truncate_to_width(&after, width.saturating_sub(before_width));

    let text_style = Style::default().fg(app.theme.text_bright).bg(bg);
    let line = Line::from(vec![
        Span::styled(shown_before.to_string(), text_style),
        Span::styled(shown_after, text_style),
    ]);
    (line, before_width)
}
