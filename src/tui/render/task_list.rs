use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Task;
use crate::tui::app::{App, Focus};
use crate::util::unicode;

const CHECK_OPEN: &str = "( )";
const CHECK_DONE: &str = "(\u{2713})";
const DELETE_MARK: &str = " \u{00D7} ";

/// Render the filtered task list, or the empty-state label
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let visible_len = app.projection().visible.len();
    app.scroll_offset = scroll_for_cursor(
        app.scroll_offset,
        app.cursor,
        visible_len,
        area.height as usize,
    );

    let app: &App = app;
    let bg = app.theme.background;
    let projection = app.projection();

    if let Some(label) = &projection.empty_label {
        frame.render_widget(Paragraph::new("").style(Style::default().bg(bg)), area);
        let middle = Rect {
            y: area.y + area.height.saturating_sub(1) / 2,
            height: area.height.min(1),
            ..area
        };
        let empty = Paragraph::new(label.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, middle);
        return;
    }

    let show_cursor = app.focus == Focus::List;
    let lines: Vec<Line> = projection
        .visible
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(area.height as usize)
        .map(|(i, task)| task_line(app, task, show_cursor && i == app.cursor, area.width))
        .collect();

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// First visible row so that `cursor` is on screen and no rows are wasted
fn scroll_for_cursor(scroll: usize, cursor: usize, len: usize, height: usize) -> usize {
    if height == 0 || len == 0 {
        return 0;
    }
    let mut scroll = scroll.min(len.saturating_sub(height));
    if cursor < scroll {
        scroll = cursor;
    } else if cursor >= scroll + height {
        scroll = cursor + 1 - height;
    }
    scroll
}

/// ` ( ) text ............ × `
fn task_line<'a>(app: &App, task: &'a Task, is_cursor: bool, width: u16) -> Line<'a> {
    let bg = if is_cursor {
        app.theme.selection_bg
    } else {
        app.theme.background
    };
    let width = width as usize;
    let base = Style::default().bg(bg);

    let (check, check_style) = if task.completed {
        (
            CHECK_DONE,
            base.fg(app.theme.green).add_modifier(Modifier::BOLD),
        )
    } else {
        (CHECK_OPEN, base.fg(app.theme.dim))
    };

    let mut text_style = if task.completed {
        base.fg(app.theme.dim).add_modifier(Modifier::CROSSED_OUT)
    } else {
        base.fg(app.theme.text)
    };
    if is_cursor {
        text_style = text_style.add_modifier(Modifier::BOLD);
    }

    // lead + checkbox + space + text + padding + delete mark
    let chrome = 1 + 3 + 1 + DELETE_MARK.chars().count();
    let budget = width.saturating_sub(chrome);
    let text = unicode::truncate_to_width(&unicode::display_safe(&task.text), budget);
    let padding = budget.saturating_sub(unicode::display_width(&text));

    Line::from(vec![
        Span::styled(" ", base),
        Span::styled(check, check_style),
        Span::styled(" ", base),
        Span::styled(text, text_style),
        Span::styled(" ".repeat(padding), base),
        Span::styled(DELETE_MARK, base.fg(app.theme.red)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Filter, Intent};
    use crate::tui::render::test_helpers::*;
    use pretty_assertions::assert_eq;

    fn render_list(app: &mut App, w: u16, h: u16) -> String {
        render_to_string(w, h, |frame, area| render_task_list(frame, app, area))
    }

    #[test]
    fn rows_show_checkbox_text_and_delete() {
        let mut app = app_with_tasks(&[("Buy milk", true), ("Walk dog", false)]);
        let output = render_list(&mut app, 30, 2);
        let pad = " ".repeat(15);
        assert_eq!(
            output,
            format!(" (\u{2713}) Buy milk{pad}\u{00D7}\n ( ) Walk dog{pad}\u{00D7}")
        );
    }

    #[test]
    fn empty_label_all() {
        let mut app = empty_app();
        let output = render_list(&mut app, 30, 3);
        assert!(output.contains("No tasks yet"));
        assert_eq!(output.lines().count(), 2);
    }

    #[test]
    fn empty_label_for_filter() {
        let mut app = app_with_tasks(&[("a", false)]);
        app.dispatch(Intent::SelectFilter(Filter::Completed));
        let output = render_list(&mut app, 30, 3);
        assert!(output.contains("No tasks completed"));

        let mut app = app_with_tasks(&[("a", true)]);
        app.dispatch(Intent::SelectFilter(Filter::Active));
        let output = render_list(&mut app, 30, 3);
        assert!(output.contains("No tasks active"));
    }

    #[test]
    fn long_text_is_truncated() {
        let mut app = app_with_tasks(&[("a very long task description here", false)]);
        let output = render_list(&mut app, 20, 1);
        assert_eq!(output, " ( ) a very long\u{2026} \u{00D7}");
    }

    #[test]
    fn tab_in_text_keeps_row_aligned() {
        let mut app = app_with_tasks(&[("a\tb", false), ("ab", false)]);
        let output = render_list(&mut app, 20, 2);
        let rows: Vec<&str> = output.lines().collect();
        assert_eq!(rows[0], format!(" ( ) a b{}\u{00D7}", " ".repeat(10)));
        assert_eq!(rows[1], format!(" ( ) ab{}\u{00D7}", " ".repeat(11)));
        assert!(!output.contains('\t'));
    }

    #[test]
    fn cursor_row_highlighted_only_with_list_focus() {
        let mut app = app_with_tasks(&[("a", false), ("b", false)]);
        app.cursor = 1;

        let line = task_line(&app, &app.store.state().tasks()[1], true, 20);
        assert!(line.spans.iter().all(|s| s.style.bg == Some(app.theme.selection_bg)));

        app.focus = Focus::Input;
        let backend = ratatui::backend::TestBackend::new(20, 2);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render_task_list(frame, &mut app, frame.area()))
            .unwrap();
        assert_eq!(terminal.backend().buffer()[(0, 1)].bg, app.theme.background);
    }

    #[test]
    fn scroll_keeps_cursor_visible() {
        assert_eq!(scroll_for_cursor(0, 0, 10, 3), 0);
        assert_eq!(scroll_for_cursor(0, 5, 10, 3), 3);
        assert_eq!(scroll_for_cursor(3, 4, 10, 3), 3);
        assert_eq!(scroll_for_cursor(5, 2, 10, 3), 2);
        // Shrunk list pulls scroll back
        assert_eq!(scroll_for_cursor(8, 1, 2, 3), 0);
        assert_eq!(scroll_for_cursor(4, 0, 0, 3), 0);
    }

    #[test]
    fn scrolled_list_renders_cursor_window() {
        let texts: Vec<String> = (1..=6).map(|n| format!("task {}", n)).collect();
        let tasks: Vec<(&str, bool)> = texts.iter().map(|t| (t.as_str(), false)).collect();
        let mut app = app_with_tasks(&tasks);
        app.focus = Focus::List;
        app.cursor = 5;

        let output = render_list(&mut app, 20, 2);
        assert!(output.contains("task 5"));
        assert!(output.contains("task 6"));
        assert!(!output.contains("task 4"));
        assert_eq!(app.scroll_offset, 4);
    }
}
