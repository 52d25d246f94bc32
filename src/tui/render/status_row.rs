use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Focus};
use crate::util::unicode;

const INPUT_HINTS: &[(&str, &str)] = &[("Enter", "add"), ("Tab", "list"), ("Ctrl+C", "quit")];

const LIST_HINTS: &[(&str, &str)] = &[
    ("Space", "toggle"),
    ("d", "delete"),
    ("c", "clear"),
    ("1-3", "filter"),
    ("a", "add"),
    ("?", "help"),
    ("q", "quit"),
];

/// Render the key hints row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let hints = match app.focus {
        Focus::Input => INPUT_HINTS,
        Focus::List => LIST_HINTS,
    };

    let key_style = Style::default()
        .fg(app.theme.accent)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.dim).bg(bg);

    // Drop hints from the right until the row fits
    let mut spans: Vec<Span> = vec![Span::styled(" ", desc_style)];
    let mut used = 1;
    for (i, (key, desc)) in hints.iter().enumerate() {
        let sep = if i > 0 { "  " } else { "" };
        let hint_width = sep.len() + unicode::display_width(key) + 1 + desc.len();
        if used + hint_width > width {
            break;
        }
        used += hint_width;
        spans.push(Span::styled(format!("{}{}", sep, key), key_style));
        spans.push(Span::styled(format!(" {}", desc), desc_style));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
