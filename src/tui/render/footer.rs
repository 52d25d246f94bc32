use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode;

const CLEAR_LABEL: &str = "Clear completed";

/// Render the separator and the `N items left` / `Clear completed` row.
/// Callers skip this while the list is empty.
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    if area.height == 0 {
        return;
    }
    let bg = app.theme.background;
    let width = area.width as usize;
    let projection = app.projection();

    let separator = Paragraph::new("\u{2500}".repeat(width))
        .style(Style::default().fg(app.theme.border).bg(bg));
    frame.render_widget(separator, Rect { height: 1, ..area });
    if area.height < 2 {
        return;
    }

    let mut spans = vec![Span::styled(
        format!(" {}", projection.items_left()),
        Style::default().fg(app.theme.dim).bg(bg),
    )];
    if projection.has_completed {
        let left_width = unicode::display_width(&spans[0].content);
        let right_width = CLEAR_LABEL.len() + 1;
        if left_width + right_width < width {
            spans.push(Span::styled(
                " ".repeat(width - left_width - right_width),
                Style::default().bg(bg),
            ));
            spans.push(Span::styled(
                CLEAR_LABEL,
                Style::default()
                    .fg(app.theme.red)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ));
        }
    }

    let row = Rect {
        y: area.y + 1,
        height: 1,
        ..area
    };
    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, row);
}
