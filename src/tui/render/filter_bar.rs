use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Filter;
use crate::tui::app::App;

/// Render the filter buttons: ` All   Active   Completed `
pub fn render_filter_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let selected = app.store.state().filter();

    let mut spans: Vec<Span> = Vec::new();
    for (i, filter) in Filter::ALL.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" ", Style::default().bg(bg)));
        }
        spans.push(Span::styled(
            format!(" {} ", filter.label()),
            button_style(app, filter == selected),
        ));
    }

    let bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(bar, area);
}

/// Style for a filter button: filled accent if selected, muted otherwise
fn button_style(app: &App, is_selected: bool) -> Style {
    if is_selected {
        Style::default()
            .fg(app.theme.text_bright)
            .bg(app.theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.dim).bg(app.theme.selection_bg)
    }
}
