use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Render the title banner (the second row stays blank)
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let title = Paragraph::new(app.ui.title.as_str())
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.accent_alt)
                .add_modifier(Modifier::BOLD),
        );
    let banner = Rect {
        height: area.height.min(1),
        ..area
    };
    frame.render_widget(title, banner);
}
