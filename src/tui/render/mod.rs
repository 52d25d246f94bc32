pub mod filter_bar;
pub mod footer;
pub mod header;
pub mod help_overlay;
pub mod input_box;
pub mod status_row;
pub mod task_list;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Widest the task column grows before it is centered
pub const MAX_CONTENT_WIDTH: u16 = 60;

/// Main render function, dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    let column = content_column(area);
    let footer_height = if app.projection().show_footer() { 2 } else { 0 };
    let status_height = if app.ui.show_key_hints { 1 } else { 0 };

    // Layout: title | input box | filter bar | gap | list | footer | key hints
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),             // title + blank
            Constraint::Length(3),             // bordered input
            Constraint::Length(1),             // filter bar
            Constraint::Length(1),             // gap
            Constraint::Min(1),                // task list
            Constraint::Length(footer_height), // separator + counts
            Constraint::Length(status_height), // key hints
        ])
        .split(column);

    header::render_header(frame, app, chunks[0]);
    input_box::render_input_box(frame, app, chunks[1]);
    filter_bar::render_filter_bar(frame, app, chunks[2]);
    task_list::render_task_list(frame, app, chunks[4]);
    if footer_height > 0 {
        footer::render_footer(frame, app, chunks[5]);
    }
    if status_height > 0 {
        status_row::render_status_row(frame, app, chunks[6]);
    }

    // Help overlay (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }
}

/// Horizontally centered column at most `MAX_CONTENT_WIDTH` wide
pub fn content_column(area: Rect) -> Rect {
    let width = area.width.min(MAX_CONTENT_WIDTH);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}
