//! Input field rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders},
};

use super::InputState;

/// Render the city input with the search endpoint in the top-right corner
pub fn render_field(input: &mut InputState, frame: &mut Frame, area: Rect, endpoint: &str) {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(" City ")
        .border_style(Style::default().fg(Color::Cyan));

    // Leave room for the left title before showing the endpoint
    let endpoint_width = u16::try_from(endpoint.chars().count())
        .unwrap_or(u16::MAX)
        .saturating_add(2);
    if area.width > endpoint_width.saturating_add(10) {
        block = block.title(
            Line::styled(format!(" {} ", endpoint), Style::default().fg(Color::DarkGray))
                .right_aligned(),
        );
    }

    input.textarea.set_block(block);
    frame.render_widget(&input.textarea, area);
}
