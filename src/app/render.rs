use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::state::App;
use crate::input::input_render;
use crate::suggest::suggest_render;

const HELP_TEXT: &str = "↑↓ navigate  Enter select  Esc close  Ctrl+C quit";

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

        let input_area = layout[0];
        let status_area = layout[2];

        input_render::render_field(&mut self.widget.input, frame, input_area, &self.endpoint);
        self.render_status_line(frame, status_area);

        // Dropdown last so it draws over everything below the input
        self.popup_layout =
            suggest_render::render_popup(&self.widget.suggestions, frame, input_area);
    }

    fn render_status_line(&self, frame: &mut Frame, area: Rect) {
        let status = if self.widget.awaiting_request().is_some() {
            Line::styled("Searching...", Style::default().fg(Color::DarkGray))
        } else if let Some(city) = self.widget.selection() {
            let mut spans = vec![
                Span::styled("Selected: ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    city.name.clone(),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
            ];
            if let Some(country) = &city.country {
                spans.push(Span::styled(
                    format!(" ({})", country),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            Line::from(spans)
        } else if let Some(warning) = &self.config_warning {
            Line::styled(format!("⚠ {}", warning), Style::default().fg(Color::Yellow))
        } else {
            Line::default()
        };

        let help_width = HELP_TEXT.chars().count() as u16;
        let [status_area, help_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(help_width)]).areas(area);

        frame.render_widget(Paragraph::new(status), status_area);
        frame.render_widget(
            Paragraph::new(Line::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)))
                .alignment(Alignment::Right),
            help_area,
        );
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
