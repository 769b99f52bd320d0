use ratatui::{
    crossterm::event::{KeyCode, KeyEvent},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};
use tui_textarea::{Input, Key, TextArea};

/// Single-line city name input
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    pub fn new(placeholder: &str) -> Self {
        let mut textarea = TextArea::default();

        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" City ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );

        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text(placeholder);
        textarea.set_placeholder_style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        );

        Self { textarea }
    }

    pub fn text(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    /// Feed a key to the text area. Returns true if the text changed.
    ///
    /// Line breaks are swallowed so the field stays single-line. Tab is
    /// not text either.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
            return false;
        }

        let input = Input::from(key);
        let newline = match input.key {
            Key::Enter | Key::Char('\n' | '\r') => true,
            Key::Char('m') => input.ctrl,
            _ => false,
        };
        if newline {
            return false;
        }

        let before = self.text().to_string();
        self.textarea.input(input);
        self.text() != before
    }

    /// Replace the whole text, leaving the cursor at the end
    pub fn set_text(&mut self, text: &str) {
        self.textarea.move_cursor(tui_textarea::CursorMove::End);
        self.textarea.delete_line_by_head();
        self.textarea.delete_line_by_end();
        self.textarea.insert_str(text);
    }

    #[cfg(test)]
    pub fn placeholder(&self) -> &str {
        self.textarea.placeholder_text()
    }
}

#[cfg(test)]
#[path = "input_state_tests.rs"]
mod input_state_tests;
