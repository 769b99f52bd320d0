use std::time::Instant;

use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use super::mouse_click;
use super::state::App;

impl App {
    /// Handle a terminal event and update application state
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_event(key, now);
            }
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            _ => {}
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        if self.handle_global_keys(key) {
            return;
        }

        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Enter => {
                if self.widget.on_key_down(key.code) {
                    return;
                }
                if key.code == KeyCode::Enter {
                    self.accept();
                }
            }
            _ => {
                self.widget.handle_text_key(key, now);
            }
        }
    }

    /// Handle keys that work regardless of dropdown state
    /// Returns true if key was handled, false otherwise
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C: Exit application
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return true;
        }

        // Esc: close the dropdown first, exit when it is already closed
        if key.code == KeyCode::Esc {
            if self.widget.is_open() {
                self.widget.on_outside_click();
            } else {
                self.should_quit = true;
            }
            return true;
        }

        false
    }

    /// Enter with the dropdown closed: exit and print the current text
    fn accept(&mut self) {
        let text = self.widget.query().trim();
        if !text.is_empty() {
            self.output = Some(text.to_string());
        }
        self.should_quit = true;
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            mouse_click::handle_click(self, mouse.column, mouse.row);
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
