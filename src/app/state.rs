use std::time::{Duration, Instant};

use crate::config::Config;
use crate::suggest::SuggestionWidget;
use crate::suggest::suggest_render::PopupLayout;

/// Upper bound on how long the event loop waits for input
pub const TICK: Duration = Duration::from_millis(16);

/// Application state
pub struct App {
    pub widget: SuggestionWidget,
    /// Where the dropdown was drawn on the last frame (for mouse hit testing)
    pub popup_layout: Option<PopupLayout>,
    pub endpoint: String,
    /// Config problem to surface in the status line
    pub config_warning: Option<String>,
    pub should_quit: bool,
    /// Text to print on exit (set when the user confirms a city)
    pub output: Option<String>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            widget: SuggestionWidget::new(config),
            popup_layout: None,
            endpoint: config.search.endpoint.clone(),
            config_warning: None,
            should_quit: false,
            output: None,
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Get the text to print on exit (if any)
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    /// Advance timers and apply worker responses. Returns true if anything changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let dispatched = self.widget.tick(now);
        let received = self.widget.poll_responses();
        dispatched || received
    }

    /// How long the event loop may block before the next tick is due
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        match self.widget.next_deadline() {
            Some(deadline) => deadline.saturating_duration_since(now).min(TICK),
            None => TICK,
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
