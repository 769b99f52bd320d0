//! Suggestion list and keyboard focus
//!
//! The list is replaced wholesale by each accepted search response. Focus
//! is `None` until the user arrows into the list, and arrow movement wraps
//! at both ends.

use crate::search::City;

#[derive(Debug, Clone, Default)]
pub struct SuggestState {
    items: Vec<City>,
    /// Query the current list was fetched for (drives highlighting)
    query: String,
    focus: Option<usize>,
    visible: bool,
}

impl SuggestState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a fresh result list; an empty list closes the dropdown
    pub fn install(&mut self, items: Vec<City>, query: &str) {
        if items.is_empty() {
            self.dismiss();
            return;
        }
        self.items = items;
        self.query = query.to_string();
        self.focus = None;
        self.visible = true;
    }

    /// Open the dropdown with no selectable rows
    pub fn show_no_results(&mut self, query: &str) {
        self.items.clear();
        self.query = query.to_string();
        self.focus = None;
        self.visible = true;
    }

    pub fn dismiss(&mut self) {
        self.items.clear();
        self.query.clear();
        self.focus = None;
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_no_results(&self) -> bool {
        self.visible && self.items.is_empty()
    }

    pub fn items(&self) -> &[City] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&City> {
        self.items.get(index)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn focus(&self) -> Option<usize> {
        self.focus
    }

    pub fn focused(&self) -> Option<&City> {
        self.focus.and_then(|i| self.items.get(i))
    }

    pub fn reset_focus(&mut self) {
        self.focus = None;
    }

    pub fn focus_next(&mut self) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        self.focus = match self.focus {
            Some(i) if i + 1 < len => Some(i + 1),
            Some(_) => Some(0),
            None => Some(0),
        };
    }

    pub fn focus_previous(&mut self) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        self.focus = match self.focus {
            Some(i) if i > 0 && i < len => Some(i - 1),
            _ => Some(len - 1),
        };
    }
}

#[cfg(test)]
#[path = "suggest_state_tests.rs"]
mod suggest_state_tests;
