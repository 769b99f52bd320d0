//! Suggestion widget
//!
//! Binds the city input to the search worker: debounces keystrokes into
//! requests, accepts only the reply to the most recent request, and handles
//! keyboard and mouse selection over the dropdown.

use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::{Duration, Instant};

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc::UnboundedSender;

use super::suggest_state::SuggestState;
use crate::config::{Config, NoResultsPolicy};
use crate::input::InputState;
use crate::search::{City, Debouncer, SearchRequest, SearchResponse};

pub struct SuggestionWidget {
    pub input: InputState,
    pub suggestions: SuggestState,
    debouncer: Debouncer,
    no_results: NoResultsPolicy,
    /// Channel to send requests to the search worker
    request_tx: Option<UnboundedSender<SearchRequest>>,
    /// Channel to receive responses from the search worker
    response_rx: Option<Receiver<SearchResponse>>,
    /// Last request ID handed out, incremented for each dispatch
    request_id: u64,
    /// The only request whose response may still be rendered
    awaiting: Option<u64>,
    selection: Option<City>,
}

impl SuggestionWidget {
    pub fn new(config: &Config) -> Self {
        Self {
            input: InputState::new(&config.ui.placeholder),
            suggestions: SuggestState::new(),
            debouncer: Debouncer::new(Duration::from_millis(config.search.debounce_ms)),
            no_results: config.ui.no_results,
            request_tx: None,
            response_rx: None,
            request_id: 0,
            awaiting: None,
            selection: None,
        }
    }

    /// Set the channel handles for communication with the search worker
    pub fn set_channels(
        &mut self,
        request_tx: UnboundedSender<SearchRequest>,
        response_rx: Receiver<SearchResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    pub fn query(&self) -> &str {
        self.input.text()
    }

    pub fn selection(&self) -> Option<&City> {
        self.selection.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.suggestions.is_visible()
    }

    pub fn awaiting_request(&self) -> Option<u64> {
        self.awaiting
    }

    /// When the pending debounce fires, if any
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// Feed a key to the input field, reacting if the text changed
    pub fn handle_text_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        let changed = self.input.handle_key(key);
        if changed {
            self.on_input(now);
        }
        changed
    }

    /// React to a change of the input text
    ///
    /// Empty text closes the dropdown at once and forgets any pending or
    /// in-flight search; otherwise a search is (re)scheduled.
    pub fn on_input(&mut self, now: Instant) {
        let text = self.input.text().to_string();
        if text.is_empty() {
            self.debouncer.cancel();
            self.awaiting = None;
            self.suggestions.dismiss();
            return;
        }
        self.debouncer.schedule(text, now);
    }

    /// Fire the debounce if due. Returns true if a request was dispatched.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.debouncer.poll(now) {
            Some(query) => {
                self.dispatch(query);
                true
            }
            None => false,
        }
    }

    fn dispatch(&mut self, query: String) {
        self.request_id = self.request_id.wrapping_add(1);
        let request_id = self.request_id;
        self.suggestions.reset_focus();

        let sent = self.request_tx.as_ref().is_some_and(|tx| {
            tx.send(SearchRequest {
                query: query.clone(),
                request_id,
            })
            .is_ok()
        });

        if sent {
            log::debug!("Sent search {} for {:?}", request_id, query);
            self.awaiting = Some(request_id);
        } else {
            log::warn!("Search worker unavailable, dropping query {:?}", query);
            self.awaiting = None;
            self.suggestions.dismiss();
        }
    }

    /// Drain worker responses. Returns true if the display changed.
    pub fn poll_responses(&mut self) -> bool {
        let mut changed = false;
        loop {
            let Some(rx) = self.response_rx.as_ref() else {
                return changed;
            };
            match rx.try_recv() {
                Ok(response) => changed |= self.on_search_response(response),
                Err(TryRecvError::Empty) => return changed,
                Err(TryRecvError::Disconnected) => {
                    log::warn!("Search worker disconnected");
                    self.response_rx = None;
                    return changed;
                }
            }
        }
    }

    /// Apply a search response if it answers the latest request
    ///
    /// Returns false for stale responses, which are discarded.
    pub fn on_search_response(&mut self, response: SearchResponse) -> bool {
        if self.awaiting != Some(response.request_id()) {
            log::debug!(
                "Discarding stale search {} for {:?} (awaiting {:?})",
                response.request_id(),
                response.query(),
                self.awaiting
            );
            return false;
        }
        self.awaiting = None;

        match response {
            SearchResponse::Results { query, cities, .. } => {
                if !cities.is_empty() {
                    self.suggestions.install(cities, &query);
                } else {
                    match self.no_results {
                        NoResultsPolicy::Hide => self.suggestions.dismiss(),
                        NoResultsPolicy::Placeholder => self.suggestions.show_no_results(&query),
                    }
                }
            }
            SearchResponse::Failed { .. } => self.suggestions.dismiss(),
        }
        true
    }

    /// Dropdown keyboard navigation. Returns true if the key was consumed.
    pub fn on_key_down(&mut self, code: KeyCode) -> bool {
        if !self.suggestions.is_visible() {
            return false;
        }

        match code {
            KeyCode::Down => {
                self.suggestions.focus_next();
                true
            }
            KeyCode::Up => {
                self.suggestions.focus_previous();
                true
            }
            KeyCode::Enter => {
                if let Some(city) = self.suggestions.focused().cloned() {
                    self.commit(city);
                }
                true
            }
            _ => false,
        }
    }

    /// Select the suggestion at `index`. Returns true if one was committed.
    pub fn on_item_click(&mut self, index: usize) -> bool {
        match self.suggestions.get(index).cloned() {
            Some(city) => {
                self.commit(city);
                true
            }
            None => false,
        }
    }

    pub fn on_outside_click(&mut self) {
        self.suggestions.dismiss();
    }

    /// Write the city into the input and close the dropdown
    ///
    /// Programmatic text changes do not schedule a search.
    fn commit(&mut self, city: City) {
        self.input.set_text(&city.name);
        self.debouncer.cancel();
        self.awaiting = None;
        self.suggestions.dismiss();
        log::debug!("Selected {:?}", city.name);
        self.selection = Some(city);
    }
}

#[cfg(test)]
#[path = "widget_tests.rs"]
mod widget_tests;
