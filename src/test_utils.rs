#[cfg(test)]
pub mod test_helpers {
    use std::sync::mpsc;
    use std::time::Instant;

    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

    use crate::app::App;
    use crate::config::Config;
    use crate::search::{City, SearchRequest, SearchResponse};
    use crate::suggest::SuggestionWidget;

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn cities(names: &[&str]) -> Vec<City> {
        names.iter().map(|name| City::new(*name)).collect()
    }

    /// A successful response answering `request`
    pub fn results(request: &SearchRequest, names: &[&str]) -> SearchResponse {
        SearchResponse::Results {
            query: request.query.clone(),
            request_id: request.request_id,
            cities: cities(names),
        }
    }

    pub fn test_widget() -> SuggestionWidget {
        SuggestionWidget::new(&Config::default())
    }

    /// Type each character of `text` into the widget's input
    pub fn type_text(widget: &mut SuggestionWidget, text: &str, now: Instant) {
        for c in text.chars() {
            widget.handle_text_key(key(KeyCode::Char(c)), now);
        }
    }

    pub fn test_app() -> App {
        App::new(&Config::default())
    }

    /// App wired to in-memory channels instead of a search worker
    pub fn app_with_channels() -> (
        App,
        UnboundedReceiver<SearchRequest>,
        mpsc::Sender<SearchResponse>,
    ) {
        let mut app = test_app();
        let (request_tx, request_rx) = unbounded_channel();
        let (response_tx, response_rx) = mpsc::channel();
        app.widget.set_channels(request_tx, response_rx);
        (app, request_rx, response_tx)
    }

    /// App showing `names` as suggestions for `query`
    pub fn app_with_suggestions(query: &str, names: &[&str]) -> App {
        let mut app = test_app();
        app.widget.input.set_text(query);
        app.widget.suggestions.install(cities(names), query);
        app
    }
}
