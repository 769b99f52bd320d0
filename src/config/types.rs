// Configuration type definitions

use serde::Deserialize;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000";
pub const DEFAULT_DEBOUNCE_MS: u64 = 10;
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;
pub const DEFAULT_MAX_RESULTS: usize = 25;
pub const DEFAULT_PLACEHOLDER: &str = "Search City";

/// What the dropdown does when a search comes back empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NoResultsPolicy {
    /// Close the dropdown
    #[default]
    Hide,
    /// Keep the dropdown open with a single "No Results" row
    Placeholder,
}

/// Optional reference point sent along with every search
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct NearConfig {
    pub lng: f64,
    pub lat: f64,
}

/// Search service configuration section
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub endpoint: String,
    pub debounce_ms: u64,
    pub timeout_ms: u64,
    pub max_results: usize,
    pub near: Option<NearConfig>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            max_results: DEFAULT_MAX_RESULTS,
            near: None,
        }
    }
}

/// UI configuration section
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub placeholder: String,
    pub no_results: NoResultsPolicy,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            no_results: NoResultsPolicy::Hide,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub ui: UiConfig,
}
