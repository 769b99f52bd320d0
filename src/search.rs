//! City search plumbing
//!
//! The HTTP client, the background worker that runs it off the UI thread,
//! and the debouncer that decides when a keystroke becomes a request.

mod client;
mod debouncer;
mod types;
mod worker;

pub use client::{SearchClient, SearchError};
pub use debouncer::Debouncer;
pub use types::{City, CityRecord, ReferencePoint, SearchRequest, SearchResponse};
pub use worker::SearchWorker;
