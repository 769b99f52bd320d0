//! Search Worker Thread
//!
//! Runs the async HTTP client on a background thread so the UI loop never
//! blocks on the network. Receives requests via channel, runs each one as
//! its own task, and sends every outcome back tagged with its request ID.
//! In-flight requests are never aborted; the UI discards stale replies.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::JoinHandle;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio_util::sync::CancellationToken;

use super::client::SearchClient;
use super::types::{SearchRequest, SearchResponse};

/// Handle to the background search thread
///
/// Dropping the handle signals the worker to stop accepting requests.
#[derive(Debug)]
pub struct SearchWorker {
    shutdown: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl SearchWorker {
    /// Spawn the worker thread
    ///
    /// Returns the worker handle plus the request sender and response
    /// receiver to hand to the widget.
    pub fn spawn(
        client: SearchClient,
    ) -> std::io::Result<(Self, UnboundedSender<SearchRequest>, Receiver<SearchResponse>)> {
        let (request_tx, request_rx) = unbounded_channel();
        let (response_tx, response_rx) = mpsc::channel();
        let shutdown = CancellationToken::new();

        let token = shutdown.clone();
        let handle = std::thread::Builder::new()
            .name("city-search".to_string())
            .spawn(move || run_worker(client, request_rx, response_tx, token))?;

        Ok((
            Self {
                shutdown,
                handle: Some(handle),
            },
            request_tx,
            response_rx,
        ))
    }

    /// Stop the worker and wait for its thread to exit
    pub fn shutdown(mut self) {
        self.shutdown.cancel();
        if let Some(handle) = self.handle.take()
            && handle.join().is_err()
        {
            log::warn!("Search worker thread panicked");
        }
    }
}

impl Drop for SearchWorker {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

fn run_worker(
    client: SearchClient,
    request_rx: UnboundedReceiver<SearchRequest>,
    response_tx: Sender<SearchResponse>,
    shutdown: CancellationToken,
) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            log::error!("Failed to start search runtime: {}", e);
            return;
        }
    };

    runtime.block_on(worker_loop(client, request_rx, response_tx, shutdown));
    // Don't wait on DNS lookups still running in the blocking pool
    runtime.shutdown_background();
    log::debug!("Search worker thread shutting down");
}

/// Main worker loop - dispatches requests until shutdown or channel close
async fn worker_loop(
    client: SearchClient,
    mut request_rx: UnboundedReceiver<SearchRequest>,
    response_tx: Sender<SearchResponse>,
    shutdown: CancellationToken,
) {
    loop {
        let request = tokio::select! {
            biased;
            _ = shutdown.cancelled() => break,
            request = request_rx.recv() => request,
        };

        let Some(request) = request else {
            break;
        };

        log::debug!("Dispatching search {} for {:?}", request.request_id, request.query);
        let client = client.clone();
        let response_tx = response_tx.clone();
        let token = shutdown.clone();
        tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = token.cancelled() => {}
                response = run_search(&client, request) => {
                    // The UI may already be gone; nothing to do then
                    let _ = response_tx.send(response);
                }
            }
        });
    }
}

/// Execute one search and wrap the outcome for the UI thread
async fn run_search(client: &SearchClient, request: SearchRequest) -> SearchResponse {
    let SearchRequest { query, request_id } = request;
    match client.search(&query).await {
        Ok(cities) => SearchResponse::Results {
            query,
            request_id,
            cities,
        },
        Err(e) => {
            log::warn!("Search {} for {:?} failed: {}", request_id, query, e);
            SearchResponse::Failed {
                query,
                request_id,
                error: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
