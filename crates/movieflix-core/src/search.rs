use movieflix_models::MovieSummary;
use movieflix_omdb::MovieDatabase;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::debug;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

const EMPTY_RESULTS_MESSAGE: &str = "No movies found";

/// Idle (never searched) and Error("No movies found") are distinct states:
/// the first is the blank slate before any query, the second a search that
/// matched nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Loading,
    Success,
    Error(String),
}

#[derive(Debug, Clone)]
pub struct SearchState {
    pub query: String,
    pub results: Vec<MovieSummary>,
    pub phase: SearchPhase,
}

impl SearchState {
    fn new() -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            phase: SearchPhase::Idle,
        }
    }
}

/// Owns query state, debounces keystrokes, and drives the metadata client.
///
/// Each keystroke replaces the pending debounce task; only a query stable
/// for the full window dispatches a search. Every dispatch takes a
/// monotonic sequence number and completions older than the latest
/// dispatch are discarded, so a stale response cannot overwrite newer
/// results.
pub struct SearchController<D: MovieDatabase> {
    client: Arc<D>,
    state: Arc<RwLock<SearchState>>,
    debounce: Duration,
    seq: Arc<AtomicU64>,
    pending: Option<JoinHandle<()>>,
}

impl<D: MovieDatabase> SearchController<D> {
    pub fn new(client: Arc<D>, debounce: Duration) -> Self {
        Self {
            client,
            state: Arc::new(RwLock::new(SearchState::new())),
            debounce,
            seq: Arc::new(AtomicU64::new(0)),
            pending: None,
        }
    }

    pub async fn state(&self) -> SearchState {
        self.state.read().await.clone()
    }

    /// Record a keystroke. The raw query updates immediately (no phase
    /// change); the search itself fires only once the query has been
    /// stable for the debounce window.
    pub async fn input(&mut self, query: &str) {
        self.supersede_pending();
        self.state.write().await.query = query.to_string();

        let client = self.client.clone();
        let state = self.state.clone();
        let seq = self.seq.clone();
        let debounce = self.debounce;
        let query = query.to_string();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            run_dispatch(client, state, seq, query).await;
        }));
    }

    /// Dispatch the given query right away, skipping the debounce window.
    /// Used for the initial default query at startup.
    pub async fn mount(&mut self, default_query: &str) {
        self.supersede_pending();
        self.state.write().await.query = default_query.to_string();

        let client = self.client.clone();
        let state = self.state.clone();
        let seq = self.seq.clone();
        let query = default_query.to_string();
        self.pending = Some(tokio::spawn(async move {
            run_dispatch(client, state, seq, query).await;
        }));
    }

    /// Wait for the latest pending dispatch (if any) to finish.
    pub async fn settled(&mut self) {
        if let Some(handle) = self.pending.take() {
            // JoinError only occurs for superseded (aborted) tasks
            let _ = handle.await;
        }
    }

    fn supersede_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl<D: MovieDatabase> Drop for SearchController<D> {
    fn drop(&mut self) {
        self.supersede_pending();
    }
}

async fn run_dispatch<D: MovieDatabase>(
    client: Arc<D>,
    state: Arc<RwLock<SearchState>>,
    seq: Arc<AtomicU64>,
    query: String,
) {
    let my_seq = seq.fetch_add(1, Ordering::SeqCst) + 1;
    debug!(query = %query, seq = my_seq, "dispatching search");

    {
        let mut s = state.write().await;
        s.phase = SearchPhase::Loading;
    }

    let outcome = client.search_by_title(&query).await;

    // A later dispatch owns the state now; drop this completion
    if seq.load(Ordering::SeqCst) != my_seq {
        debug!(query = %query, seq = my_seq, "discarding stale search response");
        return;
    }

    let mut s = state.write().await;
    match outcome {
        Ok(results) if results.is_empty() => {
            s.results.clear();
            s.phase = SearchPhase::Error(EMPTY_RESULTS_MESSAGE.to_string());
        }
        Ok(results) => {
            s.results = results;
            s.phase = SearchPhase::Success;
        }
        Err(e) => {
            s.results.clear();
            s.phase = SearchPhase::Error(e.message());
        }
    }
}
