use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::error::Result;
use crate::feed::NewsSource;
use crate::models::{ArticleRecord, FetchResult, FilterParameters};

/// Snapshot of what the article list screen shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControllerState {
    pub articles: Vec<ArticleRecord>,
    /// Parameters of the most recently issued request
    pub parameters: FilterParameters,
    pub loading: bool,
    /// Last failure of the latest request, cleared on success
    pub last_error: Option<String>,
    request_seq: u64,
}

impl ControllerState {
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn request_seq(&self) -> u64 {
        self.request_seq
    }
}

/// Owns the filter parameters and the published article list.
///
/// Every [`set_parameters`](Self::set_parameters) or [`refresh`](Self::refresh)
/// starts a new fetch and aborts the one before it. A response is applied only
/// if no newer request was issued meanwhile, so the last request wins.
pub struct NewsController<S: NewsSource> {
    source: Arc<S>,
    state: Arc<watch::Sender<ControllerState>>,
    in_flight: Option<JoinHandle<()>>,
}

impl<S: NewsSource> NewsController<S> {
    /// Create the controller and issue the initial fetch with default filters.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub fn new(source: S) -> Self {
        Self::with_parameters(source, FilterParameters::default())
    }

    pub fn with_parameters(source: S, params: FilterParameters) -> Self {
        let (state, _) = watch::channel(ControllerState::default());
        let mut controller = Self {
            source: Arc::new(source),
            state: Arc::new(state),
            in_flight: None,
        };
        controller.set_parameters(params);
        controller
    }

    pub fn subscribe(&self) -> watch::Receiver<ControllerState> {
        self.state.subscribe()
    }

    pub fn current_state(&self) -> ControllerState {
        self.state.borrow().clone()
    }

    pub fn parameters(&self) -> FilterParameters {
        self.state.borrow().parameters.clone()
    }

    pub fn set_parameters(&mut self, params: FilterParameters) {
        self.run_fetch(params);
    }

    /// Re-fetch with the current parameters
    pub fn refresh(&mut self) {
        self.run_fetch(self.parameters());
    }

    fn run_fetch(&mut self, params: FilterParameters) {
        if let Some(previous) = self.in_flight.take() {
            previous.abort();
        }

        let mut seq = 0;
        self.state.send_modify(|state| {
            state.request_seq += 1;
            seq = state.request_seq;
            state.parameters = params.clone();
            state.loading = true;
        });

        tracing::debug!(
            "Request #{}: category={}, language={}, country={}",
            seq,
            params.category_label(),
            params.language(),
            params.country_label()
        );

        let source = Arc::clone(&self.source);
        let state = Arc::clone(&self.state);
        self.in_flight = Some(tokio::spawn(async move {
            let outcome = source.fetch(&params).await;
            apply_outcome(&state, seq, outcome);
        }));
    }
}

impl<S: NewsSource> Drop for NewsController<S> {
    fn drop(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}

fn apply_outcome(
    state: &watch::Sender<ControllerState>,
    seq: u64,
    outcome: Result<FetchResult>,
) {
    state.send_if_modified(|current| {
        if current.request_seq != seq {
            tracing::debug!(
                "Discarding response #{} superseded by #{}",
                seq,
                current.request_seq
            );
            return false;
        }

        current.loading = false;
        match outcome {
            Ok(result) => {
                tracing::info!(
                    "Fetched {} articles (status={}, total={})",
                    result.results.len(),
                    result.status,
                    result.total_results
                );
                current.articles = result.results;
                current.last_error = None;
            }
            Err(e) => {
                tracing::warn!("Error fetching news: {}", e);
                current.last_error = Some(e.to_string());
            }
        }
        true
    });
}
