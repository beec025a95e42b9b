//! Debounced search suggestions.
//!
//! Each keystroke cancels the pending debounce timer and starts a new one.
//! When a timer survives the quiet period it issues one query to the product
//! source. Queries already in flight are left to finish; their responses are
//! published only if nothing newer has been typed or issued since.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::catalog::{or_empty, Product, ProductSource};
use crate::routes::Route;
use crate::search::{SuggestionConfig, SuggestionState, SuggestionStatus};

#[derive(Debug, Default)]
struct Control {
    /// Bumped on every input and reset.
    generation: u64,
    /// Sequence number of the most recently issued query.
    issued: u64,
    /// Latest trimmed input, including inputs too short to query.
    input: String,
    /// Debounce timer that has not fired yet.
    pending: Option<JoinHandle<()>>,
}

fn lock(control: &Mutex<Control>) -> MutexGuard<'_, Control> {
    control.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Turns raw keystrokes into capped product suggestions.
pub struct SuggestionPipeline<S> {
    source: Arc<S>,
    config: SuggestionConfig,
    state: Arc<watch::Sender<SuggestionState>>,
    control: Arc<Mutex<Control>>,
}

impl<S> Clone for SuggestionPipeline<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            config: self.config,
            state: Arc::clone(&self.state),
            control: Arc::clone(&self.control),
        }
    }
}

impl<S> SuggestionPipeline<S>
where
    S: ProductSource + 'static,
{
    pub fn new(source: S, config: SuggestionConfig) -> Self {
        Self::with_shared_source(Arc::new(source), config)
    }

    /// Build over a source that is also used elsewhere.
    pub fn with_shared_source(source: Arc<S>, config: SuggestionConfig) -> Self {
        let (tx, _rx) = watch::channel(SuggestionState::default());
        Self {
            source,
            config,
            state: Arc::new(tx),
            control: Arc::new(Mutex::new(Control::default())),
        }
    }

    pub fn config(&self) -> &SuggestionConfig {
        &self.config
    }

    /// Current state.
    pub fn state(&self) -> SuggestionState {
        self.state.borrow().clone()
    }

    /// Observe state changes.
    pub fn subscribe(&self) -> watch::Receiver<SuggestionState> {
        self.state.subscribe()
    }

    /// Feed the full current contents of the search box.
    ///
    /// Must be called from within a tokio runtime.
    pub fn input(&self, raw: &str) {
        let query = raw.trim().to_string();
        let mut control = lock(&self.control);
        control.generation += 1;
        control.input = query.clone();
        if let Some(pending) = control.pending.take() {
            pending.abort();
        }

        if query.chars().count() < self.config.min_query_len {
            self.state.send_replace(SuggestionState::default());
            return;
        }

        self.state.send_replace(SuggestionState {
            query: query.clone(),
            status: SuggestionStatus::Debouncing,
            ..SuggestionState::default()
        });

        let task = QueryTask {
            source: Arc::clone(&self.source),
            config: self.config,
            state: Arc::clone(&self.state),
            control: Arc::clone(&self.control),
            generation: control.generation,
            query,
        };
        control.pending = Some(tokio::spawn(task.run()));
    }

    /// Submit the raw query. Returns the full-results route, or `None` for a
    /// blank box.
    pub fn submit(&self) -> Option<Route> {
        let query = lock(&self.control).input.clone();
        if query.is_empty() {
            return None;
        }
        self.reset();
        Some(Route::search(query))
    }

    /// Pick a suggestion. Leads to the same results page as submitting.
    pub fn select(&self, product: &Product) -> Route {
        tracing::debug!(id = %product.id, "suggestion selected");
        self.submit()
            .unwrap_or_else(|| Route::search(product.name.clone()))
    }

    /// Drop pending work and clear the suggestions.
    pub fn reset(&self) {
        let mut control = lock(&self.control);
        control.generation += 1;
        control.input.clear();
        if let Some(pending) = control.pending.take() {
            pending.abort();
        }
        self.state.send_replace(SuggestionState::default());
    }

    /// Wait until no further update is expected without new input.
    pub async fn settled(&self) -> SuggestionState {
        let mut rx = self.state.subscribe();
        let settled = match rx.wait_for(SuggestionState::is_settled).await {
            Ok(state) => state.clone(),
            Err(_) => self.state(),
        };
        settled
    }
}

struct QueryTask<S> {
    source: Arc<S>,
    config: SuggestionConfig,
    state: Arc<watch::Sender<SuggestionState>>,
    control: Arc<Mutex<Control>>,
    generation: u64,
    query: String,
}

impl<S> QueryTask<S>
where
    S: ProductSource + 'static,
{
    async fn run(self) {
        tokio::time::sleep(self.config.debounce).await;

        let seq = {
            let mut control = lock(&self.control);
            if control.generation != self.generation {
                return;
            }
            control.pending = None;
            control.issued += 1;
            self.state
                .send_modify(|state| state.status = SuggestionStatus::Loading);
            control.issued
        };

        tracing::info!(query = %self.query, seq, "issuing suggestion query");
        let matches = or_empty(self.source.search(&self.query).await, "search suggestions");

        let control = lock(&self.control);
        if control.generation != self.generation || control.issued != seq {
            tracing::debug!(query = %self.query, seq, "discarding stale suggestions");
            return;
        }

        let total_matches = matches.len();
        let suggestions: Vec<Product> = matches
            .into_iter()
            .take(self.config.max_suggestions)
            .collect();
        self.state.send_modify(|state| {
            state.query = self.query.clone();
            state.suggestions = suggestions;
            state.total_matches = total_matches;
            state.status = SuggestionStatus::Ready;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::money::{Currency, Money};
    use async_trait::async_trait;
    use std::time::Duration;

    #[derive(Debug, thiserror::Error)]
    #[error("unused")]
    struct Never;

    struct Fixed(usize);

    #[async_trait]
    impl ProductSource for Fixed {
        type Error = Never;

        async fn list_featured(&self) -> Result<Vec<Product>, Never> {
            Ok(Vec::new())
        }

        async fn list_by_category(&self, _slug: &str) -> Result<Vec<Product>, Never> {
            Ok(Vec::new())
        }

        async fn search(&self, query: &str) -> Result<Vec<Product>, Never> {
            Ok((0..self.0)
                .map(|i| {
                    Product::new(
                        format!("{query}-{i}"),
                        format!("{query} {i}"),
                        Money::new(100, Currency::USD),
                        "",
                    )
                })
                .collect())
        }

        async fn list_categories(&self) -> Result<Vec<Category>, Never> {
            Ok(Vec::new())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_short_input_is_idle() {
        let pipeline = SuggestionPipeline::new(Fixed(3), SuggestionConfig::default());
        pipeline.input(" a ");
        assert_eq!(pipeline.state().status, SuggestionStatus::Idle);

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(pipeline.state(), SuggestionState::default());
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounce_then_ready() {
        let pipeline = SuggestionPipeline::new(Fixed(12), SuggestionConfig::default());
        pipeline.input("ube");
        assert_eq!(pipeline.state().status, SuggestionStatus::Debouncing);

        let state = pipeline.settled().await;
        assert_eq!(state.status, SuggestionStatus::Ready);
        assert_eq!(state.suggestions.len(), 5);
        assert_eq!(state.total_matches, 12);
        assert_eq!(state.see_all(), Some(Route::search("ube")));
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_and_select_reset() {
        let pipeline = SuggestionPipeline::new(Fixed(2), SuggestionConfig::default());
        pipeline.input("adobo ");
        let state = pipeline.settled().await;

        let route = pipeline.select(&state.suggestions[0]);
        assert_eq!(route, Route::search("adobo"));
        assert_eq!(pipeline.state(), SuggestionState::default());

        pipeline.input("x");
        assert_eq!(pipeline.submit(), Some(Route::search("x")));
        assert_eq!(pipeline.submit(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_input_drops_previous_suggestions() {
        let pipeline = SuggestionPipeline::new(Fixed(1), SuggestionConfig::default());
        pipeline.input("ube");
        assert_eq!(pipeline.settled().await.suggestions[0].id.as_str(), "ube-0");

        pipeline.input("ube jam");
        let pending = pipeline.state();
        assert_eq!(pending.status, SuggestionStatus::Debouncing);
        assert_eq!(pending.query, "ube jam");
        assert!(!pending.is_open());
        assert_eq!(pending.total_matches, 0);

        let state = pipeline.settled().await;
        assert_eq!(state.suggestions[0].id.as_str(), "ube jam-0");
        assert_eq!(state.see_all(), Some(Route::search("ube jam")));
    }
}
