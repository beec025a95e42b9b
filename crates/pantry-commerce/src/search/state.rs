//! Suggestion configuration and published state.

use crate::catalog::Product;
use crate::routes::Route;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tuning for the suggestion pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionConfig {
    /// Quiet period after the last keystroke before a query is issued.
    pub debounce: Duration,
    /// Trimmed inputs shorter than this (in characters) issue no query.
    pub min_query_len: usize,
    /// Maximum suggestions shown.
    pub max_suggestions: usize,
}

impl SuggestionConfig {
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn with_min_query_len(mut self, len: usize) -> Self {
        self.min_query_len = len;
        self
    }

    pub fn with_max_suggestions(mut self, max: usize) -> Self {
        self.max_suggestions = max;
        self
    }
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(300),
            min_query_len: 2,
            max_suggestions: 5,
        }
    }
}

/// Where the pipeline is in its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionStatus {
    /// No query pending; suggestions are empty.
    #[default]
    Idle,
    /// Waiting for the input to settle.
    Debouncing,
    /// Query issued, awaiting the source.
    Loading,
    /// Suggestions reflect `query`.
    Ready,
}

/// Snapshot published to subscribers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuggestionState {
    /// Trimmed query the suggestions belong to, or are pending for while
    /// the list is empty.
    pub query: String,
    /// Capped suggestion list.
    pub suggestions: Vec<Product>,
    /// Matches before the cap was applied.
    pub total_matches: usize,
    pub status: SuggestionStatus,
}

impl SuggestionState {
    /// Whether the dropdown has anything to show.
    pub fn is_open(&self) -> bool {
        !self.suggestions.is_empty()
    }

    /// Whether no further update is expected without new input.
    pub fn is_settled(&self) -> bool {
        matches!(self.status, SuggestionStatus::Idle | SuggestionStatus::Ready)
    }

    /// Route to the full results for the current query.
    pub fn see_all(&self) -> Option<Route> {
        if self.query.is_empty() {
            None
        } else {
            Some(Route::search(self.query.clone()))
        }
    }

    /// Matches hidden by the cap.
    pub fn hidden_matches(&self) -> usize {
        self.total_matches.saturating_sub(self.suggestions.len())
    }
}
