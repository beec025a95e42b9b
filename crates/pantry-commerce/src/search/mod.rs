//! Search module.
//!
//! Contains the debounced suggestion pipeline behind the search box.

mod pipeline;
mod state;

pub use pipeline::SuggestionPipeline;
pub use state::{SuggestionConfig, SuggestionState, SuggestionStatus};
