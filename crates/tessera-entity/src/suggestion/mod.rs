//! Suggestion request and response values.

pub mod model;
pub mod query;

pub use model::Suggestions;
pub use query::{SuggestionQuery, SuggestionType};
