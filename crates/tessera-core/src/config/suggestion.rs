//! Suggestion engine configuration.

use serde::{Deserialize, Serialize};

/// Settings for cross-entity suggestions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionConfig {
    /// Total number of items a single suggestion response may contain.
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
        }
    }
}

fn default_limit() -> usize {
    12
}
