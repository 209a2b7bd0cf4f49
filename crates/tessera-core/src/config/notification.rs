//! Access-change notification configuration.

use serde::{Deserialize, Serialize};

/// Settings for notifications produced by permission edits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Whether access-change notifications are dispatched at all.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Maximum number of notifications returned when listing recent ones.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            recent_limit: default_recent_limit(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_recent_limit() -> usize {
    500
}
