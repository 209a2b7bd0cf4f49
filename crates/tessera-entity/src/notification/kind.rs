//! Notification kinds.

use serde::{Deserialize, Serialize};

/// What happened to the recipient's access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// The recipient can now read the resource.
    ResourceShared,
    /// The recipient can no longer read the resource.
    ResourceUnshared,
}

impl NotificationKind {
    /// Return the kind as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ResourceShared => "resource_shared",
            Self::ResourceUnshared => "resource_unshared",
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
