//! User notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::kind::NotificationKind;
use crate::resource::{Resource, ResourceType};

/// A notification addressed to a single user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserNotification {
    /// Unique notification identifier.
    pub id: Uuid,
    /// The recipient user.
    pub user_id: String,
    /// What happened.
    pub kind: NotificationKind,
    /// Kind of the resource involved.
    pub resource_type: ResourceType,
    /// Identifier of the resource involved.
    pub resource_id: String,
    /// Name of the resource at the time of the change.
    pub resource_name: String,
    /// The user whose edit caused the notification.
    pub actor_id: Option<String>,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
    /// Whether the recipient has read it.
    #[serde(default)]
    pub read: bool,
}

impl UserNotification {
    /// Create an unread notification about `resource`.
    pub fn about<R: Resource + ?Sized>(
        user_id: impl Into<String>,
        kind: NotificationKind,
        resource: &R,
        actor_id: Option<&str>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            kind,
            resource_type: resource.resource_type(),
            resource_id: resource.id().to_string(),
            resource_name: resource.name().to_string(),
            actor_id: actor_id.map(str::to_string),
            created_at: Utc::now(),
            read: false,
        }
    }
}
