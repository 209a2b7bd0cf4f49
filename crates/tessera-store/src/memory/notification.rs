//! In-memory user notification store.

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;
use uuid::Uuid;

use tessera_core::error::AppError;
use tessera_core::result::AppResult;
use tessera_entity::notification::UserNotification;

use crate::repositories::NotificationRepository;

/// Notifications grouped per recipient.
#[derive(Debug, Default)]
pub struct MemoryNotificationStore {
    /// Recipient user id to its notifications, in insertion order.
    by_user: DashMap<String, Vec<UserNotification>>,
}

impl MemoryNotificationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of stored notifications.
    pub fn len(&self) -> usize {
        self.by_user.iter().map(|n| n.value().len()).sum()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl NotificationRepository for MemoryNotificationStore {
    async fn create_batch(
        &self,
        notifications: Vec<UserNotification>,
    ) -> AppResult<Vec<UserNotification>> {
        for notification in &notifications {
            self.by_user
                .entry(notification.user_id.clone())
                .or_default()
                .push(notification.clone());
        }
        debug!(count = notifications.len(), "Stored notification batch");
        Ok(notifications)
    }

    async fn find_recent(&self, user_id: &str, limit: usize) -> AppResult<Vec<UserNotification>> {
        let mut recent = self
            .by_user
            .get(user_id)
            .map(|n| n.value().clone())
            .unwrap_or_default();
        recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        recent.truncate(limit);
        Ok(recent)
    }

    async fn mark_read(&self, id: Uuid, user_id: &str) -> AppResult<UserNotification> {
        let mut entries = self
            .by_user
            .get_mut(user_id)
            .ok_or_else(|| AppError::not_found(format!("Notification '{id}' not found")))?;
        let notification = entries
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| AppError::not_found(format!("Notification '{id}' not found")))?;
        notification.read = true;
        Ok(notification.clone())
    }

    async fn delete(&self, id: Uuid, user_id: &str) -> AppResult<()> {
        let mut entries = self
            .by_user
            .get_mut(user_id)
            .ok_or_else(|| AppError::not_found(format!("Notification '{id}' not found")))?;
        let before = entries.len();
        entries.retain(|n| n.id != id);
        if entries.len() == before {
            return Err(AppError::not_found(format!("Notification '{id}' not found")));
        }
        Ok(())
    }
}
