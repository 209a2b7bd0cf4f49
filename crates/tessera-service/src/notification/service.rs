//! Notification storage and retrieval for the current user.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use tessera_core::config::notification::NotificationConfig;
use tessera_core::error::{AppError, ErrorKind};
use tessera_core::result::AppResult;
use tessera_entity::notification::UserNotification;
use tessera_store::repositories::NotificationRepository;

use crate::context::RequestContext;

/// Manages user notifications.
#[derive(Clone)]
pub struct NotificationService {
    /// Notification repository.
    repo: Arc<dyn NotificationRepository>,
    /// Notification settings.
    config: NotificationConfig,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(repo: Arc<dyn NotificationRepository>, config: NotificationConfig) -> Self {
        Self { repo, config }
    }

    /// Whether notifications are sent at all.
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Stores a batch of notifications.
    ///
    /// Repository failures come back as `ErrorKind::Notification` with the
    /// original error as source.
    pub async fn dispatch(
        &self,
        notifications: Vec<UserNotification>,
    ) -> AppResult<Vec<UserNotification>> {
        if notifications.is_empty() {
            return Ok(notifications);
        }
        let count = notifications.len();
        let stored = self.repo.create_batch(notifications).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Notification,
                format!("Failed to dispatch {count} notifications: {}", e.message),
                e,
            )
        })?;
        info!(count = stored.len(), "Dispatched notifications");
        Ok(stored)
    }

    /// Newest notifications of the current user.
    pub async fn recent(&self, ctx: &RequestContext) -> AppResult<Vec<UserNotification>> {
        self.repo
            .find_recent(&ctx.user_id, self.config.recent_limit)
            .await
    }

    /// Marks a notification of the current user as read.
    pub async fn mark_read(
        &self,
        ctx: &RequestContext,
        notification_id: Uuid,
    ) -> AppResult<UserNotification> {
        self.repo.mark_read(notification_id, &ctx.user_id).await
    }

    /// Deletes a notification of the current user.
    pub async fn delete(&self, ctx: &RequestContext, notification_id: Uuid) -> AppResult<()> {
        self.repo.delete(notification_id, &ctx.user_id).await?;
        info!(user_id = %ctx.user_id, notification_id = %notification_id, "Notification deleted");
        Ok(())
    }
}
