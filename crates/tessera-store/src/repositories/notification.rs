//! User notification persistence capability.

use async_trait::async_trait;
use uuid::Uuid;

use tessera_core::result::AppResult;
use tessera_entity::notification::UserNotification;

/// Storage for user notifications.
#[async_trait]
pub trait NotificationRepository: Send + Sync + 'static {
    /// Store a batch of notifications.
    async fn create_batch(&self, notifications: Vec<UserNotification>)
    -> AppResult<Vec<UserNotification>>;

    /// The user's newest notifications, newest first, at most `limit`.
    async fn find_recent(&self, user_id: &str, limit: usize) -> AppResult<Vec<UserNotification>>;

    /// Mark one of the user's notifications as read.
    async fn mark_read(&self, id: Uuid, user_id: &str) -> AppResult<UserNotification>;

    /// Delete one of the user's notifications.
    async fn delete(&self, id: Uuid, user_id: &str) -> AppResult<()>;
}
