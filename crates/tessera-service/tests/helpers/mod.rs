//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::collections::BTreeSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use uuid::Uuid;

use tessera_core::config::AppConfig;
use tessera_core::error::AppError;
use tessera_core::result::AppResult;
use tessera_entity::notification::UserNotification;
use tessera_entity::resource::{Collection, LinkType};
use tessera_service::RequestContext;
use tessera_service::notification::NotificationService;
use tessera_service::permission::PermissionService;
use tessera_service::suggestion::SuggestionService;
use tessera_store::repositories::{CollectionRepository, LinkTypeRepository, NotificationRepository};
use tessera_store::{
    MemoryNotificationStore, MemoryWorkspace, SearchSuggestionQuery, WorkspaceSnapshot,
};

/// Test application context
pub struct TestApp {
    /// The seeded workspace
    pub workspace: Arc<MemoryWorkspace>,
    /// Notifications written by the permission service
    pub notifications: Arc<MemoryNotificationStore>,
    /// Application config
    pub config: AppConfig,
    /// Suggestion service over the workspace
    pub suggestions: SuggestionService,
    /// Permission service wired to the notification store
    pub permissions: PermissionService,
    /// Notification service over the same store
    pub notification_service: NotificationService,
}

impl TestApp {
    /// Create a new test application with default configuration
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a new test application
    pub fn with_config(config: AppConfig) -> Self {
        let snapshot = WorkspaceSnapshot::from_json(include_str!("../fixtures/workspace.json"))
            .expect("Failed to parse workspace fixture");
        let workspace = Arc::new(MemoryWorkspace::from_snapshot(snapshot));
        let notifications = Arc::new(MemoryNotificationStore::new());

        let suggestions = SuggestionService::new(
            workspace.clone(),
            workspace.clone(),
            workspace.clone(),
            &config.suggestion,
        );
        let notification_service =
            NotificationService::new(notifications.clone(), config.notification.clone());
        let permissions = PermissionService::new(notification_service.clone());

        Self {
            workspace,
            notifications,
            config,
            suggestions,
            permissions,
            notification_service,
        }
    }

    /// Resolve the request context of a user against the workspace
    pub async fn context(&self, user_id: &str) -> RequestContext {
        RequestContext::resolve(user_id, self.workspace.as_ref())
            .await
            .expect("Failed to resolve context")
    }
}

/// A notification repository that is always down.
pub struct FailingNotifications;

#[async_trait]
impl NotificationRepository for FailingNotifications {
    async fn create_batch(
        &self,
        _notifications: Vec<UserNotification>,
    ) -> AppResult<Vec<UserNotification>> {
        Err(AppError::storage("notification store unavailable"))
    }

    async fn find_recent(&self, _user_id: &str, _limit: usize) -> AppResult<Vec<UserNotification>> {
        Err(AppError::storage("notification store unavailable"))
    }

    async fn mark_read(&self, _id: Uuid, _user_id: &str) -> AppResult<UserNotification> {
        Err(AppError::storage("notification store unavailable"))
    }

    async fn delete(&self, _id: Uuid, _user_id: &str) -> AppResult<()> {
        Err(AppError::storage("notification store unavailable"))
    }
}

/// A collection repository that is always down and counts how often it was asked.
#[derive(Default)]
pub struct FailingCollections {
    calls: AtomicUsize,
}

impl FailingCollections {
    /// The message every call fails with
    pub const MESSAGE: &'static str = "collection store unavailable";

    /// Number of calls received so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail<T>(&self) -> AppResult<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(AppError::storage(Self::MESSAGE))
    }
}

#[async_trait]
impl CollectionRepository for FailingCollections {
    async fn search(
        &self,
        _query: &SearchSuggestionQuery,
        _is_manager: bool,
    ) -> AppResult<Vec<Collection>> {
        self.fail()
    }

    async fn search_by_attributes(
        &self,
        _query: &SearchSuggestionQuery,
        _is_manager: bool,
    ) -> AppResult<Vec<Collection>> {
        self.fail()
    }

    async fn find_all(&self) -> AppResult<Vec<Collection>> {
        self.fail()
    }

    async fn find_readable(
        &self,
        _user_id: &str,
        _groups: &BTreeSet<String>,
    ) -> AppResult<Vec<Collection>> {
        self.fail()
    }
}

/// Link type search over a workspace that records every query it receives.
pub struct RecordingLinkTypes {
    inner: Arc<MemoryWorkspace>,
    calls: AtomicUsize,
}

impl RecordingLinkTypes {
    /// Wrap a workspace
    pub fn new(inner: Arc<MemoryWorkspace>) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of searches received so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LinkTypeRepository for RecordingLinkTypes {
    async fn search(&self, query: &SearchSuggestionQuery) -> AppResult<Vec<LinkType>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        LinkTypeRepository::search(self.inner.as_ref(), query).await
    }
}
