//! Principal resolution within the current organization and project.

use std::collections::BTreeSet;

use async_trait::async_trait;

use tessera_core::result::AppResult;

/// Answers who a user is within the current workspace.
#[async_trait]
pub trait ScopeRepository: Send + Sync + 'static {
    /// Whether the user manages the enclosing organization or project.
    async fn is_manager(&self, user_id: &str) -> AppResult<bool>;

    /// Groups the user belongs to.
    async fn user_groups(&self, user_id: &str) -> AppResult<BTreeSet<String>>;
}
