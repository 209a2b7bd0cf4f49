//! Request context carrying the acting principal and its resolved scope.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tessera_core::result::AppResult;
use tessera_store::repositories::ScopeRepository;

/// Context for the current request.
///
/// Built once per request so that every operation knows *who* is acting,
/// which groups they act through, and whether the manager bypass applies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The acting user's ID.
    pub user_id: String,
    /// Groups the user belongs to.
    pub group_ids: BTreeSet<String>,
    /// Whether the user manages the enclosing organization or project.
    pub is_manager: bool,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: impl Into<String>, group_ids: BTreeSet<String>, is_manager: bool) -> Self {
        Self {
            user_id: user_id.into(),
            group_ids,
            is_manager,
            request_time: Utc::now(),
        }
    }

    /// Resolves groups and the manager flag for `user_id`.
    pub async fn resolve(user_id: &str, scope: &dyn ScopeRepository) -> AppResult<Self> {
        let group_ids = scope.user_groups(user_id).await?;
        let is_manager = scope.is_manager(user_id).await?;
        Ok(Self::new(user_id, group_ids, is_manager))
    }
}
