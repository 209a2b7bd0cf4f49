//! Access evaluation for request contexts and access-change detection.

use tracing::{debug, warn};

use tessera_auth::acl::{self, AccessDecision, PermissionDiff};
use tessera_entity::permission::PermissionSet;
use tessera_entity::resource::Resource;

use crate::context::RequestContext;
use crate::notification::{AccessChangeRules, NotificationService};

/// Evaluates grants and reacts to grant edits.
#[derive(Clone)]
pub struct PermissionService {
    /// Where access-change notifications go.
    notifications: NotificationService,
}

impl PermissionService {
    /// Creates a new permission service.
    pub fn new(notifications: NotificationService) -> Self {
        Self { notifications }
    }

    /// What the current user may do with a resource holding `permissions`.
    pub fn evaluate(&self, permissions: &PermissionSet, ctx: &RequestContext) -> AccessDecision {
        acl::evaluate(permissions, &ctx.user_id, &ctx.group_ids, ctx.is_manager)
    }

    /// Reader delta between two grant lists.
    pub fn diff(
        &self,
        before: Option<&PermissionSet>,
        after: Option<&PermissionSet>,
    ) -> PermissionDiff {
        acl::diff(before, after)
    }

    /// Called after a resource was created, edited or deleted.
    ///
    /// Notifies users who gained or lost read access. Notification failures
    /// are logged and never fail the update itself.
    pub async fn on_resource_updated<R: Resource>(
        &self,
        ctx: &RequestContext,
        before: Option<&R>,
        after: Option<&R>,
    ) -> PermissionDiff {
        let diff = acl::diff(
            before.map(|r| r.permissions()),
            after.map(|r| r.permissions()),
        );
        if diff.is_empty() {
            return diff;
        }
        if !self.notifications.is_enabled() {
            debug!("Notifications disabled, skipping dispatch");
            return diff;
        }

        // Both snapshots exist here, otherwise the diff would be empty.
        let Some(resource) = after.or(before) else {
            return diff;
        };
        let batch = AccessChangeRules::notifications(resource, &diff, Some(ctx.user_id.as_str()));
        if let Err(e) = self.notifications.dispatch(batch).await {
            warn!(
                resource_id = resource.id(),
                resource_type = %resource.resource_type(),
                error = %e,
                "Failed to dispatch access-change notifications"
            );
        }
        diff
    }
}
