//! Recipient rules for access-change notifications.

use tessera_auth::acl::PermissionDiff;
use tessera_entity::notification::{NotificationKind, UserNotification};
use tessera_entity::resource::Resource;

/// Turns a reader delta into per-user notifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessChangeRules;

impl AccessChangeRules {
    /// One `ResourceShared` per added reader and one `ResourceUnshared` per
    /// removed reader. The actor is never told about their own edit.
    pub fn notifications<R: Resource + ?Sized>(
        resource: &R,
        diff: &PermissionDiff,
        actor_id: Option<&str>,
    ) -> Vec<UserNotification> {
        let shared = diff
            .added_readers
            .iter()
            .map(|user| (user, NotificationKind::ResourceShared));
        let unshared = diff
            .removed_readers
            .iter()
            .map(|user| (user, NotificationKind::ResourceUnshared));

        shared
            .chain(unshared)
            .filter(|(user, _)| Some(user.as_str()) != actor_id)
            .map(|(user, kind)| UserNotification::about(user.as_str(), kind, resource, actor_id))
            .collect()
    }
}
