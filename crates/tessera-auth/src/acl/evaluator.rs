//! Read and manage checks over a resource's grant list.
//!
//! Rules:
//! - A grant is read-capable when it holds `READ` or `MANAGE`.
//! - The manager bypass grants everything without consulting the list.
//! - Group grants count for the principal when the caller supplies the
//!   group ids; groups are never expanded into member users here.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::trace;

use tessera_entity::permission::{PermissionSet, Role};

/// Outcome of evaluating one principal against one grant list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessDecision {
    /// The principal may see the resource.
    pub can_read: bool,
    /// The principal may administer the resource.
    pub can_manage: bool,
}

/// Whether a role set confers read visibility.
pub fn is_read_capable(roles: &BTreeSet<Role>) -> bool {
    roles.contains(&Role::Read) || roles.contains(&Role::Manage)
}

/// Principals (users and groups) holding a read-capable grant.
pub fn readers(permissions: &PermissionSet) -> BTreeSet<String> {
    permissions
        .user_grants()
        .chain(permissions.group_grants())
        .filter(|(_, roles)| is_read_capable(roles))
        .map(|(id, _)| id.to_string())
        .collect()
}

/// Users holding a read-capable grant directly.
pub fn user_readers(permissions: &PermissionSet) -> BTreeSet<String> {
    permissions
        .user_grants()
        .filter(|(_, roles)| is_read_capable(roles))
        .map(|(id, _)| id.to_string())
        .collect()
}

/// Users holding `MANAGE` directly.
pub fn managers(permissions: &PermissionSet) -> BTreeSet<String> {
    permissions
        .user_grants()
        .filter(|(_, roles)| roles.contains(&Role::Manage))
        .map(|(id, _)| id.to_string())
        .collect()
}

/// Whether `principal_id`, directly or through one of `group_ids`, may read.
pub fn can_read(
    permissions: &PermissionSet,
    principal_id: &str,
    group_ids: &BTreeSet<String>,
    is_manager: bool,
) -> bool {
    is_manager || holds(permissions, principal_id, group_ids, is_read_capable)
}

/// Whether `principal_id`, directly or through one of `group_ids`, may manage.
pub fn can_manage(
    permissions: &PermissionSet,
    principal_id: &str,
    group_ids: &BTreeSet<String>,
    is_manager: bool,
) -> bool {
    is_manager
        || holds(permissions, principal_id, group_ids, |roles| {
            roles.contains(&Role::Manage)
        })
}

/// Evaluate both capabilities at once.
pub fn evaluate(
    permissions: &PermissionSet,
    principal_id: &str,
    group_ids: &BTreeSet<String>,
    is_manager: bool,
) -> AccessDecision {
    let decision = AccessDecision {
        can_read: can_read(permissions, principal_id, group_ids, is_manager),
        can_manage: can_manage(permissions, principal_id, group_ids, is_manager),
    };
    trace!(
        principal = principal_id,
        is_manager,
        can_read = decision.can_read,
        can_manage = decision.can_manage,
        "Evaluated grant list"
    );
    decision
}

fn holds(
    permissions: &PermissionSet,
    principal_id: &str,
    group_ids: &BTreeSet<String>,
    check: impl Fn(&BTreeSet<Role>) -> bool,
) -> bool {
    if permissions.user_roles(principal_id).is_some_and(&check) {
        return true;
    }
    group_ids
        .iter()
        .filter_map(|group| permissions.group_roles(group))
        .any(check)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_entity::permission::Grant;

    fn role_subsets() -> Vec<BTreeSet<Role>> {
        (0u8..16)
            .map(|mask| {
                Role::ALL
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1u8 << *i) != 0)
                    .map(|(_, r)| *r)
                    .collect()
            })
            .collect()
    }

    fn sample_set() -> PermissionSet {
        PermissionSet::from_grants(
            [
                Grant::new("reader", [Role::Read]),
                Grant::new("manager", [Role::Manage]),
                Grant::new("writer", [Role::Write]),
                Grant::new("sharer", [Role::Share, Role::Read]),
            ],
            [
                Grant::new("team", [Role::Read]),
                Grant::new("admins", [Role::Manage, Role::Write]),
                Grant::new("guests", [Role::Share]),
            ],
        )
    }

    #[test]
    fn test_read_capability_rule() {
        for roles in role_subsets() {
            let expected = roles.contains(&Role::Read) || roles.contains(&Role::Manage);
            assert_eq!(is_read_capable(&roles), expected, "roles: {roles:?}");
        }
    }

    #[test]
    fn test_readers_include_groups() {
        let set = sample_set();
        let expected: BTreeSet<String> = ["reader", "manager", "sharer", "team", "admins"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(readers(&set), expected);
    }

    #[test]
    fn test_user_readers_exclude_groups() {
        let set = sample_set();
        let expected: BTreeSet<String> = ["reader", "manager", "sharer"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(user_readers(&set), expected);
    }

    #[test]
    fn test_managers_are_readers() {
        let set = sample_set();
        assert_eq!(managers(&set), BTreeSet::from(["manager".to_string()]));

        for roles in role_subsets() {
            let set = PermissionSet::from_grants([Grant::new("u", roles.clone())], []);
            assert!(managers(&set).is_subset(&readers(&set)), "roles: {roles:?}");
        }
    }

    #[test]
    fn test_manage_without_read_can_read() {
        let set = sample_set();
        assert!(can_read(&set, "manager", &BTreeSet::new(), false));
        assert!(!can_read(&set, "writer", &BTreeSet::new(), false));
        assert!(!can_read(&set, "stranger", &BTreeSet::new(), false));
    }

    #[test]
    fn test_group_grant_confers_read() {
        let set = sample_set();
        let groups = BTreeSet::from(["team".to_string()]);
        assert!(can_read(&set, "stranger", &groups, false));

        let guests = BTreeSet::from(["guests".to_string()]);
        assert!(!can_read(&set, "stranger", &guests, false));
    }

    #[test]
    fn test_manager_bypass_ignores_grants() {
        let empty = PermissionSet::new();
        assert!(can_read(&empty, "anyone", &BTreeSet::new(), true));
        assert!(can_manage(&empty, "anyone", &BTreeSet::new(), true));
        assert!(can_read(&sample_set(), "writer", &BTreeSet::new(), true));
    }

    #[test]
    fn test_evaluate() {
        let set = sample_set();
        let admins = BTreeSet::from(["admins".to_string()]);

        assert_eq!(
            evaluate(&set, "reader", &BTreeSet::new(), false),
            AccessDecision {
                can_read: true,
                can_manage: false
            }
        );
        assert_eq!(
            evaluate(&set, "stranger", &admins, false),
            AccessDecision {
                can_read: true,
                can_manage: true
            }
        );
    }
}
