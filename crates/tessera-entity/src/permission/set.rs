//! The grant list attached to a resource.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::grant::Grant;
use super::role::Role;

/// User and group grants of a single resource.
///
/// Each mapping is keyed by principal id, so a principal holds at most one
/// grant per mapping: writing a grant for a principal replaces the previous
/// one instead of appending to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionSet {
    /// Grants keyed by user id.
    #[serde(default, rename = "users")]
    user_grants: BTreeMap<String, BTreeSet<Role>>,
    /// Grants keyed by group id.
    #[serde(default, rename = "groups")]
    group_grants: BTreeMap<String, BTreeSet<Role>>,
}

impl PermissionSet {
    /// Create an empty permission set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a permission set from user and group grants.
    ///
    /// Later grants for the same principal win.
    pub fn from_grants(
        users: impl IntoIterator<Item = Grant>,
        groups: impl IntoIterator<Item = Grant>,
    ) -> Self {
        let mut set = Self::new();
        for grant in users {
            set.upsert_user_grant(grant);
        }
        for grant in groups {
            set.upsert_group_grant(grant);
        }
        set
    }

    /// Insert or replace the grant of a user.
    pub fn upsert_user_grant(&mut self, grant: Grant) -> Option<Grant> {
        self.user_grants
            .insert(grant.id.clone(), grant.roles)
            .map(|roles| Grant { id: grant.id, roles })
    }

    /// Insert or replace the grant of a group.
    pub fn upsert_group_grant(&mut self, grant: Grant) -> Option<Grant> {
        self.group_grants
            .insert(grant.id.clone(), grant.roles)
            .map(|roles| Grant { id: grant.id, roles })
    }

    /// Remove the grant of a user, returning it if present.
    pub fn remove_user_grant(&mut self, id: &str) -> Option<Grant> {
        self.user_grants
            .remove_entry(id)
            .map(|(id, roles)| Grant { id, roles })
    }

    /// Remove the grant of a group, returning it if present.
    pub fn remove_group_grant(&mut self, id: &str) -> Option<Grant> {
        self.group_grants
            .remove_entry(id)
            .map(|(id, roles)| Grant { id, roles })
    }

    /// Roles granted directly to a user.
    pub fn user_roles(&self, id: &str) -> Option<&BTreeSet<Role>> {
        self.user_grants.get(id)
    }

    /// Roles granted to a group.
    pub fn group_roles(&self, id: &str) -> Option<&BTreeSet<Role>> {
        self.group_grants.get(id)
    }

    /// Iterate over user grants as `(principal, roles)`.
    pub fn user_grants(&self) -> impl Iterator<Item = (&str, &BTreeSet<Role>)> {
        self.user_grants.iter().map(|(id, roles)| (id.as_str(), roles))
    }

    /// Iterate over group grants as `(principal, roles)`.
    pub fn group_grants(&self) -> impl Iterator<Item = (&str, &BTreeSet<Role>)> {
        self.group_grants.iter().map(|(id, roles)| (id.as_str(), roles))
    }

    /// Whether the set holds no grant at all.
    pub fn is_empty(&self) -> bool {
        self.user_grants.is_empty() && self.group_grants.is_empty()
    }
}
