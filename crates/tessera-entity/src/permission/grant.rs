//! A principal's role assignment on a resource.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::role::Role;

/// An immutable `(principal, roles)` pair.
///
/// The principal is a user id or a group id; the two id spaces are
/// disjoint by convention only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grant {
    /// User or group id.
    pub id: String,
    /// Roles held by the principal.
    pub roles: BTreeSet<Role>,
}

impl Grant {
    /// Create a grant from any collection of roles.
    pub fn new(id: impl Into<String>, roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            id: id.into(),
            roles: roles.into_iter().collect(),
        }
    }

    /// Whether the grant holds the given role.
    pub fn has(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}
