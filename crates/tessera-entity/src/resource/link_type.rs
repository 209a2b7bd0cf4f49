//! Link type entity model.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{Resource, ResourceType};
use crate::permission::PermissionSet;

/// A named relation between documents of two collections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkType {
    /// Link type identifier.
    pub id: String,
    /// Owning project.
    #[serde(default)]
    pub project_id: String,
    /// Display name.
    pub name: String,
    /// The two endpoint collections.
    pub collection_ids: [String; 2],
    /// Link-type-level grants.
    #[serde(default)]
    pub permissions: PermissionSet,
}

impl LinkType {
    /// Whether either endpoint is one of `ids`.
    pub fn touches_any(&self, ids: &BTreeSet<String>) -> bool {
        self.collection_ids.iter().any(|c| ids.contains(c))
    }
}

impl Resource for LinkType {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn resource_type(&self) -> ResourceType {
        ResourceType::LinkType
    }

    fn permissions(&self) -> &PermissionSet {
        &self.permissions
    }
}
