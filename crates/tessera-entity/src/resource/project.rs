//! Project entity model.

use serde::{Deserialize, Serialize};

use super::{Resource, ResourceType};
use crate::permission::PermissionSet;

/// A project within an organization, owning collections, views, and link types.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project identifier.
    pub id: String,
    /// Owning organization.
    pub organization_id: String,
    /// Short code, unique within the organization.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Project-level grants.
    #[serde(default)]
    pub permissions: PermissionSet,
}

impl Resource for Project {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn resource_type(&self) -> ResourceType {
        ResourceType::Project
    }

    fn permissions(&self) -> &PermissionSet {
        &self.permissions
    }
}
