//! Organization entity model.

use serde::{Deserialize, Serialize};

use super::{Resource, ResourceType};
use crate::permission::PermissionSet;

/// The top-level tenant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    /// Organization identifier.
    pub id: String,
    /// Short unique code.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Organization-level grants; `MANAGE` here makes a principal a manager
    /// of everything inside the organization.
    #[serde(default)]
    pub permissions: PermissionSet,
}

impl Resource for Organization {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn resource_type(&self) -> ResourceType {
        ResourceType::Organization
    }

    fn permissions(&self) -> &PermissionSet {
        &self.permissions
    }
}
