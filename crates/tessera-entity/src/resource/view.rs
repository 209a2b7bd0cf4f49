//! View entity model.

use serde::{Deserialize, Serialize};

use super::{Resource, ResourceType};
use crate::permission::PermissionSet;

/// A saved query and perspective over collections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct View {
    /// View identifier.
    pub id: String,
    /// Owning project.
    #[serde(default)]
    pub project_id: String,
    /// Short code.
    #[serde(default)]
    pub code: String,
    /// Display name.
    pub name: String,
    /// Rendering perspective (table, kanban, ...).
    #[serde(default)]
    pub perspective: Option<String>,
    /// Collections the view's query reads from.
    #[serde(default)]
    pub collection_ids: Vec<String>,
    /// View-level grants.
    #[serde(default)]
    pub permissions: PermissionSet,
}

impl Resource for View {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn resource_type(&self) -> ResourceType {
        ResourceType::View
    }

    fn permissions(&self) -> &PermissionSet {
        &self.permissions
    }
}
