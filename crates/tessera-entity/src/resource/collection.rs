//! Collection entity model.

use serde::{Deserialize, Serialize};

use super::{Resource, ResourceType};
use crate::permission::PermissionSet;

/// A named field of a collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attribute {
    /// Attribute identifier, unique within the collection.
    pub id: String,
    /// Display name, matched by attribute suggestions.
    pub name: String,
}

impl Attribute {
    /// Create a new attribute.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A typed set of documents within a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection {
    /// Collection identifier.
    pub id: String,
    /// Owning project.
    #[serde(default)]
    pub project_id: String,
    /// Short code.
    #[serde(default)]
    pub code: String,
    /// Display name.
    pub name: String,
    /// Icon shown next to the name.
    #[serde(default)]
    pub icon: Option<String>,
    /// Field definitions.
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    /// Collection-level grants.
    #[serde(default)]
    pub permissions: PermissionSet,
}

impl Collection {
    /// Whether any attribute name contains `needle`, ignoring case.
    pub fn has_attribute_matching(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.attributes
            .iter()
            .any(|a| a.name.to_lowercase().contains(&needle))
    }
}

impl Resource for Collection {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn resource_type(&self) -> ResourceType {
        ResourceType::Collection
    }

    fn permissions(&self) -> &PermissionSet {
        &self.permissions
    }
}
