//! Resource kinds that own a grant list.

pub mod collection;
pub mod link_type;
pub mod organization;
pub mod project;
pub mod view;

use serde::{Deserialize, Serialize};

use crate::permission::PermissionSet;

pub use collection::{Attribute, Collection};
pub use link_type::LinkType;
pub use organization::Organization;
pub use project::Project;
pub use view::View;

/// Discriminates the resource kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    /// A tenant organization.
    Organization,
    /// A project within an organization.
    Project,
    /// A collection of documents within a project.
    Collection,
    /// A saved view over one or more collections.
    View,
    /// A link type connecting two collections.
    LinkType,
}

impl ResourceType {
    /// Return the type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Organization => "organization",
            Self::Project => "project",
            Self::Collection => "collection",
            Self::View => "view",
            Self::LinkType => "link_type",
        }
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ResourceType {
    type Err = tessera_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "organization" => Ok(Self::Organization),
            "project" => Ok(Self::Project),
            "collection" => Ok(Self::Collection),
            "view" => Ok(Self::View),
            "link_type" | "linktype" | "link" => Ok(Self::LinkType),
            _ => Err(tessera_core::AppError::validation(format!(
                "Invalid resource type: '{s}'"
            ))),
        }
    }
}

/// Capability shared by every entity that carries its own access-control list.
pub trait Resource {
    /// The resource identifier.
    fn id(&self) -> &str;

    /// The human-readable name.
    fn name(&self) -> &str;

    /// Which kind of resource this is.
    fn resource_type(&self) -> ResourceType;

    /// The grant list attached to the resource.
    fn permissions(&self) -> &PermissionSet;
}
