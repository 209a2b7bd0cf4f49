//! Serializable image of a single-project workspace.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use tessera_core::result::AppResult;
use tessera_entity::resource::{Collection, LinkType, Organization, Project, View};

/// Everything needed to seed a [`MemoryWorkspace`](super::MemoryWorkspace).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceSnapshot {
    /// The organization.
    pub organization: Organization,
    /// The project inside the organization.
    pub project: Project,
    /// Collections of the project.
    #[serde(default)]
    pub collections: Vec<Collection>,
    /// Views of the project.
    #[serde(default)]
    pub views: Vec<View>,
    /// Link types of the project.
    #[serde(default)]
    pub link_types: Vec<LinkType>,
    /// Group id to member user ids.
    #[serde(default)]
    pub groups: BTreeMap<String, BTreeSet<String>>,
}

impl WorkspaceSnapshot {
    /// Parse a snapshot from JSON text.
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a snapshot file.
    pub fn read(path: &std::path::Path) -> AppResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
