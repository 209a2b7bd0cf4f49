//! Suggestion response type.

use serde::{Deserialize, Serialize};

use crate::resource::{Collection, LinkType, View};

/// Suggestions grouped by entity kind.
///
/// Attribute suggestions are collections whose attribute list has been
/// narrowed to the matching attributes; collection suggestions carry no
/// attributes at all.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Suggestions {
    /// Collections with only their matching attributes.
    pub attributes: Vec<Collection>,
    /// Matching collections, stripped of attributes.
    pub collections: Vec<Collection>,
    /// Matching views.
    pub views: Vec<View>,
    /// Matching link types.
    pub link_types: Vec<LinkType>,
}

impl Suggestions {
    /// Suggestions holding attribute matches only.
    pub fn from_attributes(attributes: Vec<Collection>) -> Self {
        Self {
            attributes,
            ..Self::default()
        }
    }

    /// Suggestions holding collection matches only.
    pub fn from_collections(collections: Vec<Collection>) -> Self {
        Self {
            collections,
            ..Self::default()
        }
    }

    /// Suggestions holding view matches only.
    pub fn from_views(views: Vec<View>) -> Self {
        Self {
            views,
            ..Self::default()
        }
    }

    /// Suggestions holding link type matches only.
    pub fn from_link_types(link_types: Vec<LinkType>) -> Self {
        Self {
            link_types,
            ..Self::default()
        }
    }

    /// Number of suggested entities across all kinds.
    ///
    /// An attribute suggestion counts once per collection, whatever the
    /// number of attributes it keeps.
    pub fn len(&self) -> usize {
        self.attributes.len() + self.collections.len() + self.views.len() + self.link_types.len()
    }

    /// Whether no kind has any suggestion.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append every slice of `other` to this response.
    pub fn merge(&mut self, other: Suggestions) {
        self.attributes.extend(other.attributes);
        self.collections.extend(other.collections);
        self.views.extend(other.views);
        self.link_types.extend(other.link_types);
    }
}
