//! Suggestion request types.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which entity kinds a suggestion request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SuggestionType {
    /// Every kind, sharing one budget.
    #[default]
    All,
    /// Attributes within collections.
    Attribute,
    /// Collections.
    Collection,
    /// Link types.
    Link,
    /// Views.
    View,
}

impl SuggestionType {
    /// Return the type as an upper-case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Attribute => "ATTRIBUTE",
            Self::Collection => "COLLECTION",
            Self::Link => "LINK",
            Self::View => "VIEW",
        }
    }
}

impl fmt::Display for SuggestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SuggestionType {
    type Err = tessera_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ALL" => Ok(Self::All),
            "ATTRIBUTE" => Ok(Self::Attribute),
            "COLLECTION" => Ok(Self::Collection),
            "LINK" => Ok(Self::Link),
            "VIEW" => Ok(Self::View),
            _ => Err(tessera_core::AppError::validation(format!(
                "Unknown suggestion type: '{s}'"
            ))),
        }
    }
}

/// A free-text suggestion request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SuggestionQuery {
    /// Text to match against names.
    #[serde(default)]
    pub text: String,
    /// Requested entity kind.
    #[serde(default, rename = "type")]
    pub suggestion_type: SuggestionType,
    /// Collections the caller is anchored to. Used as a ranking hint, and a
    /// non-empty set turns view suggestions off in the all-types flow.
    #[serde(default)]
    pub priority_collection_ids: BTreeSet<String>,
}

impl SuggestionQuery {
    /// Create a query without priority collections.
    pub fn new(text: impl Into<String>, suggestion_type: SuggestionType) -> Self {
        Self {
            text: text.into(),
            suggestion_type,
            priority_collection_ids: BTreeSet::new(),
        }
    }

    /// Anchor the query to the given collections.
    pub fn with_priority_collections(
        mut self,
        ids: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.priority_collection_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Whether the all-types flow should include views.
    pub fn should_suggest_views(&self) -> bool {
        self.priority_collection_ids.is_empty()
    }
}
