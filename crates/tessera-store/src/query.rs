//! Search parameters shared by every authorized suggestion search.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use tessera_core::types::PageWindow;

/// An authorized, paged, free-text search on behalf of one principal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSuggestionQuery {
    /// The searching user.
    pub user_id: String,
    /// Groups the user belongs to.
    pub groups: BTreeSet<String>,
    /// Text to match.
    pub text: String,
    /// Collections to rank first. Never a filter.
    pub priority_collection_ids: BTreeSet<String>,
    /// Restrict to entities touching these collections (link types only).
    pub collection_ids: Option<BTreeSet<String>>,
    /// Result window.
    pub page: PageWindow,
}

impl SearchSuggestionQuery {
    /// Start building a query for `user_id`.
    pub fn builder(user_id: impl Into<String>) -> SearchSuggestionQueryBuilder {
        SearchSuggestionQueryBuilder {
            query: Self {
                user_id: user_id.into(),
                ..Self::default()
            },
        }
    }

    /// Whether `name` matches the text, ignoring case.
    pub fn matches_text(&self, name: &str) -> bool {
        name.to_lowercase().contains(&self.text.to_lowercase())
    }
}

/// Builder for [`SearchSuggestionQuery`].
#[derive(Debug, Clone)]
pub struct SearchSuggestionQueryBuilder {
    query: SearchSuggestionQuery,
}

impl SearchSuggestionQueryBuilder {
    /// Set the user's groups.
    pub fn groups(mut self, groups: BTreeSet<String>) -> Self {
        self.query.groups = groups;
        self
    }

    /// Set the text to match.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.query.text = text.into();
        self
    }

    /// Set the collections to rank first.
    pub fn priority_collection_ids(mut self, ids: BTreeSet<String>) -> Self {
        self.query.priority_collection_ids = ids;
        self
    }

    /// Restrict results to the given collections.
    pub fn collection_ids(mut self, ids: BTreeSet<String>) -> Self {
        self.query.collection_ids = Some(ids);
        self
    }

    /// Set the result window.
    pub fn page(mut self, offset: usize, limit: usize) -> Self {
        self.query.page = PageWindow::new(offset, limit);
        self
    }

    /// Finish building.
    pub fn build(self) -> SearchSuggestionQuery {
        self.query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let query = SearchSuggestionQuery::builder("u1")
            .groups(BTreeSet::from(["g1".to_string()]))
            .text("Inv")
            .collection_ids(BTreeSet::from(["c1".to_string()]))
            .page(0, 4)
            .build();

        assert_eq!(query.user_id, "u1");
        assert_eq!(query.page, PageWindow::first(4));
        assert!(query.priority_collection_ids.is_empty());
        assert!(query.collection_ids.is_some());
    }

    #[test]
    fn test_text_match_ignores_case() {
        let query = SearchSuggestionQuery::builder("u1").text("inv").build();
        assert!(query.matches_text("Invoices"));
        assert!(query.matches_text("Past INVOICES"));
        assert!(!query.matches_text("Orders"));

        let empty = SearchSuggestionQuery::builder("u1").build();
        assert!(empty.matches_text("anything"));
    }
}
