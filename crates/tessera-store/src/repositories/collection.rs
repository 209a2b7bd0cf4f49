//! Collection search capability.

use std::collections::BTreeSet;

use async_trait::async_trait;

use tessera_core::result::AppResult;
use tessera_entity::resource::Collection;

use crate::query::SearchSuggestionQuery;

/// Authorized access to collections.
#[async_trait]
pub trait CollectionRepository: Send + Sync + 'static {
    /// Collections whose name matches the query text.
    async fn search(
        &self,
        query: &SearchSuggestionQuery,
        is_manager: bool,
    ) -> AppResult<Vec<Collection>>;

    /// Collections having at least one attribute whose name matches the
    /// query text. Attributes are returned unfiltered.
    async fn search_by_attributes(
        &self,
        query: &SearchSuggestionQuery,
        is_manager: bool,
    ) -> AppResult<Vec<Collection>>;

    /// Every collection of the project, regardless of grants.
    async fn find_all(&self) -> AppResult<Vec<Collection>>;

    /// Collections the user can read, directly or through `groups`.
    async fn find_readable(
        &self,
        user_id: &str,
        groups: &BTreeSet<String>,
    ) -> AppResult<Vec<Collection>>;
}
