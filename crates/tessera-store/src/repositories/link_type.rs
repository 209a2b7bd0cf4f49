//! Link type search capability.

use async_trait::async_trait;

use tessera_core::result::AppResult;
use tessera_entity::resource::LinkType;

use crate::query::SearchSuggestionQuery;

/// Access to link types.
///
/// Link types are authorized through their endpoints: callers pass the
/// collections the user may see in `query.collection_ids`.
#[async_trait]
pub trait LinkTypeRepository: Send + Sync + 'static {
    /// Link types whose name matches the query text and which touch at
    /// least one of `query.collection_ids`.
    async fn search(&self, query: &SearchSuggestionQuery) -> AppResult<Vec<LinkType>>;
}
