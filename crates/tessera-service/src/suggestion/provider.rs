//! The provider seam shared by all suggestion kinds.

use async_trait::async_trait;

use tessera_core::result::AppResult;
use tessera_entity::suggestion::{SuggestionQuery, SuggestionType, Suggestions};
use tessera_store::query::SearchSuggestionQuery;

use crate::context::RequestContext;

use super::allocator::QuotaProvider;

/// One entity-specific authorized search.
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    /// The suggestion kind this provider answers.
    fn kind(&self) -> SuggestionType;

    /// Search on behalf of `ctx`, returning at most `limit` items.
    async fn suggest(
        &self,
        ctx: &RequestContext,
        query: &SuggestionQuery,
        limit: usize,
    ) -> AppResult<Suggestions>;
}

/// A provider tied to one request, ready for the allocator.
pub(crate) struct BoundProvider<'a> {
    pub(crate) provider: &'a dyn SuggestionProvider,
    pub(crate) ctx: &'a RequestContext,
    pub(crate) query: &'a SuggestionQuery,
}

#[async_trait]
impl QuotaProvider for BoundProvider<'_> {
    type Output = Suggestions;

    fn name(&self) -> &'static str {
        self.provider.kind().as_str()
    }

    async fn fetch(&self, limit: usize) -> AppResult<Suggestions> {
        self.provider.suggest(self.ctx, self.query, limit).await
    }
}

/// The authorized search arguments every provider starts from.
pub(crate) fn search_query(
    ctx: &RequestContext,
    query: &SuggestionQuery,
    limit: usize,
) -> SearchSuggestionQuery {
    SearchSuggestionQuery::builder(ctx.user_id.clone())
        .groups(ctx.group_ids.clone())
        .text(query.text.clone())
        .priority_collection_ids(query.priority_collection_ids.clone())
        .page(0, limit)
        .build()
}
