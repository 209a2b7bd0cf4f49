//! Link type suggestions.
//!
//! A link type is only worth suggesting when the caller can see at least
//! one of the two collections it connects.

use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use tessera_core::result::AppResult;
use tessera_entity::suggestion::{SuggestionQuery, SuggestionType, Suggestions};
use tessera_store::query::SearchSuggestionQuery;
use tessera_store::repositories::{CollectionRepository, LinkTypeRepository};

use crate::context::RequestContext;

use super::provider::{SuggestionProvider, search_query};

/// Link types scoped to the caller's visible collections.
pub struct LinkTypeSuggestions {
    collections: Arc<dyn CollectionRepository>,
    link_types: Arc<dyn LinkTypeRepository>,
}

impl LinkTypeSuggestions {
    /// Creates the provider.
    pub fn new(
        collections: Arc<dyn CollectionRepository>,
        link_types: Arc<dyn LinkTypeRepository>,
    ) -> Self {
        Self {
            collections,
            link_types,
        }
    }

    /// Ids of every collection the caller may read.
    async fn allowed_collection_ids(&self, ctx: &RequestContext) -> AppResult<BTreeSet<String>> {
        let collections = if ctx.is_manager {
            self.collections.find_all().await?
        } else {
            self.collections
                .find_readable(&ctx.user_id, &ctx.group_ids)
                .await?
        };
        Ok(collections.into_iter().map(|c| c.id).collect())
    }
}

#[async_trait]
impl SuggestionProvider for LinkTypeSuggestions {
    fn kind(&self) -> SuggestionType {
        SuggestionType::Link
    }

    async fn suggest(
        &self,
        ctx: &RequestContext,
        query: &SuggestionQuery,
        limit: usize,
    ) -> AppResult<Suggestions> {
        if limit == 0 {
            return Ok(Suggestions::default());
        }

        let allowed = self.allowed_collection_ids(ctx).await?;
        if allowed.is_empty() {
            debug!(user_id = %ctx.user_id, "No visible collections, skipping link types");
            return Ok(Suggestions::default());
        }

        let search = SearchSuggestionQuery {
            collection_ids: Some(allowed),
            ..search_query(ctx, query, limit)
        };
        let link_types = self.link_types.search(&search).await?;
        Ok(Suggestions::from_link_types(link_types))
    }
}
