//! Collection suggestions.

use std::sync::Arc;

use async_trait::async_trait;

use tessera_core::result::AppResult;
use tessera_entity::suggestion::{SuggestionQuery, SuggestionType, Suggestions};
use tessera_store::repositories::CollectionRepository;

use crate::context::RequestContext;

use super::provider::{SuggestionProvider, search_query};

/// Collections matched by name, returned without their attributes.
pub struct CollectionSuggestions {
    collections: Arc<dyn CollectionRepository>,
}

impl CollectionSuggestions {
    /// Creates the provider.
    pub fn new(collections: Arc<dyn CollectionRepository>) -> Self {
        Self { collections }
    }
}

#[async_trait]
impl SuggestionProvider for CollectionSuggestions {
    fn kind(&self) -> SuggestionType {
        SuggestionType::Collection
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
        let search = search_query(ctx, query, limit);
        let mut collections = self.collections.search(&search, ctx.is_manager).await?;
        // Attributes have their own suggestion kind.
        for collection in &mut collections {
            collection.attributes.clear();
        }
        Ok(Suggestions::from_collections(collections))
    }
}
