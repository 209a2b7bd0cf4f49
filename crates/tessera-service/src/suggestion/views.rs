//! View suggestions.

use std::sync::Arc;

use async_trait::async_trait;

use tessera_core::result::AppResult;
use tessera_entity::suggestion::{SuggestionQuery, SuggestionType, Suggestions};
use tessera_store::repositories::ViewRepository;

use crate::context::RequestContext;

use super::provider::{SuggestionProvider, search_query};

/// Authorized search over views by name.
pub struct ViewSuggestions {
    views: Arc<dyn ViewRepository>,
}

impl ViewSuggestions {
    /// Creates the provider.
    pub fn new(views: Arc<dyn ViewRepository>) -> Self {
        Self { views }
    }
}

#[async_trait]
impl SuggestionProvider for ViewSuggestions {
    fn kind(&self) -> SuggestionType {
        SuggestionType::View
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
        let views = self.views.search(&search, ctx.is_manager).await?;
        Ok(Suggestions::from_views(views))
    }
}
