//! Attribute suggestions.
//!
//! Results are collections whose attribute list has been narrowed to the
//! attributes matching the text. Each collection keeps at most
//! `limit / found + 1` attributes, so a single wide collection cannot
//! crowd out the others.

use std::sync::Arc;

use async_trait::async_trait;

use tessera_core::result::AppResult;
use tessera_entity::resource::Collection;
use tessera_entity::suggestion::{SuggestionQuery, SuggestionType, Suggestions};
use tessera_store::repositories::CollectionRepository;

use crate::context::RequestContext;

use super::provider::{SuggestionProvider, search_query};

/// Collections matched by attribute name.
pub struct AttributeSuggestions {
    collections: Arc<dyn CollectionRepository>,
}

impl AttributeSuggestions {
    /// Creates the provider.
    pub fn new(collections: Arc<dyn CollectionRepository>) -> Self {
        Self { collections }
    }
}

/// Keep the first `cap` attributes whose name contains `text`, ignoring case.
fn narrow_attributes(collection: &mut Collection, text: &str, cap: usize) {
    let needle = text.to_lowercase();
    let attributes = std::mem::take(&mut collection.attributes);
    collection.attributes = attributes
        .into_iter()
        .filter(|a| a.name.to_lowercase().contains(&needle))
        .take(cap)
        .collect();
}

#[async_trait]
impl SuggestionProvider for AttributeSuggestions {
    fn kind(&self) -> SuggestionType {
        SuggestionType::Attribute
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
        let mut collections = self
            .collections
            .search_by_attributes(&search, ctx.is_manager)
            .await?;
        if collections.is_empty() {
            return Ok(Suggestions::default());
        }

        let cap = limit / collections.len() + 1;
        for collection in &mut collections {
            narrow_attributes(collection, &query.text, cap);
        }
        Ok(Suggestions::from_attributes(collections))
    }
}
