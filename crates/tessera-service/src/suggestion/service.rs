//! Suggestion dispatch.

use std::sync::Arc;

use tracing::{debug, info};

use tessera_core::config::suggestion::SuggestionConfig;
use tessera_core::result::AppResult;
use tessera_entity::suggestion::{SuggestionQuery, SuggestionType, Suggestions};
use tessera_store::repositories::{CollectionRepository, LinkTypeRepository, ViewRepository};

use crate::context::RequestContext;

use super::allocator::{QuotaAllocator, QuotaProvider};
use super::attributes::AttributeSuggestions;
use super::collections::CollectionSuggestions;
use super::link_types::LinkTypeSuggestions;
use super::provider::{BoundProvider, SuggestionProvider};
use super::views::ViewSuggestions;

/// Answers suggestion queries across views, link types, collections and attributes.
pub struct SuggestionService {
    views: Arc<dyn SuggestionProvider>,
    link_types: Arc<dyn SuggestionProvider>,
    collections: Arc<dyn SuggestionProvider>,
    attributes: Arc<dyn SuggestionProvider>,
    /// Total result budget per query.
    limit: usize,
}

impl SuggestionService {
    /// Creates the service over the given repositories.
    pub fn new(
        collections: Arc<dyn CollectionRepository>,
        views: Arc<dyn ViewRepository>,
        link_types: Arc<dyn LinkTypeRepository>,
        config: &SuggestionConfig,
    ) -> Self {
        Self::with_providers(
            Arc::new(ViewSuggestions::new(views)),
            Arc::new(LinkTypeSuggestions::new(collections.clone(), link_types)),
            Arc::new(CollectionSuggestions::new(collections.clone())),
            Arc::new(AttributeSuggestions::new(collections)),
            config.limit,
        )
    }

    /// Creates the service from already built providers.
    pub fn with_providers(
        views: Arc<dyn SuggestionProvider>,
        link_types: Arc<dyn SuggestionProvider>,
        collections: Arc<dyn SuggestionProvider>,
        attributes: Arc<dyn SuggestionProvider>,
        limit: usize,
    ) -> Self {
        Self {
            views,
            link_types,
            collections,
            attributes,
            limit,
        }
    }

    /// The total result budget.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Answers `query` on behalf of `ctx`.
    ///
    /// A single type gets the whole budget. `ALL` shares it between the
    /// providers in the order views, link types, collections, attributes;
    /// views are left out when the query is anchored to priority collections.
    pub async fn suggest(
        &self,
        ctx: &RequestContext,
        query: &SuggestionQuery,
    ) -> AppResult<Suggestions> {
        let suggestions = match query.suggestion_type {
            SuggestionType::All => self.suggest_all(ctx, query).await?,
            SuggestionType::Attribute => self.attributes.suggest(ctx, query, self.limit).await?,
            SuggestionType::Collection => self.collections.suggest(ctx, query, self.limit).await?,
            SuggestionType::Link => self.link_types.suggest(ctx, query, self.limit).await?,
            SuggestionType::View => self.views.suggest(ctx, query, self.limit).await?,
        };

        info!(
            user_id = %ctx.user_id,
            suggestion_type = %query.suggestion_type,
            count = suggestions.len(),
            "Suggestions computed"
        );
        Ok(suggestions)
    }

    async fn suggest_all(
        &self,
        ctx: &RequestContext,
        query: &SuggestionQuery,
    ) -> AppResult<Suggestions> {
        let mut order: Vec<&dyn SuggestionProvider> = Vec::with_capacity(4);
        if query.should_suggest_views() {
            order.push(self.views.as_ref());
        } else {
            debug!("Priority collections given, views left out");
        }
        order.push(self.link_types.as_ref());
        order.push(self.collections.as_ref());
        order.push(self.attributes.as_ref());

        let bound: Vec<BoundProvider<'_>> = order
            .into_iter()
            .map(|provider| BoundProvider {
                provider,
                ctx,
                query,
            })
            .collect();
        let providers: Vec<&dyn QuotaProvider<Output = Suggestions>> = bound
            .iter()
            .map(|p| p as &dyn QuotaProvider<Output = Suggestions>)
            .collect();

        let outputs = QuotaAllocator::new(self.limit).allocate(&providers).await?;
        let mut combined = Suggestions::default();
        for output in outputs {
            combined.merge(output);
        }
        Ok(combined)
    }
}
