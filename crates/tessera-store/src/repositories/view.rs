//! View search capability.

use async_trait::async_trait;

use tessera_core::result::AppResult;
use tessera_entity::resource::View;

use crate::query::SearchSuggestionQuery;

/// Authorized access to views.
#[async_trait]
pub trait ViewRepository: Send + Sync + 'static {
    /// Views whose name matches the query text.
    async fn search(&self, query: &SearchSuggestionQuery, is_manager: bool)
    -> AppResult<Vec<View>>;
}
