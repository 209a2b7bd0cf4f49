//! Cross-entity suggestions under a shared result budget.

pub mod allocator;
pub mod attributes;
pub mod collections;
pub mod link_types;
pub mod provider;
pub mod service;
pub mod views;

pub use allocator::{Allotment, QuotaAllocator, QuotaProvider};
pub use provider::SuggestionProvider;
pub use service::SuggestionService;
