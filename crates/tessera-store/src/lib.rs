//! # tessera-store
//!
//! The storage boundary of Tessera. `repositories` declares the authorized
//! search capabilities the services consume; `memory` implements all of them
//! over concurrent maps for tests, fixtures, and the CLI.

pub mod memory;
pub mod query;
pub mod repositories;

pub use memory::{MemoryNotificationStore, MemoryWorkspace, WorkspaceSnapshot};
pub use query::SearchSuggestionQuery;
