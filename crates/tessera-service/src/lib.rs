//! # tessera-service
//!
//! Business logic service layer for Tessera. Each service orchestrates
//! the storage capabilities of `tessera-store` and the pure evaluation of
//! `tessera-auth` to implement request-level use cases.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod context;
pub mod notification;
pub mod permission;
pub mod suggestion;

pub use context::RequestContext;
pub use notification::{AccessChangeRules, NotificationService};
pub use permission::PermissionService;
pub use suggestion::{QuotaAllocator, SuggestionService};
