//! Access evaluation and the resource-update hook.

pub mod service;

pub use service::PermissionService;
