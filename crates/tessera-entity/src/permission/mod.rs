//! Grant lists attached to resources.

pub mod grant;
pub mod role;
pub mod set;

pub use grant::Grant;
pub use role::Role;
pub use set::PermissionSet;
