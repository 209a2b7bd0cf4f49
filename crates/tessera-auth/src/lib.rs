//! # tessera-auth
//!
//! Authorization over resource grant lists.
//!
//! ## Modules
//!
//! - `acl`: read/manage evaluation with the manager bypass, and the reader
//!   delta between two snapshots of the same grant list
//!
//! Everything here is pure: no I/O, no shared state. Whether a principal
//! manages the enclosing organization or project is decided by the caller
//! and passed in as a flag.

pub mod acl;

pub use acl::{AccessDecision, PermissionDiff, evaluate};
