//! # tessera-core
//!
//! Core crate for Tessera. Contains the unified error system, configuration
//! schemas, and the page-window type shared by every search capability.
//!
//! This crate has **no** internal dependencies on other Tessera crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
