//! Shared value types used across crate boundaries.

pub mod pagination;

pub use pagination::PageWindow;
