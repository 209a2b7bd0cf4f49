//! Convenience result type alias for Tessera.

use crate::error::AppError;

/// A specialized `Result` type for Tessera operations.
pub type AppResult<T> = Result<T, AppError>;
