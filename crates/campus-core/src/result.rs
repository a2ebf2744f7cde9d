//! Convenience result type alias for Campus Hub.

use crate::error::AppError;

/// A specialized `Result` type for Campus Hub operations.
pub type AppResult<T> = Result<T, AppError>;
