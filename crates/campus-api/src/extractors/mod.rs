//! Custom Axum extractors.
//!
//! Every extractor rejects with [`ApiError`](crate::error::ApiError) so that
//! malformed input produces the standard JSON error body.

pub mod auth;
pub mod json;
pub mod pagination;
pub mod path;

pub use auth::{AuthUser, StaffUser};
pub use json::ValidatedJson;
pub use pagination::{ApiQuery, Pagination, PaginationParams};
pub use path::IdPath;
