//! # campus-api
//!
//! HTTP API layer for Campus Hub built on Axum.
//!
//! Provides the REST endpoints for clubs, memberships, events, and
//! announcements, plus middleware (CORS, compression, logging), extractors,
//! DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, serve};
pub use error::ApiError;
pub use state::AppState;
