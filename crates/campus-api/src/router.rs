//! Route definitions for the Campus Hub HTTP API.
//!
//! All routes are organized by resource and mounted under `/api`. Paths keep
//! their trailing slash. The router receives `AppState` and passes it to all
//! handlers via Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with all routes, the body limit, and request logging.
///
/// Transport layers (compression, CORS, tracing, timeouts) are added by
/// [`build_app`](crate::app::build_app).
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_bytes;

    let api_routes = Router::new()
        .merge(announcement_routes())
        .merge(club_routes())
        .merge(membership_routes())
        .merge(event_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Announcements: list for any authenticated user, the rest for staff
fn announcement_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/announcements/",
            get(handlers::announcement::list_announcements),
        )
        .route(
            "/announcements/create/",
            post(handlers::announcement::create_announcement),
        )
        .route(
            "/announcements/{id}/",
            get(handlers::announcement::get_announcement)
                .put(handlers::announcement::replace_announcement)
                .patch(handlers::announcement::patch_announcement)
                .delete(handlers::announcement::delete_announcement),
        )
}

/// Club CRUD
fn club_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/clubs/",
            get(handlers::club::list_clubs).post(handlers::club::create_club),
        )
        .route(
            "/clubs/{id}/",
            get(handlers::club::get_club)
                .put(handlers::club::replace_club)
                .patch(handlers::club::patch_club)
                .delete(handlers::club::delete_club),
        )
}

/// Club members, nested under the club for list/add
fn membership_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/clubs/{id}/members/",
            get(handlers::membership::list_members).post(handlers::membership::add_member),
        )
        .route(
            "/clubs/members/{id}/",
            get(handlers::membership::get_membership)
                .put(handlers::membership::replace_membership)
                .patch(handlers::membership::patch_membership)
                .delete(handlers::membership::delete_membership),
        )
}

/// Club events
fn event_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/clubs/events/",
            get(handlers::event::list_events).post(handlers::event::create_event),
        )
        .route(
            "/clubs/events/{id}/",
            get(handlers::event::get_event)
                .put(handlers::event::replace_event)
                .patch(handlers::event::patch_event)
                .delete(handlers::event::delete_event),
        )
}

/// Liveness and store connectivity
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
}
