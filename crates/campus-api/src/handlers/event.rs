//! Club event handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use campus_core::types::{PageRequest, PageResponse};
use campus_core::types::pagination::DEFAULT_PAGE_SIZE;
use campus_entity::event::ClubEvent;

use crate::dto::request::{CreateEventBody, EventListQuery, PatchEventBody, ReplaceEventBody};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{ApiQuery, IdPath, StaffUser, ValidatedJson};
use crate::state::AppState;

/// GET /api/clubs/events/?club_id=
pub async fn list_events(
    State(state): State<AppState>,
    auth: StaffUser,
    ApiQuery(query): ApiQuery<EventListQuery>,
) -> Result<Json<ApiResponse<PageResponse<ClubEvent>>>, ApiError> {
    let page = PageRequest::new(
        query.page.unwrap_or(1),
        query.per_page.unwrap_or(DEFAULT_PAGE_SIZE),
    );
    let events = state
        .event_service
        .list_events(&auth, query.club_id, page)
        .await?;
    Ok(Json(ApiResponse::ok(events)))
}

/// POST /api/clubs/events/
pub async fn create_event(
    State(state): State<AppState>,
    auth: StaffUser,
    ValidatedJson(body): ValidatedJson<CreateEventBody>,
) -> Result<(StatusCode, Json<ApiResponse<ClubEvent>>), ApiError> {
    let event = state.event_service.create_event(&auth, body.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(event))))
}

/// GET /api/clubs/events/{id}/
pub async fn get_event(
    State(state): State<AppState>,
    auth: StaffUser,
    IdPath(id): IdPath,
) -> Result<Json<ApiResponse<ClubEvent>>, ApiError> {
    let event = state.event_service.get_event(&auth, id).await?;
    Ok(Json(ApiResponse::ok(event)))
}

/// PUT /api/clubs/events/{id}/
pub async fn replace_event(
    State(state): State<AppState>,
    auth: StaffUser,
    IdPath(id): IdPath,
    ValidatedJson(body): ValidatedJson<ReplaceEventBody>,
) -> Result<Json<ApiResponse<ClubEvent>>, ApiError> {
    let event = state
        .event_service
        .update_event(&auth, id, body.into())
        .await?;
    Ok(Json(ApiResponse::ok(event)))
}

/// PATCH /api/clubs/events/{id}/
pub async fn patch_event(
    State(state): State<AppState>,
    auth: StaffUser,
    IdPath(id): IdPath,
    ValidatedJson(body): ValidatedJson<PatchEventBody>,
) -> Result<Json<ApiResponse<ClubEvent>>, ApiError> {
    let event = state
        .event_service
        .update_event(&auth, id, body.into())
        .await?;
    Ok(Json(ApiResponse::ok(event)))
}

/// DELETE /api/clubs/events/{id}/
pub async fn delete_event(
    State(state): State<AppState>,
    auth: StaffUser,
    IdPath(id): IdPath,
) -> Result<StatusCode, ApiError> {
    state.event_service.delete_event(&auth, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
