//! Announcement handlers.
//!
//! Listing is open to any authenticated user and shows active
//! announcements only; everything else requires an admin or superadmin.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use campus_auth::rbac::AccessRule;
use campus_core::types::PageResponse;
use campus_entity::announcement::Announcement;

use crate::dto::request::{CreateAnnouncementBody, PatchAnnouncementBody, ReplaceAnnouncementBody};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, IdPath, Pagination, StaffUser, ValidatedJson};
use crate::middleware::rbac::require_rule;
use crate::state::AppState;

/// GET /api/announcements/
pub async fn list_announcements(
    State(state): State<AppState>,
    auth: AuthUser,
    Pagination(page): Pagination,
) -> Result<Json<ApiResponse<PageResponse<Announcement>>>, ApiError> {
    require_rule(&state, &auth, &AccessRule::AUTHENTICATED)?;
    let announcements = state.announcement_service.list_active(&auth, page).await?;
    Ok(Json(ApiResponse::ok(announcements)))
}

/// POST /api/announcements/create/
pub async fn create_announcement(
    State(state): State<AppState>,
    auth: StaffUser,
    ValidatedJson(body): ValidatedJson<CreateAnnouncementBody>,
) -> Result<(StatusCode, Json<ApiResponse<Announcement>>), ApiError> {
    let announcement = state
        .announcement_service
        .create_announcement(&auth, body.into())
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(announcement))))
}

/// GET /api/announcements/{id}/
pub async fn get_announcement(
    State(state): State<AppState>,
    auth: StaffUser,
    IdPath(id): IdPath,
) -> Result<Json<ApiResponse<Announcement>>, ApiError> {
    let announcement = state
        .announcement_service
        .get_announcement(&auth, id)
        .await?;
    Ok(Json(ApiResponse::ok(announcement)))
}

/// PUT /api/announcements/{id}/
pub async fn replace_announcement(
    State(state): State<AppState>,
    auth: StaffUser,
    IdPath(id): IdPath,
    ValidatedJson(body): ValidatedJson<ReplaceAnnouncementBody>,
) -> Result<Json<ApiResponse<Announcement>>, ApiError> {
    let announcement = state
        .announcement_service
        .update_announcement(&auth, id, body.into())
        .await?;
    Ok(Json(ApiResponse::ok(announcement)))
}

/// PATCH /api/announcements/{id}/
pub async fn patch_announcement(
    State(state): State<AppState>,
    auth: StaffUser,
    IdPath(id): IdPath,
    ValidatedJson(body): ValidatedJson<PatchAnnouncementBody>,
) -> Result<Json<ApiResponse<Announcement>>, ApiError> {
    let announcement = state
        .announcement_service
        .update_announcement(&auth, id, body.into())
        .await?;
    Ok(Json(ApiResponse::ok(announcement)))
}

/// DELETE /api/announcements/{id}/
pub async fn delete_announcement(
    State(state): State<AppState>,
    auth: StaffUser,
    IdPath(id): IdPath,
) -> Result<StatusCode, ApiError> {
    state
        .announcement_service
        .delete_announcement(&auth, id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
