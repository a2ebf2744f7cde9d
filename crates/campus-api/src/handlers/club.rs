//! Club CRUD handlers. All require an admin or superadmin.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use campus_core::types::PageResponse;
use campus_entity::club::Club;

use crate::dto::request::{CreateClubBody, PatchClubBody, ReplaceClubBody};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{IdPath, Pagination, StaffUser, ValidatedJson};
use crate::state::AppState;

/// GET /api/clubs/
pub async fn list_clubs(
    State(state): State<AppState>,
    auth: StaffUser,
    Pagination(page): Pagination,
) -> Result<Json<ApiResponse<PageResponse<Club>>>, ApiError> {
    let clubs = state.club_service.list_clubs(&auth, page).await?;
    Ok(Json(ApiResponse::ok(clubs)))
}

/// POST /api/clubs/
pub async fn create_club(
    State(state): State<AppState>,
    auth: StaffUser,
    ValidatedJson(body): ValidatedJson<CreateClubBody>,
) -> Result<(StatusCode, Json<ApiResponse<Club>>), ApiError> {
    let club = state.club_service.create_club(&auth, body.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(club))))
}

/// GET /api/clubs/{id}/
pub async fn get_club(
    State(state): State<AppState>,
    auth: StaffUser,
    IdPath(id): IdPath,
) -> Result<Json<ApiResponse<Club>>, ApiError> {
    let club = state.club_service.get_club(&auth, id).await?;
    Ok(Json(ApiResponse::ok(club)))
}

/// PUT /api/clubs/{id}/
pub async fn replace_club(
    State(state): State<AppState>,
    auth: StaffUser,
    IdPath(id): IdPath,
    ValidatedJson(body): ValidatedJson<ReplaceClubBody>,
) -> Result<Json<ApiResponse<Club>>, ApiError> {
    let club = state.club_service.update_club(&auth, id, body.into()).await?;
    Ok(Json(ApiResponse::ok(club)))
}

/// PATCH /api/clubs/{id}/
pub async fn patch_club(
    State(state): State<AppState>,
    auth: StaffUser,
    IdPath(id): IdPath,
    ValidatedJson(body): ValidatedJson<PatchClubBody>,
) -> Result<Json<ApiResponse<Club>>, ApiError> {
    let club = state.club_service.update_club(&auth, id, body.into()).await?;
    Ok(Json(ApiResponse::ok(club)))
}

/// DELETE /api/clubs/{id}/
pub async fn delete_club(
    State(state): State<AppState>,
    auth: StaffUser,
    IdPath(id): IdPath,
) -> Result<StatusCode, ApiError> {
    state.club_service.delete_club(&auth, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
