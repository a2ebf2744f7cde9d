//! Club membership handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use campus_core::types::PageResponse;
use campus_entity::membership::ClubMembership;

use crate::dto::request::{AddMemberBody, PatchMembershipBody, ReplaceMembershipBody};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{IdPath, Pagination, StaffUser, ValidatedJson};
use crate::state::AppState;

/// GET /api/clubs/{id}/members/
pub async fn list_members(
    State(state): State<AppState>,
    auth: StaffUser,
    IdPath(club_id): IdPath,
    Pagination(page): Pagination,
) -> Result<Json<ApiResponse<PageResponse<ClubMembership>>>, ApiError> {
    let members = state
        .membership_service
        .list_members(&auth, club_id, page)
        .await?;
    Ok(Json(ApiResponse::ok(members)))
}

/// POST /api/clubs/{id}/members/
///
/// A student already registered in the club is rejected with 400.
pub async fn add_member(
    State(state): State<AppState>,
    auth: StaffUser,
    IdPath(club_id): IdPath,
    ValidatedJson(body): ValidatedJson<AddMemberBody>,
) -> Result<(StatusCode, Json<ApiResponse<ClubMembership>>), ApiError> {
    let membership = state
        .membership_service
        .add_member(&auth, club_id, body.into())
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(membership))))
}

/// GET /api/clubs/members/{id}/
pub async fn get_membership(
    State(state): State<AppState>,
    auth: StaffUser,
    IdPath(id): IdPath,
) -> Result<Json<ApiResponse<ClubMembership>>, ApiError> {
    let membership = state.membership_service.get_membership(&auth, id).await?;
    Ok(Json(ApiResponse::ok(membership)))
}

/// PUT /api/clubs/members/{id}/
pub async fn replace_membership(
    State(state): State<AppState>,
    auth: StaffUser,
    IdPath(id): IdPath,
    ValidatedJson(body): ValidatedJson<ReplaceMembershipBody>,
) -> Result<Json<ApiResponse<ClubMembership>>, ApiError> {
    let membership = state
        .membership_service
        .update_membership(&auth, id, body.into())
        .await?;
    Ok(Json(ApiResponse::ok(membership)))
}

/// PATCH /api/clubs/members/{id}/
pub async fn patch_membership(
    State(state): State<AppState>,
    auth: StaffUser,
    IdPath(id): IdPath,
    ValidatedJson(body): ValidatedJson<PatchMembershipBody>,
) -> Result<Json<ApiResponse<ClubMembership>>, ApiError> {
    let membership = state
        .membership_service
        .update_membership(&auth, id, body.into())
        .await?;
    Ok(Json(ApiResponse::ok(membership)))
}

/// DELETE /api/clubs/members/{id}/
pub async fn delete_membership(
    State(state): State<AppState>,
    auth: StaffUser,
    IdPath(id): IdPath,
) -> Result<StatusCode, ApiError> {
    state.membership_service.remove_membership(&auth, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
