//! `AuthUser` extractor: pulls the bearer token, validates it, and injects context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::TypedHeader;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;

use campus_core::error::AppError;
use campus_service::context::RequestContext;

use crate::error::ApiError;
use crate::middleware::rbac::require_staff;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| {
                    AppError::unauthorized("Authentication credentials were not provided.")
                })?;

        let claims = state.jwt_decoder.decode_access_token(bearer.token())?;

        Ok(AuthUser(RequestContext::new(
            claims.user_id(),
            claims.role,
            claims.username,
        )))
    }
}

/// An authenticated admin or superadmin.
///
/// Rejects with 401 when no valid token is presented and 403 when the
/// principal lacks both staff capabilities.
#[derive(Debug, Clone)]
pub struct StaffUser(pub AuthUser);

impl std::ops::Deref for StaffUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0.0
    }
}

impl FromRequestParts<AppState> for StaffUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth = AuthUser::from_request_parts(parts, state).await?;
        require_staff(state, &auth)?;
        Ok(StaffUser(auth))
    }
}
