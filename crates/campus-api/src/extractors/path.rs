//! Typed path parameter extractor.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use campus_entity::Id;

use crate::error::ApiError;

/// A numeric `{id}` path segment; anything else is a 400.
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub Id);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<Id>::from_request_parts(parts, state).await?;
        Ok(Self(id))
    }
}
