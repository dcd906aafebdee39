use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use uuid::Uuid;

use crate::api::error::ApiError;

/// Resource identifier taken from the `{id}` path segment.
///
/// Anything that is not a UUID is rejected with [`ApiError::MalformedId`] rather than a 404, so
/// clients can tell a bad identifier from a missing resource.
#[derive(Debug, Clone, Copy)]
pub struct ResourceId(pub Uuid);

impl<S> FromRequestParts<S> for ResourceId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Ok(Path(raw)) = Path::<String>::from_request_parts(parts, state).await else {
            return Err(ApiError::MalformedId);
        };
        parse_id(&raw).map(ResourceId)
    }
}

/// Parses an identifier supplied by a client.
pub fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::try_parse(raw).map_err(|_| ApiError::MalformedId)
}
