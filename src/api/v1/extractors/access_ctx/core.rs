use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::services::auth::error::AccessError;

use super::AccessContext;

/// Handler で AccessContext を受け取るための extractor
/// setup stage が request.extensions() に insert 済みである前提
/// 見つからない場合は pipeline の組み立てミスなので ConfigurationError (500)
pub struct AccessCtx(pub AccessContext);

impl<S> FromRequestParts<S> for AccessCtx
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AccessContext>()
            .cloned()
            .map(AccessCtx)
            .ok_or_else(|| AccessError::setup_required().into())
    }
}
