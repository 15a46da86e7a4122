/*
 * Responsibility
 * - GET /me
 * - policy { requireUser } の後ろにあるので user_id は必ず Some
 */
use axum::Json;

use crate::api::v1::{dto::context::ContextResponse, extractors::AccessCtx};

pub async fn me(AccessCtx(ctx): AccessCtx) -> Json<ContextResponse> {
    Json(ContextResponse::from(&ctx))
}
