/*
 * Responsibility
 * - GET /context
 * - setup のみ (policy なし)。handler 自身が AccessContext に問い合わせて細かい判定をする例
 */
use axum::Json;

use crate::api::v1::{
    dto::context::{ContextDetailsResponse, ContextResponse},
    extractors::AccessCtx,
};

pub async fn context(AccessCtx(ctx): AccessCtx) -> Json<ContextDetailsResponse> {
    let can_read_user_id = ctx.has_scope("userid");

    Json(ContextDetailsResponse {
        context: ContextResponse::from(&ctx),
        can_read_user_id,
    })
}
