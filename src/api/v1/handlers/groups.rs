/*
 * Responsibility
 * - GET /groups
 * - policy { requireUserUnlessScopes: ["groups"] } の後ろ。user がいなくても scope があれば通る
 */
use axum::Json;

use crate::api::v1::{dto::context::GroupsResponse, extractors::AccessCtx};

pub async fn groups(AccessCtx(ctx): AccessCtx) -> Json<GroupsResponse> {
    Json(GroupsResponse {
        client_id: ctx.client_id,
        on_behalf_of: ctx.user_id,
        scopes: ctx.scopes.unwrap_or_default(),
    })
}
