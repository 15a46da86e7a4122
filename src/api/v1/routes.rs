/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - /health は素通し、それ以外は setup stage の後ろ
 * - route ごとの Policy もここで決める
 */
use axum::{Router, routing::get};

use crate::api::v1::handlers::{context::context, groups::groups, health::health, me::me};
use crate::services::auth::Policy;
use crate::state::AppState;

pub fn routes(state: &AppState) -> Router<AppState> {
    let enforcer = &state.enforcer;

    let me_routes: Router<AppState> = enforcer.policy(
        Router::new().route("/me", get(me)),
        Policy::new().require_user(),
    );
    let groups_routes: Router<AppState> = enforcer.policy(
        Router::new().route("/groups", get(groups)),
        Policy::new().require_user_unless_scopes(["groups"]),
    );

    // policy layers are inside setup, so setup always runs first
    let protected = enforcer.setup(
        Router::<AppState>::new()
            .route("/context", get(context))
            .merge(me_routes)
            .merge(groups_routes),
    );

    Router::new().route("/health", get(health)).merge(protected)
}
