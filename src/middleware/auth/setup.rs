//! Setup stage: authenticate the platform hop → AccessContext を extensions に入れる
//!
//! - `Authorization: Basic dataporten:<secret>` を検証する
//! - `x-dataporten-*` headers を AccessContext に parse する
//! - 失敗時は 500 + `{"message": ...}` を返し、後続には進まない

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::error::AppError;
use crate::services::auth::PolicyEnforcer;

/// Routes behind this layer can rely on an `AccessContext` in request extensions.
pub fn apply<S>(router: Router<S>, enforcer: PolicyEnforcer) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(middleware::from_fn_with_state(enforcer, setup_middleware))
}

async fn setup_middleware(
    State(enforcer): State<PolicyEnforcer>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let ctx = match enforcer.init(req.headers()) {
        Ok(ctx) => ctx,
        Err(err) => {
            tracing::warn!(
                error = %err,
                method = %req.method(),
                path = %req.uri().path(),
                "platform authentication failed"
            );
            return Err(err.into());
        }
    };

    tracing::debug!(
        user_id = ctx.user_id.as_deref(),
        client_id = ctx.client_id.as_deref(),
        "dataporten context ready"
    );

    // middleware → policy stage / extractor への受け渡し
    req.extensions_mut().insert(ctx);

    Ok(next.run(req).await)
}
