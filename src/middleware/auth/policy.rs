//! Policy stage: evaluate a declared `Policy` against the request's AccessContext.
//!
//! Must sit behind the setup stage. Without a context the pipeline was
//! assembled wrong, which surfaces as a ConfigurationError (500, logged at error).
//! A failed requirement is rendered as 403 with the requirement's message.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::AccessContext;
use crate::error::AppError;
use crate::services::auth::{AccessError, Policy};

pub fn apply<S>(router: Router<S>, policy: Policy) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(middleware::from_fn_with_state(
        Arc::new(policy),
        policy_middleware,
    ))
}

async fn policy_middleware(
    State(policy): State<Arc<Policy>>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let ctx = req
        .extensions()
        .get::<AccessContext>()
        .ok_or_else(AccessError::setup_required)?;

    if let Err(err) = policy.evaluate(ctx) {
        tracing::info!(
            error = %err,
            path = %req.uri().path(),
            user_id = ctx.user_id.as_deref(),
            "policy denied request"
        );
        return Err(err.into());
    }

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::auth::PolicyEnforcer;
    use axum::http::{StatusCode, header};
    use axum::routing::get;
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn request(user: Option<&str>, scopes: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/r").header(
            header::AUTHORIZATION,
            format!("Basic {}", STANDARD.encode("dataporten:secret")),
        );
        if let Some(u) = user {
            builder = builder.header("x-dataporten-userid", u);
        }
        if let Some(s) = scopes {
            builder = builder.header("x-dataporten-scopes", s);
        }
        builder.body(Body::empty()).unwrap()
    }

    fn guarded(policy: Policy) -> Router {
        let router = apply(Router::new().route("/r", get(|| async { "ok" })), policy);
        PolicyEnforcer::new("secret").setup(router)
    }

    async fn message(res: Response) -> serde_json::Value {
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        body["message"].clone()
    }

    #[tokio::test]
    async fn require_user_denies_without_user() {
        let res = guarded(Policy::new().require_user())
            .oneshot(request(None, None))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            message(res).await,
            "Request is required to be on behalf of an authenticated end user but is not."
        );
    }

    #[tokio::test]
    async fn require_user_passes_with_user() {
        let res = guarded(Policy::new().require_user())
            .oneshot(request(Some("u1"), None))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn scopes_satisfy_require_user_unless_scopes() {
        let res = guarded(Policy::new().require_user_unless_scopes(["x"]))
            .oneshot(request(None, Some("x")))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn missing_scope_is_denied() {
        let res = guarded(Policy::new().require_scopes(["a", "z"]))
            .oneshot(request(Some("u1"), Some("a,b,c")))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            message(res).await,
            "Request is not authorized with all the required sub scopes"
        );
    }

    #[tokio::test]
    async fn policy_without_setup_is_a_configuration_error() {
        let router: Router = apply(
            Router::new().route("/r", get(|| async { "ok" })),
            Policy::new(),
        );
        let res = router.oneshot(request(Some("u1"), None)).await.unwrap();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            message(res).await,
            "Dataporten needs to be setup before we can run a policy. Use the setup() middleware first."
        );
    }
}
