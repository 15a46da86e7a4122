//! End-to-end: CORS → setup → policy → handler through the assembled v1 router.

use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use dataporten_api::app::build_router;
use dataporten_api::config::{AppEnv, Config};
use dataporten_api::state::AppState;
use dataporten_api::PolicyEnforcer;

const SECRET: &str = "platform-secret";

fn app() -> Router {
    let config = Config {
        addr: "127.0.0.1:0".parse().unwrap(),
        app_env: AppEnv::Development,
        dataporten_password: SECRET.to_string(),
        cors_enabled: true,
        request_timeout: Duration::from_secs(5),
        request_body_limit_bytes: 1024,
    };
    build_router(AppState::new(PolicyEnforcer::new(SECRET)), &config)
}

fn platform_auth() -> String {
    format!("Basic {}", STANDARD.encode(format!("dataporten:{SECRET}")))
}

async fn send(req: Request<Body>) -> (StatusCode, Value) {
    let res = app().oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

#[tokio::test]
async fn authenticated_user_reaches_handler() {
    let (status, body) = send(
        Request::builder()
            .uri("/api/v1/me")
            .header(header::AUTHORIZATION, platform_auth())
            .header("x-dataporten-userid", "u1")
            .header("x-dataporten-clientid", "c1")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["userId"], "u1");
    assert_eq!(body["clientId"], "c1");
    assert_eq!(body["hasUser"], true);
}

#[tokio::test]
async fn require_user_denies_client_only_request() {
    let (status, body) = send(
        Request::builder()
            .uri("/api/v1/me")
            .header(header::AUTHORIZATION, platform_auth())
            .header("x-dataporten-clientid", "c1")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        body["message"],
        "Request is required to be on behalf of an authenticated end user but is not."
    );
}

#[tokio::test]
async fn missing_platform_credentials_never_reach_policy() {
    let (status, body) = send(
        Request::builder()
            .uri("/api/v1/me")
            .header("x-dataporten-userid", "u1")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "message": "Missing Authorization header" }));
}

#[tokio::test]
async fn scopes_alone_open_groups() {
    let (status, body) = send(
        Request::builder()
            .uri("/api/v1/groups")
            .header(header::AUTHORIZATION, platform_auth())
            .header("x-dataporten-scopes", "groups,userid")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["onBehalfOf"], Value::Null);
    assert_eq!(body["scopes"], json!(["groups", "userid"]));
}

#[tokio::test]
async fn context_reports_handler_level_scope_check() {
    let (status, body) = send(
        Request::builder()
            .uri("/api/v1/context")
            .header(header::AUTHORIZATION, platform_auth())
            .header("x-dataporten-userid-sec", "feide:u1@example.org")
            .header("x-dataporten-accesstoken", "1")
            .header("x-dataporten-token", "tok")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["canReadUserId"], false);
    assert_eq!(body["userIdSec"], json!(["feide:u1@example.org"]));
    assert_eq!(body["hasAccessToken"], true);
    assert_eq!(body["scopes"], Value::Null);
}

#[tokio::test]
async fn preflight_skips_platform_authentication() {
    let res = app()
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api/v1/me")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert_eq!(res.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn health_needs_no_credentials() {
    let (status, body) = send(
        Request::builder()
            .uri("/api/v1/health")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
