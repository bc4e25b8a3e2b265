#![allow(dead_code)]
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use configs::{AppConfig, AuthConfig, DatabaseConfig};
use serde_json::Value;
use tower::Service;

use server::startup::build_app;

pub const TEST_SECRET: &str = "test-secret";

pub fn test_config() -> AppConfig {
    AppConfig {
        database: DatabaseConfig::in_memory(),
        auth: AuthConfig { jwt_secret: TEST_SECRET.into(), token_ttl_minutes: 15 },
        ..AppConfig::default()
    }
}

/// Router over a fresh in-memory database.
pub async fn test_app() -> anyhow::Result<Router> {
    build_app(&test_config()).await
}

pub async fn send(app: &Router, req: Request<Body>) -> anyhow::Result<Response<Body>> {
    Ok(app.clone().call(req).await?)
}

pub fn json_request(method: &str, uri: &str, body: Value, token: Option<&str>) -> anyhow::Result<Request<Body>> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(t) = token {
        builder = builder.header("authorization", format!("Bearer {t}"));
    }
    Ok(builder.body(Body::from(serde_json::to_vec(&body)?))?)
}

pub fn get_request(uri: &str, token: Option<&str>) -> anyhow::Result<Request<Body>> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(t) = token {
        builder = builder.header("authorization", format!("Bearer {t}"));
    }
    Ok(builder.body(Body::empty())?)
}

pub async fn body_json(resp: Response<Body>) -> anyhow::Result<Value> {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Register `username` and return a fresh access token.
pub async fn admin_token(app: &Router, username: &str, password: &str) -> anyhow::Result<String> {
    let creds = serde_json::json!({"username": username, "password": password});
    send(app, json_request("POST", "/api/admin/register", creds.clone(), None)?).await?;
    let resp = send(app, json_request("POST", "/api/admin/login", creds, None)?).await?;
    let body = body_json(resp).await?;
    body["access_token"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| anyhow::anyhow!("no access_token in {body}"))
}
