use axum::http::StatusCode;
use serde_json::json;

mod support;
use support::{admin_token, body_json, get_request, json_request, send, test_app, TEST_SECRET};

#[tokio::test]
async fn test_register_and_login_flow() -> anyhow::Result<()> {
    let app = test_app().await?;
    let creds = json!({"username": "root", "password": "S3curePass!"});

    let resp = send(&app, json_request("POST", "/api/admin/register", creds.clone(), None)?).await?;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(body_json(resp).await?, json!({"message": "Admin created"}));

    let resp = send(&app, json_request("POST", "/api/admin/login", creds, None)?).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await?;
    let token = body["access_token"].as_str().expect("access_token");

    let resp = send(&app, get_request("/api/admin/contacts", Some(token))?).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn test_login_wrong_password() -> anyhow::Result<()> {
    let app = test_app().await?;
    let req = json_request("POST", "/api/admin/register", json!({"username": "root", "password": "StrongPass123"}), None)?;
    let _ = send(&app, req).await?;

    let req = json_request("POST", "/api/admin/login", json!({"username": "root", "password": "wrong"}), None)?;
    let resp = send(&app, req).await?;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(resp).await?, json!({"error": "Invalid credentials"}));
    Ok(())
}

#[tokio::test]
async fn test_login_unknown_admin() -> anyhow::Result<()> {
    let app = test_app().await?;
    let req = json_request("POST", "/api/admin/login", json!({"username": "ghost", "password": "x"}), None)?;
    let resp = send(&app, req).await?;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn test_duplicate_register_conflicts() -> anyhow::Result<()> {
    let app = test_app().await?;
    let creds = json!({"username": "root", "password": "pw"});
    let first = send(&app, json_request("POST", "/api/admin/register", creds.clone(), None)?).await?;
    assert_eq!(first.status(), StatusCode::CREATED);
    let second = send(&app, json_request("POST", "/api/admin/register", creds, None)?).await?;
    assert_eq!(second.status(), StatusCode::CONFLICT);
    Ok(())
}

#[tokio::test]
async fn test_register_missing_password_rejected() -> anyhow::Result<()> {
    let app = test_app().await?;
    let resp = send(&app, json_request("POST", "/api/admin/register", json!({"username": "root"}), None)?).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn test_protected_without_token_denied() -> anyhow::Result<()> {
    let app = test_app().await?;
    for uri in ["/api/admin/contacts", "/api/admin/inquiries"] {
        let resp = send(&app, get_request(uri, None)?).await?;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{uri}");
    }
    let resp = send(&app, json_request("PUT", "/api/admin/inquiry/1", json!({"status": "done"}), None)?).await?;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn test_protected_with_malformed_header_denied() -> anyhow::Result<()> {
    let app = test_app().await?;
    let req = axum::http::Request::builder()
        .uri("/api/admin/contacts")
        .header("authorization", "Token abc")
        .body(axum::body::Body::empty())?;
    let resp = send(&app, req).await?;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = send(&app, get_request("/api/admin/contacts", Some("not-a-jwt"))?).await?;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn test_protected_with_expired_token_unauthorized() -> anyhow::Result<()> {
    let app = test_app().await?;

    // Create an expired JWT token signed with test-secret
    use jsonwebtoken::{encode, EncodingKey, Header};
    #[derive(serde::Serialize)]
    struct Claims { sub: String, username: String, exp: usize, iat: usize }
    let now = std::time::SystemTime::now().duration_since(std::time::UNIX_EPOCH)?.as_secs() as usize;
    let claims = Claims { sub: "1".into(), username: "root".into(), exp: now.saturating_sub(3600), iat: now.saturating_sub(7200) };
    let token = encode(&Header::default(), &claims, &EncodingKey::from_secret(TEST_SECRET.as_bytes()))?;

    let resp = send(&app, get_request("/api/admin/inquiries", Some(&token))?).await?;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn test_token_signed_with_other_secret_unauthorized() -> anyhow::Result<()> {
    let app = test_app().await?;

    use jsonwebtoken::{encode, EncodingKey, Header};
    #[derive(serde::Serialize)]
    struct Claims { sub: String, username: String, exp: usize, iat: usize }
    let now = std::time::SystemTime::now().duration_since(std::time::UNIX_EPOCH)?.as_secs() as usize;
    let claims = Claims { sub: "1".into(), username: "root".into(), exp: now + 600, iat: now };
    let token = encode(&Header::default(), &claims, &EncodingKey::from_secret(b"someone-else"))?;

    let resp = send(&app, get_request("/api/admin/contacts", Some(&token))?).await?;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn test_token_survives_for_multiple_requests() -> anyhow::Result<()> {
    let app = test_app().await?;
    let token = admin_token(&app, "ops", "Passw0rd!").await?;
    for _ in 0..3 {
        let resp = send(&app, get_request("/api/admin/inquiries", Some(&token))?).await?;
        assert_eq!(resp.status(), StatusCode::OK);
    }
    Ok(())
}
