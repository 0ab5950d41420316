mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn health_endpoint_responds() -> Result<()> {
    let app = common::app();
    let (status, body) = common::send(&app, "GET", "/health", None, None).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn login_issues_a_token_that_opens_protected_routes() -> Result<()> {
    let app = common::app();

    // Without a token the admin listing is rejected
    let (status, body) = common::send(&app, "GET", "/api/projects", None, None).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], false);

    let token = common::login(&app).await?;
    let (status, body) = common::send(&app, "GET", "/api/projects", Some(&token), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_array());
    Ok(())
}

#[tokio::test]
async fn bad_credentials_are_rejected_without_detail() -> Result<()> {
    let app = common::app();

    for payload in [
        json!({ "username": "admin", "password": "wrong" }),
        json!({ "username": "nobody", "password": "admin123" }),
    ] {
        let (status, body) = common::send(&app, "POST", "/api/login", None, Some(payload)).await?;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        // Same message either way; the response never says which check failed
        assert_eq!(body["message"], "Invalid credentials");
    }
    Ok(())
}

#[tokio::test]
async fn logout_revokes_the_token_for_good() -> Result<()> {
    let app = common::app();
    let token = common::login(&app).await?;

    let (status, body) = common::send(&app, "POST", "/api/logout", Some(&token), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    // The revoked token can never pass the gate again
    let (status, _) = common::send(&app, "GET", "/api/projects", Some(&token), None).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Logout stays idempotent
    let (status, _) = common::send(&app, "POST", "/api/logout", Some(&token), None).await?;
    assert_eq!(status, StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn logout_without_a_token_still_succeeds() -> Result<()> {
    let app = common::app();
    let (status, body) = common::send(&app, "POST", "/api/logout", None, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    Ok(())
}

#[tokio::test]
async fn malformed_bearer_headers_are_rejected() -> Result<()> {
    let app = common::app();

    // An arbitrary string that was never issued
    let (status, _) =
        common::send(&app, "GET", "/api/projects", Some("not-a-real-token"), None).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn sessions_are_independent() -> Result<()> {
    let app = common::app();
    let first = common::login(&app).await?;
    let second = common::login(&app).await?;
    assert_ne!(first, second);

    // Revoking one session leaves the other alone
    common::send(&app, "POST", "/api/logout", Some(&first), None).await?;
    let (status, _) = common::send(&app, "GET", "/api/projects", Some(&second), None).await?;
    assert_eq!(status, StatusCode::OK);
    Ok(())
}
