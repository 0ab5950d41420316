mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn submitted_leads_show_up_in_the_admin_export() -> Result<()> {
    let app = common::app();

    let (status, body) = common::send(
        &app,
        "POST",
        "/api/contact",
        None,
        Some(json!({
            "name": "Ana Souza",
            "email": "ana@empresa.com",
            "company": "Empresa SA",
            "service": "dashboards",
            "message": "We need a revenue dashboard."
        })),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["contact"]["service"], "dashboards");
    assert!(body["contact"]["createdAt"].is_string());

    // The export is admin-only
    let (status, _) = common::send(&app, "GET", "/api/contacts", None, None).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let token = common::login(&app).await?;
    let (status, contacts) = common::send(&app, "GET", "/api/contacts", Some(&token), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(contacts.as_array().unwrap().len(), 1);
    assert_eq!(contacts[0]["name"], "Ana Souza");
    Ok(())
}

#[tokio::test]
async fn invalid_submissions_name_the_violated_fields() -> Result<()> {
    let app = common::app();

    let (status, body) = common::send(
        &app,
        "POST",
        "/api/contact",
        None,
        Some(json!({
            "email": "not-an-email",
            "service": "catering"
        })),
    )
    .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["errors"]["name"].is_string());
    assert!(body["errors"]["email"].is_string());
    assert!(body["errors"]["service"].is_string());
    assert!(body["errors"]["message"].is_string());
    Ok(())
}

#[tokio::test]
async fn company_is_optional() -> Result<()> {
    let app = common::app();

    let (status, body) = common::send(
        &app,
        "POST",
        "/api/contact",
        None,
        Some(json!({
            "name": "Bruno Lima",
            "email": "bruno@startup.io",
            "service": "ai-agents",
            "message": "Interested in a support triage agent."
        })),
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    assert!(body["contact"]["company"].is_null());
    Ok(())
}
