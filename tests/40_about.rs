mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn about_content_is_publicly_readable_but_admin_writable() -> Result<()> {
    let app = common::app();

    let (status, _) = common::send(
        &app,
        "POST",
        "/api/about",
        None,
        Some(json!({ "title": "Who we are" })),
    )
    .await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let token = common::login(&app).await?;
    let (status, body) = common::send(
        &app,
        "POST",
        "/api/about",
        Some(&token),
        Some(json!({
            "title": "Who we are",
            "description": "A data analytics consultancy",
            "paragraphs": ["We build dashboards.", "We automate workflows."]
        })),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    let id = body["about"]["id"].as_str().unwrap().to_string();

    // Anyone can read it
    let (status, sections) = common::send(&app, "GET", "/api/about", None, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(sections.as_array().unwrap().len(), 1);
    assert_eq!(sections[0]["id"], id.as_str());
    Ok(())
}

#[tokio::test]
async fn partial_update_preserves_unsupplied_content() -> Result<()> {
    let app = common::app();
    let token = common::login(&app).await?;

    let (_, created) = common::send(
        &app,
        "POST",
        "/api/about",
        Some(&token),
        Some(json!({
            "title": "Our story",
            "paragraphs": ["Founded in 2021."]
        })),
    )
    .await?;
    let id = created["about"]["id"].as_str().unwrap().to_string();

    let (status, updated) = common::send(
        &app,
        "PUT",
        &format!("/api/about/{}", id),
        Some(&token),
        Some(json!({ "title": "About Insight Data" })),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["about"]["title"], "About Insight Data");
    assert_eq!(updated["about"]["paragraphs"], json!(["Founded in 2021."]));
    Ok(())
}

#[tokio::test]
async fn updating_a_missing_section_is_not_found() -> Result<()> {
    let app = common::app();
    let token = common::login(&app).await?;

    let (status, _) = common::send(
        &app,
        "PUT",
        &format!("/api/about/{}", uuid::Uuid::new_v4()),
        Some(&token),
        Some(json!({ "title": "Ghost" })),
    )
    .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}
