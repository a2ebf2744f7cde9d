//! Integration tests for announcements.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

async fn post_announcement(app: &helpers::TestApp, title: &str, active: bool) -> i64 {
    let response = app
        .request(
            "POST",
            "/api/announcements/create/",
            Some(json!({
                "title": title,
                "content": format!("{title} details"),
                "is_active": active,
            })),
            Some(&app.admin_token()),
        )
        .await;
    assert_eq!(
        response.status,
        StatusCode::CREATED,
        "Announcement creation failed: {:?}",
        response.body
    );
    response.id()
}

#[tokio::test]
async fn test_list_returns_only_active() {
    let app = helpers::TestApp::new().await;
    post_announcement(&app, "Library hours", true).await;
    post_announcement(&app, "Old notice", false).await;
    post_announcement(&app, "Club fair", true).await;

    let response = app
        .request("GET", "/api/announcements/", None, Some(&app.student_token()))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let items = response.items();
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|a| a["is_active"] == json!(true)));
    assert_eq!(response.data()["total_items"], json!(2));
}

#[tokio::test]
async fn test_unauthenticated_list_is_401() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/announcements/", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.message(),
        "Authentication credentials were not provided."
    );
}

#[tokio::test]
async fn test_invalid_token_is_401() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("GET", "/api/announcements/", None, Some("not-a-jwt"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_defaults_to_active_and_records_author() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/announcements/create/",
            Some(json!({ "title": "Welcome", "content": "Semester starts Monday" })),
            Some(&app.superadmin_token()),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.data()["is_active"], json!(true));
    assert_eq!(response.data()["created_by"], json!(app.superadmin.id));
}

#[tokio::test]
async fn test_blank_content_rejected() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/announcements/create/",
            Some(json!({ "title": "Empty", "content": "" })),
            Some(&app.admin_token()),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["details"]["content"].is_array());
}

#[tokio::test]
async fn test_deactivated_announcement_leaves_list() {
    let app = helpers::TestApp::new().await;
    let id = post_announcement(&app, "Exam schedule", true).await;

    let patched = app
        .request(
            "PATCH",
            &format!("/api/announcements/{id}/"),
            Some(json!({ "is_active": false })),
            Some(&app.admin_token()),
        )
        .await;
    assert_eq!(patched.status, StatusCode::OK);
    assert_eq!(patched.data()["title"], json!("Exam schedule"));

    let listed = app
        .request("GET", "/api/announcements/", None, Some(&app.student_token()))
        .await;
    assert!(listed.items().is_empty());

    // Still reachable by ID for staff.
    let fetched = app
        .request(
            "GET",
            &format!("/api/announcements/{id}/"),
            None,
            Some(&app.admin_token()),
        )
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.data()["is_active"], json!(false));
}

#[tokio::test]
async fn test_replace_and_delete_announcement() {
    let app = helpers::TestApp::new().await;
    let id = post_announcement(&app, "Draft", true).await;
    let path = format!("/api/announcements/{id}/");

    let replaced = app
        .request(
            "PUT",
            &path,
            Some(json!({ "title": "Final", "content": "Updated text" })),
            Some(&app.admin_token()),
        )
        .await;
    assert_eq!(replaced.status, StatusCode::OK);
    assert_eq!(replaced.data()["title"], json!("Final"));
    assert_eq!(replaced.data()["content"], json!("Updated text"));

    let deleted = app
        .request("DELETE", &path, None, Some(&app.admin_token()))
        .await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let fetched = app.request("GET", &path, None, Some(&app.admin_token())).await;
    assert_eq!(fetched.status, StatusCode::NOT_FOUND);
    assert_eq!(fetched.message(), "Announcement not found.");
}

#[tokio::test]
async fn test_token_for_unknown_account_cannot_author() {
    let app = helpers::TestApp::new().await;
    let (token, _) = app
        .encoder
        .generate_access_token(999, campus_entity::user::UserRole::Admin, "ghost")
        .expect("Failed to sign token");

    let response = app
        .request(
            "POST",
            "/api/announcements/create/",
            Some(json!({ "title": "Hello", "content": "From nowhere" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "User 999 is not a known account.");
}
