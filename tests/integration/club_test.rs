//! Integration tests for club CRUD.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_and_get_club() {
    let app = helpers::TestApp::new().await;
    let token = app.admin_token();

    let created = app
        .request(
            "POST",
            "/api/clubs/",
            Some(json!({
                "name": "Chess",
                "description": "Weekly games",
                "metadata": { "room": "B12" },
            })),
            Some(&token),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["success"], json!(true));
    assert_eq!(created.data()["metadata"]["room"], json!("B12"));

    let fetched = app
        .request("GET", &format!("/api/clubs/{}/", created.id()), None, Some(&token))
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.data()["name"], json!("Chess"));
    assert_eq!(fetched.data()["description"], json!("Weekly games"));
}

#[tokio::test]
async fn test_list_clubs_is_paginated() {
    let app = helpers::TestApp::new().await;
    for name in ["A", "B", "C"] {
        app.create_club(name).await;
    }

    let response = app
        .request(
            "GET",
            "/api/clubs/?page=1&per_page=2",
            None,
            Some(&app.superadmin_token()),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.items().len(), 2);
    assert_eq!(response.data()["total_items"], json!(3));
    assert_eq!(response.data()["has_next"], json!(true));
}

#[tokio::test]
async fn test_huge_page_number_returns_empty_page() {
    let app = helpers::TestApp::new().await;
    app.create_club("Chess").await;

    let response = app
        .request(
            "GET",
            "/api/clubs/?page=1000000000000000000",
            None,
            Some(&app.admin_token()),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.items().is_empty());
    assert_eq!(response.data()["total_items"], json!(1));
}

#[tokio::test]
async fn test_duplicate_club_name_rejected() {
    let app = helpers::TestApp::new().await;
    app.create_club("Robotics").await;

    let response = app
        .request(
            "POST",
            "/api/clubs/",
            Some(json!({ "name": "Robotics" })),
            Some(&app.admin_token()),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], json!("VALIDATION_ERROR"));
    assert!(response.body["details"]["name"].is_array());
}

#[tokio::test]
async fn test_blank_club_name_rejected() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/clubs/",
            Some(json!({ "name": "" })),
            Some(&app.admin_token()),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["details"]["name"].is_array());
}

#[tokio::test]
async fn test_patch_club_keeps_other_fields() {
    let app = helpers::TestApp::new().await;
    let token = app.admin_token();

    let created = app
        .request(
            "POST",
            "/api/clubs/",
            Some(json!({ "name": "Drama", "description": "Stage" })),
            Some(&token),
        )
        .await;
    let id = created.id();

    let patched = app
        .request(
            "PATCH",
            &format!("/api/clubs/{id}/"),
            Some(json!({ "name": "Theatre" })),
            Some(&token),
        )
        .await;
    assert_eq!(patched.status, StatusCode::OK);
    assert_eq!(patched.data()["name"], json!("Theatre"));
    assert_eq!(patched.data()["description"], json!("Stage"));

    let cleared = app
        .request(
            "PATCH",
            &format!("/api/clubs/{id}/"),
            Some(json!({ "description": null })),
            Some(&token),
        )
        .await;
    assert_eq!(cleared.status, StatusCode::OK);
    assert_eq!(cleared.data()["description"], json!(null));
}

#[tokio::test]
async fn test_patch_missing_club_with_taken_name_is_not_found() {
    let app = helpers::TestApp::new().await;
    app.create_club("Chess").await;

    let response = app
        .request(
            "PATCH",
            "/api/clubs/999/",
            Some(json!({ "name": "Chess" })),
            Some(&app.admin_token()),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.message(), "Club not found.");
}

#[tokio::test]
async fn test_put_club_requires_name() {
    let app = helpers::TestApp::new().await;
    let id = app.create_club("Film").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/clubs/{id}/"),
            Some(json!({ "description": "Movies" })),
            Some(&app.admin_token()),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_club_then_not_found() {
    let app = helpers::TestApp::new().await;
    let token = app.admin_token();
    let id = app.create_club("Astronomy").await;

    let deleted = app
        .request("DELETE", &format!("/api/clubs/{id}/"), None, Some(&token))
        .await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let fetched = app
        .request("GET", &format!("/api/clubs/{id}/"), None, Some(&token))
        .await;
    assert_eq!(fetched.status, StatusCode::NOT_FOUND);
    assert_eq!(fetched.message(), "Club not found.");
}

#[tokio::test]
async fn test_malformed_id_is_bad_request() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("GET", "/api/clubs/abc/", None, Some(&app.admin_token()))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_is_idempotent() {
    let app = helpers::TestApp::new().await;
    let token = app.admin_token();
    let id = app.create_club("Debate").await;
    let path = format!("/api/clubs/{id}/");

    let first = app.request("GET", &path, None, Some(&token)).await;
    let second = app.request("GET", &path, None, Some(&token)).await;

    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body, second.body);
}
