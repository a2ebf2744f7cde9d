//! Integration tests for club events.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

async fn create_event(app: &helpers::TestApp, club_id: i64, title: &str, date: &str) -> i64 {
    let response = app
        .request(
            "POST",
            "/api/clubs/events/",
            Some(json!({
                "club_id": club_id,
                "title": title,
                "location": "Hall A",
                "event_date": date,
            })),
            Some(&app.admin_token()),
        )
        .await;
    assert_eq!(
        response.status,
        StatusCode::CREATED,
        "Event creation failed: {:?}",
        response.body
    );
    response.id()
}

#[tokio::test]
async fn test_create_event_records_creator() {
    let app = helpers::TestApp::new().await;
    let club_id = app.create_club("Robotics").await;
    let event_id = create_event(&app, club_id, "Build night", "2026-11-01T18:00:00Z").await;

    let fetched = app
        .request(
            "GET",
            &format!("/api/clubs/events/{event_id}/"),
            None,
            Some(&app.admin_token()),
        )
        .await;

    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.data()["created_by"], json!(app.admin.id));
    assert_eq!(fetched.data()["status"], json!("pending"));
    assert_eq!(fetched.data()["location"], json!("Hall A"));
}

#[tokio::test]
async fn test_event_for_unknown_club_rejected() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/clubs/events/",
            Some(json!({
                "club_id": 404,
                "title": "Ghost meetup",
                "event_date": "2026-11-01T18:00:00Z",
            })),
            Some(&app.admin_token()),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["details"]["club_id"],
        json!(["Club 404 does not exist."])
    );
}

#[tokio::test]
async fn test_list_events_newest_first_and_filtered() {
    let app = helpers::TestApp::new().await;
    let robotics = app.create_club("Robotics").await;
    let chess = app.create_club("Chess").await;

    create_event(&app, robotics, "Kickoff", "2026-09-01T18:00:00Z").await;
    create_event(&app, robotics, "Finals", "2026-12-01T18:00:00Z").await;
    create_event(&app, chess, "Blitz", "2026-10-01T18:00:00Z").await;

    let all = app
        .request("GET", "/api/clubs/events/", None, Some(&app.admin_token()))
        .await;
    assert_eq!(all.status, StatusCode::OK);
    let titles: Vec<_> = all
        .items()
        .iter()
        .map(|e| e["title"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(titles, vec!["Finals", "Blitz", "Kickoff"]);

    let filtered = app
        .request(
            "GET",
            &format!("/api/clubs/events/?club_id={chess}"),
            None,
            Some(&app.admin_token()),
        )
        .await;
    let items = filtered.items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], json!("Blitz"));
}

#[tokio::test]
async fn test_patch_event_status_and_clear_location() {
    let app = helpers::TestApp::new().await;
    let club_id = app.create_club("Robotics").await;
    let event_id = create_event(&app, club_id, "Build night", "2026-11-01T18:00:00Z").await;

    let patched = app
        .request(
            "PATCH",
            &format!("/api/clubs/events/{event_id}/"),
            Some(json!({ "status": "approved", "location": null })),
            Some(&app.superadmin_token()),
        )
        .await;

    assert_eq!(patched.status, StatusCode::OK);
    assert_eq!(patched.data()["status"], json!("approved"));
    assert_eq!(patched.data()["location"], json!(null));
    assert_eq!(patched.data()["title"], json!("Build night"));
}

#[tokio::test]
async fn test_move_event_to_unknown_club_rejected() {
    let app = helpers::TestApp::new().await;
    let club_id = app.create_club("Robotics").await;
    let event_id = create_event(&app, club_id, "Build night", "2026-11-01T18:00:00Z").await;

    let response = app
        .request(
            "PATCH",
            &format!("/api/clubs/events/{event_id}/"),
            Some(json!({ "club_id": 404 })),
            Some(&app.admin_token()),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_invalid_event_date_rejected() {
    let app = helpers::TestApp::new().await;
    let club_id = app.create_club("Robotics").await;

    let response = app
        .request(
            "POST",
            "/api/clubs/events/",
            Some(json!({
                "club_id": club_id,
                "title": "Someday",
                "event_date": "next tuesday",
            })),
            Some(&app.admin_token()),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_event() {
    let app = helpers::TestApp::new().await;
    let club_id = app.create_club("Robotics").await;
    let event_id = create_event(&app, club_id, "Build night", "2026-11-01T18:00:00Z").await;
    let path = format!("/api/clubs/events/{event_id}/");

    let deleted = app
        .request("DELETE", &path, None, Some(&app.admin_token()))
        .await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let fetched = app.request("GET", &path, None, Some(&app.admin_token())).await;
    assert_eq!(fetched.status, StatusCode::NOT_FOUND);
    assert_eq!(fetched.message(), "Event not found.");
}
