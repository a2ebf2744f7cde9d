//! Integration tests for club membership registration.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_robotics_duplicate_member_scenario() {
    let app = helpers::TestApp::new().await;
    let token = app.admin_token();

    let club = app
        .request(
            "POST",
            "/api/clubs/",
            Some(json!({ "name": "Robotics" })),
            Some(&token),
        )
        .await;
    assert_eq!(club.status, StatusCode::CREATED);
    let club_id = club.id();
    let members_path = format!("/api/clubs/{club_id}/members/");

    let added = app
        .request(
            "POST",
            &members_path,
            Some(json!({ "student_id": 42, "role": "leader" })),
            Some(&token),
        )
        .await;
    assert_eq!(added.status, StatusCode::CREATED);
    assert_eq!(added.data()["club_id"], json!(club_id));
    assert_eq!(added.data()["student_id"], json!(42));
    assert_eq!(added.data()["role"], json!("leader"));

    let again = app
        .request(
            "POST",
            &members_path,
            Some(json!({ "student_id": 42 })),
            Some(&token),
        )
        .await;
    assert_eq!(again.status, StatusCode::BAD_REQUEST);
    assert_eq!(again.message(), "Student is already a member of this club.");

    let members = app.request("GET", &members_path, None, Some(&token)).await;
    assert_eq!(members.status, StatusCode::OK);
    let items = members.items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["student_id"], json!(42));
}

#[tokio::test]
async fn test_member_role_defaults_to_member() {
    let app = helpers::TestApp::new().await;
    let club_id = app.create_club("Chess").await;

    let added = app
        .request(
            "POST",
            &format!("/api/clubs/{club_id}/members/"),
            Some(json!({ "student_id": app.other_student.id })),
            Some(&app.admin_token()),
        )
        .await;

    assert_eq!(added.status, StatusCode::CREATED);
    assert_eq!(added.data()["role"], json!("member"));
}

#[tokio::test]
async fn test_same_student_can_join_two_clubs() {
    let app = helpers::TestApp::new().await;
    let token = app.admin_token();
    let first = app.create_club("Chess").await;
    let second = app.create_club("Go").await;

    for club_id in [first, second] {
        let added = app
            .request(
                "POST",
                &format!("/api/clubs/{club_id}/members/"),
                Some(json!({ "student_id": 42 })),
                Some(&token),
            )
            .await;
        assert_eq!(added.status, StatusCode::CREATED);
    }
}

#[tokio::test]
async fn test_add_member_to_missing_club() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/clubs/999/members/",
            Some(json!({ "student_id": 42 })),
            Some(&app.admin_token()),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.message(), "Club not found.");
}

#[tokio::test]
async fn test_add_unknown_student() {
    let app = helpers::TestApp::new().await;
    let club_id = app.create_club("Chess").await;

    let response = app
        .request(
            "POST",
            &format!("/api/clubs/{club_id}/members/"),
            Some(json!({ "student_id": 7777 })),
            Some(&app.admin_token()),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["details"]["student_id"],
        json!(["Student 7777 does not exist."])
    );
}

#[tokio::test]
async fn test_add_staff_account_as_member_rejected() {
    let app = helpers::TestApp::new().await;
    let club_id = app.create_club("Chess").await;
    let admin_id = app.admin.id;

    let response = app
        .request(
            "POST",
            &format!("/api/clubs/{club_id}/members/"),
            Some(json!({ "student_id": admin_id })),
            Some(&app.admin_token()),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.message(),
        format!("User {admin_id} is not an active student.")
    );
}

#[tokio::test]
async fn test_update_and_remove_membership() {
    let app = helpers::TestApp::new().await;
    let token = app.superadmin_token();
    let club_id = app.create_club("Chess").await;

    let added = app
        .request(
            "POST",
            &format!("/api/clubs/{club_id}/members/"),
            Some(json!({ "student_id": 42 })),
            Some(&token),
        )
        .await;
    let membership_path = format!("/api/clubs/members/{}/", added.id());

    let patched = app
        .request(
            "PATCH",
            &membership_path,
            Some(json!({ "role": "executive" })),
            Some(&token),
        )
        .await;
    assert_eq!(patched.status, StatusCode::OK);
    assert_eq!(patched.data()["role"], json!("executive"));

    let replaced = app
        .request(
            "PUT",
            &membership_path,
            Some(json!({ "role": "leader" })),
            Some(&token),
        )
        .await;
    assert_eq!(replaced.status, StatusCode::OK);
    assert_eq!(replaced.data()["role"], json!("leader"));

    let deleted = app
        .request("DELETE", &membership_path, None, Some(&token))
        .await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let fetched = app.request("GET", &membership_path, None, Some(&token)).await;
    assert_eq!(fetched.status, StatusCode::NOT_FOUND);
    assert_eq!(fetched.message(), "Membership not found.");

    // The student can be registered again once removed.
    let readded = app
        .request(
            "POST",
            &format!("/api/clubs/{club_id}/members/"),
            Some(json!({ "student_id": 42 })),
            Some(&token),
        )
        .await;
    assert_eq!(readded.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_deleting_club_removes_memberships() {
    let app = helpers::TestApp::new().await;
    let token = app.admin_token();
    let club_id = app.create_club("Chess").await;

    let added = app
        .request(
            "POST",
            &format!("/api/clubs/{club_id}/members/"),
            Some(json!({ "student_id": 42 })),
            Some(&token),
        )
        .await;
    let membership_id = added.id();

    app.request("DELETE", &format!("/api/clubs/{club_id}/"), None, Some(&token))
        .await;

    let fetched = app
        .request(
            "GET",
            &format!("/api/clubs/members/{membership_id}/"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(fetched.status, StatusCode::NOT_FOUND);
}
