//! Integration tests for capability-based access control.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_student_cannot_create_club() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/clubs/",
            Some(json!({ "name": "Robotics" })),
            Some(&app.student_token()),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(
        response.message(),
        "You do not have permission to perform this action."
    );
}

#[tokio::test]
async fn test_admin_and_superadmin_can_list_clubs() {
    let app = helpers::TestApp::new().await;

    for token in [app.admin_token(), app.superadmin_token()] {
        let response = app.request("GET", "/api/clubs/", None, Some(&token)).await;
        assert_eq!(response.status, StatusCode::OK);
    }
}

#[tokio::test]
async fn test_student_forbidden_on_staff_endpoints() {
    let app = helpers::TestApp::new().await;
    let club_id = app.create_club("Robotics").await;
    let token = app.student_token();

    let paths = [
        ("GET", "/api/clubs/".to_string()),
        ("GET", format!("/api/clubs/{club_id}/")),
        ("GET", format!("/api/clubs/{club_id}/members/")),
        ("GET", "/api/clubs/events/".to_string()),
        ("GET", "/api/announcements/1/".to_string()),
        ("DELETE", format!("/api/clubs/{club_id}/")),
    ];

    for (method, path) in paths {
        let response = app.request(method, &path, None, Some(&token)).await;
        assert_eq!(
            response.status,
            StatusCode::FORBIDDEN,
            "{method} {path} should be forbidden for students"
        );
    }
}

#[tokio::test]
async fn test_student_cannot_register_themselves() {
    let app = helpers::TestApp::new().await;
    let club_id = app.create_club("Robotics").await;

    let response = app
        .request(
            "POST",
            &format!("/api/clubs/{club_id}/members/"),
            Some(json!({ "student_id": 42 })),
            Some(&app.student_token()),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_student_cannot_post_announcement() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/announcements/create/",
            Some(json!({ "title": "Hi", "content": "From a student" })),
            Some(&app.student_token()),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_missing_token_is_401_not_403() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("POST", "/api/clubs/", Some(json!({ "name": "X" })), None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_permission_checked_before_body_validation() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/clubs/",
            Some(json!({ "name": "" })),
            Some(&app.student_token()),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_expired_token_is_401() {
    let app = helpers::TestApp::new().await;
    let encoder = campus_auth::jwt::JwtEncoder::new(&app.config.auth);
    let now = chrono::Utc::now().timestamp();
    let claims = campus_auth::jwt::Claims {
        sub: app.admin.id,
        role: app.admin.role,
        username: app.admin.username.clone(),
        iat: now - 7200,
        exp: now - 3600,
        jti: Default::default(),
    };
    let token = encoder.encode_claims(&claims).expect("Failed to sign claims");

    let response = app.request("GET", "/api/clubs/", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health_is_public() {
    let app = helpers::TestApp::new().await;

    let basic = app.request("GET", "/api/health", None, None).await;
    assert_eq!(basic.status, StatusCode::OK);
    assert_eq!(basic.data()["status"], json!("ok"));

    let detailed = app.request("GET", "/api/health/detailed", None, None).await;
    assert_eq!(detailed.status, StatusCode::OK);
    assert_eq!(detailed.data()["database_provider"], json!("memory"));
    assert_eq!(detailed.data()["database"], json!("connected"));
}
