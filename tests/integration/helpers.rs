//! Shared test helpers for integration tests.
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use campus_api::{AppState, build_app};
use campus_auth::jwt::JwtEncoder;
use campus_core::config::AppConfig;
use campus_database::{MemoryStore, Stores};
use campus_entity::user::{User, UserRole};

/// Test application context backed by the in-memory store
pub struct TestApp {
    /// The Axum app for making test requests
    pub router: Router,
    /// The store behind the app, for seeding and direct inspection
    pub store: MemoryStore,
    /// Application config
    pub config: AppConfig,
    /// Seeded admin
    pub admin: User,
    /// Seeded superadmin
    pub superadmin: User,
    /// Seeded student with ID 42
    pub student: User,
    /// A second seeded student
    pub other_student: User,
    /// Signs tokens with the router's secret
    pub encoder: JwtEncoder,
}

impl TestApp {
    /// Create a new test application with seeded users
    pub async fn new() -> Self {
        let mut config = AppConfig::default();
        config.database.provider = "memory".to_string();
        config.auth.jwt_secret = "integration-test-secret".to_string();

        let store = MemoryStore::new();
        let admin = store.insert_user("admin", UserRole::Admin, true).await;
        let superadmin = store.insert_user("root", UserRole::SuperAdmin, true).await;
        let other_student = store.insert_user("bo", UserRole::Student, true).await;
        let student = store.insert_user_with_id(42, "ana", UserRole::Student).await;

        let state = AppState::new(config.clone(), Stores::from_memory(store.clone()));
        let router = build_app(state);
        let encoder = JwtEncoder::new(&config.auth);

        Self {
            router,
            store,
            config,
            admin,
            superadmin,
            student,
            other_student,
            encoder,
        }
    }

    /// Sign an access token for a user
    pub fn token_for(&self, user: &User) -> String {
        self.encoder
            .generate_access_token(user.id, user.role, &user.username)
            .expect("Failed to sign token")
            .0
    }

    /// Token for the seeded admin
    pub fn admin_token(&self) -> String {
        self.token_for(&self.admin)
    }

    /// Token for the seeded superadmin
    pub fn superadmin_token(&self) -> String {
        self.token_for(&self.superadmin)
    }

    /// Token for student 42
    pub fn student_token(&self) -> String {
        self.token_for(&self.student)
    }

    /// Create a club as the admin and return its ID
    pub async fn create_club(&self, name: &str) -> i64 {
        let token = self.admin_token();
        let response = self
            .request(
                "POST",
                "/api/clubs/",
                Some(serde_json::json!({ "name": name })),
                Some(&token),
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Club creation failed: {:?}",
            response.body
        );
        response.id()
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The `data` member of a success envelope
    pub fn data(&self) -> &Value {
        &self.body["data"]
    }

    /// `data.id` of a created or fetched record
    pub fn id(&self) -> i64 {
        self.data()["id"].as_i64().expect("No id in response data")
    }

    /// `data.items` of a page
    pub fn items(&self) -> Vec<Value> {
        self.data()["items"]
            .as_array()
            .cloned()
            .expect("No items in response data")
    }

    /// `message` of an error body
    pub fn message(&self) -> &str {
        self.body["message"].as_str().unwrap_or_default()
    }
}
