//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tower::ServiceExt;

use snippet_chat_api::config::{
    CorsSettings, DatabaseSettings, JwtSettings, PaginationSettings, ServerSettings, Settings,
};
use snippet_chat_api::infrastructure::database::create_in_memory_pool;
use snippet_chat_api::startup::{build_router, AppState};

pub const TEST_HOST: &str = "testserver";
pub const TEST_PASSWORD: &str = "correct-horse-battery";

pub fn test_settings() -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".into(),
            port: 0,
        },
        database: DatabaseSettings {
            url: "sqlite::memory:".into(),
            max_connections: 1,
            min_connections: 1,
            acquire_timeout: 5,
            run_migrations: true,
        },
        jwt: JwtSettings {
            secret: "integration-test-secret-with-enough-bytes".into(),
            access_token_expiry_minutes: 15,
        },
        pagination: PaginationSettings { page_size: 10 },
        cors: CorsSettings {
            allowed_origins: vec![],
        },
        environment: "test".into(),
    }
}

/// Application wired to a private in-memory database
pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
}

/// Status, content type and body of a response
pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap_or_else(|e| {
            panic!(
                "response body is not JSON ({}): {}",
                e,
                String::from_utf8_lossy(&self.body)
            )
        })
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// A registered user and their bearer token
pub struct TestUser {
    pub id: i64,
    pub username: String,
    pub token: String,
}

impl TestApp {
    pub async fn new() -> Self {
        let pool = create_in_memory_pool()
            .await
            .expect("in-memory database should open");
        let router = build_router(AppState::new(pool.clone(), test_settings()));

        Self { router, pool }
    }

    /// Send a request; `body` is sent as JSON and `token` as a bearer token.
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::HOST, TEST_HOST);

        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec();

        TestResponse {
            status,
            content_type,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.request(Method::GET, uri, None, None).await
    }

    pub async fn get_auth(&self, uri: &str, token: &str) -> TestResponse {
        self.request(Method::GET, uri, None, Some(token)).await
    }

    pub async fn post(&self, uri: &str, body: Value, token: Option<&str>) -> TestResponse {
        self.request(Method::POST, uri, Some(body), token).await
    }

    pub async fn put(&self, uri: &str, body: Value, token: Option<&str>) -> TestResponse {
        self.request(Method::PUT, uri, Some(body), token).await
    }

    pub async fn patch(&self, uri: &str, body: Value, token: Option<&str>) -> TestResponse {
        self.request(Method::PATCH, uri, Some(body), token).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.request(Method::DELETE, uri, None, token).await
    }

    /// Register a user through the API and return its id and token.
    pub async fn register(&self, username: &str) -> TestUser {
        let response = self
            .post(
                "/auth/register/",
                json!({ "username": username, "password": TEST_PASSWORD }),
                None,
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "registration failed: {}",
            response.text()
        );

        let body = response.json();
        TestUser {
            id: body["user"]["id"].as_i64().unwrap(),
            username: username.to_string(),
            token: body["access_token"].as_str().unwrap().to_string(),
        }
    }

    /// Create a chat as `creator` and return its id.
    pub async fn create_chat(&self, creator: &TestUser, title: &str, users: &[i64]) -> i64 {
        let response = self
            .post(
                "/chats/",
                json!({ "title": title, "users": users }),
                Some(&creator.token),
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "chat creation failed: {}",
            response.text()
        );
        response.json()["id"].as_i64().unwrap()
    }

    /// Create a snippet as `owner` and return the response body.
    pub async fn create_snippet(&self, owner: &TestUser, body: Value) -> Value {
        let response = self.post("/snippets/", body, Some(&owner.token)).await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "snippet creation failed: {}",
            response.text()
        );
        response.json()
    }
}
