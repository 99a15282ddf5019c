#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use bodymap_api::auth::jwt::JwtConfig;
use bodymap_api::config::ServerConfig;
use bodymap_api::router::build_app_router;
use bodymap_api::state::AppState;
use bodymap_core::extraction::KeywordExtractor;
use bodymap_imagegen::{GeneratedImage, ImageGenError, ImageGenerator};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

pub const TEST_PASSWORD: &str = "test_password_123!";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        min_password_length: 8,
        image_budget: Duration::from_millis(200),
        jwt: JwtConfig {
            secret: "integration-test-secret-with-enough-bytes".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
    }
}

/// Image generator that always returns the same URL.
pub struct StaticImageGenerator(pub &'static str);

#[async_trait]
impl ImageGenerator for StaticImageGenerator {
    async fn generate(&self, _prompt: &str) -> Result<GeneratedImage, ImageGenError> {
        Ok(GeneratedImage {
            url: self.0.to_string(),
        })
    }
}

/// Image generator whose upstream always fails.
pub struct FailingImageGenerator;

#[async_trait]
impl ImageGenerator for FailingImageGenerator {
    async fn generate(&self, _prompt: &str) -> Result<GeneratedImage, ImageGenError> {
        Err(ImageGenError::Api {
            status: 500,
            body: "upstream down".to_string(),
        })
    }
}

/// Image generator that answers only after `0` has elapsed.
pub struct SlowImageGenerator(pub Duration);

#[async_trait]
impl ImageGenerator for SlowImageGenerator {
    async fn generate(&self, _prompt: &str) -> Result<GeneratedImage, ImageGenError> {
        tokio::time::sleep(self.0).await;
        Ok(GeneratedImage {
            url: "https://img.test/too-late.png".to_string(),
        })
    }
}

/// Full application router without image generation.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_images(pool, None)
}

/// Full application router with the given image generator, built through
/// the same [`build_app_router`] the binary uses.
pub fn build_test_app_with_images(
    pool: PgPool,
    image_generator: Option<Arc<dyn ImageGenerator>>,
) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        extractor: Arc::new(KeywordExtractor),
        image_generator,
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::get(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    let request = Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response {
    let request = Request::post(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::post(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::delete(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Register a user through the API and return the auth response JSON.
pub async fn register(app: Router, username: &str) -> Value {
    let body = serde_json::json!({
        "username": username,
        "password": TEST_PASSWORD,
        "name": format!("{username} tester"),
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

/// Register a user and return just the access token.
pub async fn register_token(app: Router, username: &str) -> String {
    register(app, username).await["access_token"]
        .as_str()
        .unwrap()
        .to_string()
}
