//! Integration tests for `POST /api/v1/extract`.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json, post_json_auth};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn extract_returns_findings_without_persisting(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let token = common::register_token(app.clone(), "extractor").await;

    let body = json!({
        "reportText": "Patient has a severe fracture in the left femur with moderate swelling."
    });
    let response = post_json_auth(app, "/api/v1/extract", body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        json["data"],
        json!([
            {
                "bodyPart": "Left",
                "condition": "Fracture",
                "severity": "severe",
                "description": "fracture in the left"
            },
            {
                "bodyPart": "Left",
                "condition": "Swelling",
                "severity": "moderate",
                "description": "left femur with moderate swelling"
            }
        ])
    );

    let stored: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM diagnoses")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(stored, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn extract_without_vocabulary_returns_sentinel(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = common::register_token(app.clone(), "sentinel").await;

    let body = json!({ "report_text": "Routine visit, nothing notable." });
    let json = body_json(post_json_auth(app, "/api/v1/extract", body, &token).await).await;

    assert_eq!(
        json["data"],
        json!([{
            "bodyPart": "General",
            "condition": "Assessment",
            "severity": "mild",
            "description": "Report received for analysis"
        }])
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn extract_rejects_blank_report(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = common::register_token(app.clone(), "blank").await;

    let response =
        post_json_auth(app, "/api/v1/extract", json!({ "reportText": "   " }), &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn extract_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/extract", json!({ "reportText": "knee pain" })).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
