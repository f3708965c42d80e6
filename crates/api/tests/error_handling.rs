//! Tests for `AppError` → HTTP response mapping.
//!
//! These tests verify that each `AppError` variant produces the correct HTTP
//! status code, error code, and message. Most do NOT need an HTTP server --
//! they call `IntoResponse` directly on `AppError` values. The database
//! classifier branches are driven by real sqlx errors from a test database.

use axum::response::IntoResponse;
use http_body_util::BodyExt;
use perftrack_api::error::AppError;
use perftrack_core::error::CoreError;
use perftrack_core::roles::ROLE_INTERN;
use perftrack_db::models::user::CreateUser;
use perftrack_db::repositories::UserRepo;
use sqlx::PgPool;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (axum::http::StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: unique-constraint violation (uq_*) maps to 409 with CONFLICT code
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_username_maps_to_409_conflict(pool: PgPool) {
    let input = CreateUser {
        username: "ina".to_string(),
        email: "ina@test.com".to_string(),
        full_name: "Ina Intern".to_string(),
        role: ROLE_INTERN.to_string(),
    };
    UserRepo::create(&pool, &input)
        .await
        .expect("first insert should succeed");

    // Same username, different email: violates uq_users_username.
    let duplicate = CreateUser {
        email: "ina2@test.com".to_string(),
        ..input
    };
    let err = UserRepo::create(&pool, &duplicate)
        .await
        .expect_err("second insert must violate the unique constraint");

    let (status, json) = error_to_response(AppError::Database(err)).await;

    assert_eq!(status, axum::http::StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
    assert_eq!(
        json["error"],
        "Duplicate value violates unique constraint: uq_users_username"
    );
}

// ---------------------------------------------------------------------------
// Test: duplicate email hits uq_users_email and maps to 409 as well
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_email_maps_to_409_conflict(pool: PgPool) {
    let input = CreateUser {
        username: "ina".to_string(),
        email: "shared@test.com".to_string(),
        full_name: "Ina Intern".to_string(),
        role: ROLE_INTERN.to_string(),
    };
    UserRepo::create(&pool, &input)
        .await
        .expect("first insert should succeed");

    let duplicate = CreateUser {
        username: "max".to_string(),
        ..input
    };
    let err = UserRepo::create(&pool, &duplicate)
        .await
        .expect_err("second insert must violate the unique constraint");

    let (status, json) = error_to_response(AppError::Database(err)).await;

    assert_eq!(status, axum::http::StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
}

// ---------------------------------------------------------------------------
// Test: a non-uq_* database constraint still maps to a sanitized 500
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn check_constraint_violation_maps_to_500(pool: PgPool) {
    // Bypass the handler-level range check; ck_performance_scores_range is
    // not a uq_* constraint, so the classifier must not return 409.
    let err = sqlx::query(
        "INSERT INTO performance_scores (user_id, task_id, week_number, score)
         VALUES (1, 1, 1, 99)",
    )
    .execute(&pool)
    .await
    .expect_err("insert must violate the score CHECK constraint");

    let (status, json) = error_to_response(AppError::Database(err)).await;

    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

// ---------------------------------------------------------------------------
// Test: sqlx RowNotFound maps to 404 with NOT_FOUND code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn row_not_found_returns_404() {
    let err = AppError::Database(sqlx::Error::RowNotFound);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Resource not found");
}

// ---------------------------------------------------------------------------
// Test: CoreError::Validation maps to 400 with VALIDATION_ERROR code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("Score must be between 0 and 10".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Score must be between 0 and 10");
}

// ---------------------------------------------------------------------------
// Test: CoreError::Unauthorized maps to 401 with UNAUTHORIZED code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unauthorized_error_returns_401() {
    let err = AppError::Core(CoreError::Unauthorized("Access token required".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "UNAUTHORIZED");
    assert_eq!(json["error"], "Access token required");
}

// ---------------------------------------------------------------------------
// Test: CoreError::Forbidden maps to 403 with FORBIDDEN code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn forbidden_error_returns_403() {
    let err = AppError::Core(CoreError::Forbidden("Access denied".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::FORBIDDEN);
    assert_eq!(json["code"], "FORBIDDEN");
    assert_eq!(json["error"], "Access denied");
}

// ---------------------------------------------------------------------------
// Test: AppError::InternalError maps to 500 and sanitizes the message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn internal_error_returns_500_and_sanitizes_message() {
    let err = AppError::InternalError("secret database credentials leaked".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");

    // The response body must NOT contain the original error details.
    let body_text = json.to_string();
    assert!(
        !body_text.contains("secret"),
        "Internal error response must not leak sensitive details"
    );
    assert_eq!(json["error"], "An internal error occurred");
}
