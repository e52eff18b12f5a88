//! HTTP-level integration tests for the auth endpoints.
//!
//! Tests cover signup, duplicate-email rejection, login, credential
//! failures, and bearer-token resolution via /api/auth/me.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json, signup_user};
use sqlx::PgPool;

/// Successful signup returns 201 with the flat auth payload.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_signup_success(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "username": "maria",
        "email": "maria@test.com",
        "password": "a-sufficient-password",
    });
    let response = post_json(app, "/api/auth/signup", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["_id"].is_number(), "response must contain _id");
    assert_eq!(json["username"], "maria");
    assert_eq!(json["email"], "maria@test.com");
    assert!(json["token"].is_string(), "response must contain token");
}

/// Signup with an already-registered email returns 409 and creates no row.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_signup_duplicate_email(pool: PgPool) {
    let (_id, _token) = signup_user(&pool, "original").await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "username": "impostor",
        "email": "original@test.com",
        "password": "another-password",
    });
    let response = post_json(app, "/api/auth/signup", body).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1, "conflicting signup must not create a user");
}

/// Signup with a too-short password returns 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_signup_weak_password(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "username": "weak",
        "email": "weak@test.com",
        "password": "short",
    });
    let response = post_json(app, "/api/auth/signup", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Login with correct credentials returns 200 and the same payload shape
/// as signup.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_success(pool: PgPool) {
    let (id, _token) = signup_user(&pool, "returning").await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "email": "returning@test.com",
        "password": "test_password_123!",
    });
    let response = post_json(app, "/api/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["_id"], id);
    assert_eq!(json["username"], "returning");
    assert!(json["token"].is_string(), "login must issue a token");
}

/// Login with an incorrect password returns 401 and no token.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    let (_id, _token) = signup_user(&pool, "wrongpw").await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "email": "wrongpw@test.com",
        "password": "incorrect_password",
    });
    let response = post_json(app, "/api/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json.get("token").is_none(), "failed login must not issue a token");
}

/// Login with a nonexistent email returns the same 401 as a bad password.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_unknown_email(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "email": "ghost@test.com",
        "password": "whatever-at-all",
    });
    let response = post_json(app, "/api/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// /api/auth/me resolves the token's subject to public user fields.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_me_returns_public_fields(pool: PgPool) {
    let (id, token) = signup_user(&pool, "whoami").await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/auth/me", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["_id"], id);
    assert_eq!(json["username"], "whoami");
    assert_eq!(json["email"], "whoami@test.com");
    assert!(
        json.get("passwordHash").is_none() && json.get("password_hash").is_none(),
        "me must never expose the password hash"
    );
}

/// /api/auth/me without a token returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_me_requires_token(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/auth/me").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// A garbage bearer token is rejected with 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_me_rejects_invalid_token(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/auth/me", "not-a-real-token").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
