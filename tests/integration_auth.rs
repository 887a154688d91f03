#![cfg(feature = "integration-tests")]

mod common;

use axum::http::StatusCode;
use chrono::Utc;
use common::{body_json, create_test_user, empty_request, json_request, setup_test_app};
use serde_json::json;
use sqlx::PgPool;
use tasknote_core::hash_password;
use tower::ServiceExt;

fn registration(phone: &str, email: &str) -> serde_json::Value {
    json!({
        "phone": phone,
        "nickname": "alice",
        "email": email,
        "password": "testpass123",
        "timestamp": Utc::now().timestamp(),
        "nonce": "n-1",
    })
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_success(pool: PgPool) {
    let app = setup_test_app(pool.clone());

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/auth/register",
            None,
            &registration("13800138000", "alice@example.com"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["phoneNumber"], "13800138000");
    assert!(body.get("password").is_none());

    let stored: String = sqlx::query_scalar("SELECT password FROM users WHERE phone_number = $1")
        .bind("13800138000")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(stored, hash_password("testpass123"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_duplicate_is_conflict(pool: PgPool) {
    create_test_user(&pool, "13800138000", "first@example.com", "pw").await;
    let app = setup_test_app(pool);

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/auth/register",
            None,
            &registration("13800138000", "second@example.com"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "already_exists");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_success(pool: PgPool) {
    let user = create_test_user(&pool, "13800138000", "alice@example.com", "testpass123").await;
    let app = setup_test_app(pool);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            None,
            &json!({ "phoneNumber": "13800138000", "password": "testpass123" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["token_type"], "Bearer");
    assert_eq!(body["expires_in"], 7200);
    assert_eq!(body["user"]["id"], user.id.into_inner());

    let token = body["access_token"].as_str().unwrap();
    let response = app
        .oneshot(empty_request("GET", "/api/users/me", Some(token)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["email"], "alice@example.com");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_invalid_credentials(pool: PgPool) {
    create_test_user(&pool, "13800138000", "alice@example.com", "testpass123").await;
    let app = setup_test_app(pool);

    for body in [
        json!({ "phoneNumber": "13800138000", "password": "wrongpass" }),
        json!({ "phoneNumber": "13900139000", "password": "testpass123" }),
    ] {
        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/auth/login", None, &body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await["code"], "invalid_credentials");
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_reset_password(pool: PgPool) {
    create_test_user(&pool, "13800138000", "alice@example.com", "old-pass").await;
    let app = setup_test_app(pool);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/reset-password",
            None,
            &json!({ "phone": "13800138000", "new_password": "new-pass" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            None,
            &json!({ "phoneNumber": "13800138000", "password": "new-pass" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/auth/reset-password",
            None,
            &json!({ "phone": "13900139000", "new_password": "x" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
