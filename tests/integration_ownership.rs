#![cfg(feature = "integration-tests")]

mod common;

use axum::http::StatusCode;
use common::{body_json, create_test_user, empty_request, json_request, setup_test_app, token_for};
use serde_json::json;
use sqlx::PgPool;
use tasknote_core::UserId;
use tower::ServiceExt;

async fn insert_task(pool: &PgPool, owner: UserId, title: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO tasks (user_id, title) VALUES ($1, $2) RETURNING id")
        .bind(owner)
        .bind(title)
        .fetch_one(pool)
        .await
        .unwrap()
}

async fn task_title(pool: &PgPool, task_id: i64) -> String {
    sqlx::query_scalar("SELECT title FROM tasks WHERE id = $1")
        .bind(task_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_own_task_changes_only_given_field(pool: PgPool) {
    let owner = create_test_user(&pool, "13800000001", "a@example.com", "pw").await;
    let task_id = insert_task(&pool, owner.id, "Old").await;
    let app = setup_test_app(pool.clone());

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/api/tasks/{}", task_id),
            Some(&token_for(owner.id)),
            &json!({ "title": "New", "user_id": 999 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["title"], "New");
    assert_eq!(body["status"], "pending");
    assert_eq!(body["user_id"], owner.id.into_inner());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_foreign_task_is_not_found_and_unchanged(pool: PgPool) {
    let owner = create_test_user(&pool, "13800000001", "a@example.com", "pw").await;
    let intruder = create_test_user(&pool, "13800000002", "b@example.com", "pw").await;
    let task_id = insert_task(&pool, owner.id, "Mine").await;
    let app = setup_test_app(pool.clone());
    let token = token_for(intruder.id);

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/tasks/{}", task_id),
            Some(&token),
            &json!({ "title": "X" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "not_found");

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", &format!("/api/tasks/{}", task_id), Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let missing = app
        .oneshot(json_request("PUT", "/api/tasks/424242", Some(&token), &json!({ "title": "X" })))
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    assert_eq!(task_title(&pool, task_id).await, "Mine");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_profile_nickname_update(pool: PgPool) {
    let user = create_test_user(&pool, "13800000001", "a@example.com", "pw").await;
    let app = setup_test_app(pool.clone());

    let response = app
        .oneshot(json_request(
            "PUT",
            "/api/users/me",
            Some(&token_for(user.id)),
            &json!({ "nickname": "Alice" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["nickname"], "Alice");
    assert_eq!(body["email"], "a@example.com");
    assert_eq!(body["phoneNumber"], "13800000001");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_profile_update_to_taken_email_is_conflict(pool: PgPool) {
    let user = create_test_user(&pool, "13800000001", "a@example.com", "pw").await;
    create_test_user(&pool, "13800000002", "b@example.com", "pw").await;
    let app = setup_test_app(pool);

    let response = app
        .oneshot(json_request(
            "PUT",
            "/api/users/me",
            Some(&token_for(user.id)),
            &json!({ "email": "b@example.com" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_deleted_account_cascades(pool: PgPool) {
    let user = create_test_user(&pool, "13800000001", "a@example.com", "pw").await;
    insert_task(&pool, user.id, "t").await;
    let app = setup_test_app(pool.clone());
    let token = token_for(user.id);

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", "/api/users/me", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tasks")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(remaining, 0);

    // The token still verifies, but its account is gone.
    let response = app
        .oneshot(empty_request("GET", "/api/users/me", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
