#![cfg(feature = "integration-tests")]

mod common;

use axum::http::StatusCode;
use common::{body_json, create_test_user, empty_request, json_request, setup_test_app, token_for};
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

#[sqlx::test(migrations = "./migrations")]
async fn test_task_lifecycle(pool: PgPool) {
    let user = create_test_user(&pool, "13800000001", "a@example.com", "pw").await;
    let app = setup_test_app(pool);
    let token = token_for(user.id);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/tasks",
            Some(&token),
            &json!({ "title": "Report", "due_date": "2024-06-01 18:00", "tag": "work" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let task = body_json(response).await;
    assert_eq!(task["due_date"], "2024-06-01T10:00:00Z");
    assert_eq!(task["status"], "pending");
    let task_id = task["id"].as_i64().unwrap();

    app.clone()
        .oneshot(json_request(
            "POST",
            "/api/tasks",
            Some(&token),
            &json!({ "title": "Groceries", "tag": "home" }),
        ))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/api/tasks?tag=work", Some(&token)))
        .await
        .unwrap();
    let listed = body_json(response).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["title"], "Report");

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/api/tasks?search=grocer", Some(&token)))
        .await
        .unwrap();
    assert_eq!(body_json(response).await[0]["title"], "Groceries");

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/tasks/{}", task_id),
            Some(&token),
            &json!({ "status": "done", "due_date": null }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["status"], "done");
    assert_eq!(updated["due_date"], "2024-06-01T10:00:00Z");

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", &format!("/api/tasks/{}", task_id), Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(empty_request("DELETE", &format!("/api/tasks/{}", task_id), Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_note_lifecycle(pool: PgPool) {
    let user = create_test_user(&pool, "13800000001", "a@example.com", "pw").await;
    let other = create_test_user(&pool, "13800000002", "b@example.com", "pw").await;
    let app = setup_test_app(pool);
    let token = token_for(user.id);

    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/notes", Some(&token), &json!({ "title": "Ideas" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let note = body_json(response).await;
    let note_id = note["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/notes/{}", note_id),
            Some(&token),
            &json!({ "content": "ship it" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["title"], "Ideas");
    assert_eq!(updated["content"], "ship it");
    assert_ne!(updated["updated_at"], note["updated_at"]);

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/api/notes", Some(&token)))
        .await
        .unwrap();
    assert_eq!(body_json(response).await, json!([{ "id": note_id, "title": "Ideas" }]));

    let response = app
        .clone()
        .oneshot(empty_request(
            "GET",
            &format!("/api/notes/{}", note_id),
            Some(&token_for(other.id)),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(empty_request("DELETE", &format!("/api/notes/{}", note_id), Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_comment_board(pool: PgPool) {
    let author = create_test_user(&pool, "13800000001", "a@example.com", "pw").await;
    let reader = create_test_user(&pool, "13800000002", "b@example.com", "pw").await;
    let app = setup_test_app(pool);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/comments",
            Some(&token_for(author.id)),
            &json!({ "content": "First!" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let comment_id = body_json(response).await["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/api/comments", Some(&token_for(reader.id))))
        .await
        .unwrap();
    let listed = body_json(response).await;
    assert_eq!(listed[0]["nickname"], "tester");
    assert_eq!(listed[0]["content"], "First!");

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/comments/{}", comment_id),
            Some(&token_for(reader.id)),
            &json!({ "content": "hijacked" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(empty_request(
            "DELETE",
            &format!("/api/comments/{}", comment_id),
            Some(&token_for(author.id)),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
