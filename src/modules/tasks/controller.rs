use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use tasknote_core::{AppError, ErrorResponse};
use tasknote_models::{CreateTaskDto, MessageResponse, Task, TaskFilterParams, UpdateTaskDto};
use tracing::instrument;

use super::service::TaskService;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validator::{JsonObject, ValidatedJson};

/// Create a task
#[utoipa::path(
    post,
    path = "/api/tasks",
    request_body = CreateTaskDto,
    responses(
        (status = 201, description = "Task created", body = Task),
        (status = 400, description = "Validation error or unparseable due date", body = ErrorResponse),
        (status = 403, description = "Missing, malformed, expired or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Tasks"
)]
#[instrument(skip(state))]
pub async fn create_task(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateTaskDto>,
) -> Result<(StatusCode, Json<Task>), AppError> {
    let task = TaskService::create_task(&state.db, &state.planner, user_id, dto).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// List the caller's tasks
#[utoipa::path(
    get,
    path = "/api/tasks",
    params(TaskFilterParams),
    responses(
        (status = 200, description = "Tasks owned by the caller", body = Vec<Task>),
        (status = 403, description = "Missing, malformed, expired or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Tasks"
)]
#[instrument(skip(state))]
pub async fn list_tasks(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(filters): Query<TaskFilterParams>,
) -> Result<Json<Vec<Task>>, AppError> {
    let tasks = TaskService::list_tasks(&state.db, user_id, filters).await?;
    Ok(Json(tasks))
}

/// Update any subset of a task's fields
#[utoipa::path(
    put,
    path = "/api/tasks/{task_id}",
    params(
        ("task_id" = i64, Path, description = "Task ID")
    ),
    request_body = UpdateTaskDto,
    responses(
        (status = 200, description = "Task updated", body = Task),
        (status = 400, description = "No updatable fields or invalid field format", body = ErrorResponse),
        (status = 403, description = "Missing, malformed, expired or invalid token", body = ErrorResponse),
        (status = 404, description = "Task not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Tasks"
)]
#[instrument(skip(state, body))]
pub async fn update_task(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(task_id): Path<i64>,
    JsonObject(body): JsonObject,
) -> Result<Json<Task>, AppError> {
    let task = TaskService::update_task(&state.db, &state.planner, user_id, task_id, &body).await?;
    Ok(Json(task))
}

/// Delete a task
#[utoipa::path(
    delete,
    path = "/api/tasks/{task_id}",
    params(
        ("task_id" = i64, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task deleted", body = MessageResponse),
        (status = 403, description = "Missing, malformed, expired or invalid token", body = ErrorResponse),
        (status = 404, description = "Task not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Tasks"
)]
#[instrument(skip(state))]
pub async fn delete_task(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(task_id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    TaskService::delete_task(&state.db, user_id, task_id).await?;
    Ok(Json(MessageResponse::new("Task deleted successfully")))
}
