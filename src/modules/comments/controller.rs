use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tasknote_core::{AppError, ErrorResponse};
use tasknote_models::{
    Comment, CommentWithAuthor, CreateCommentDto, MessageResponse, UpdateCommentDto,
};
use tracing::instrument;

use super::service::CommentService;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validator::{JsonObject, ValidatedJson};

/// Post a comment
#[utoipa::path(
    post,
    path = "/api/comments",
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment created", body = Comment),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 403, description = "Missing, malformed, expired or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Comments"
)]
#[instrument(skip(state))]
pub async fn create_comment(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateCommentDto>,
) -> Result<(StatusCode, Json<Comment>), AppError> {
    let comment = CommentService::create_comment(&state.db, user_id, dto).await?;
    Ok((StatusCode::CREATED, Json(comment)))
}

/// List all comments with their authors' nicknames
#[utoipa::path(
    get,
    path = "/api/comments",
    responses(
        (status = 200, description = "Comments, newest first", body = Vec<CommentWithAuthor>),
        (status = 403, description = "Missing, malformed, expired or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Comments"
)]
#[instrument(skip(state, _auth_user))]
pub async fn list_comments(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> Result<Json<Vec<CommentWithAuthor>>, AppError> {
    let comments = CommentService::list_comments(&state.db).await?;
    Ok(Json(comments))
}

/// Edit one of the caller's comments
#[utoipa::path(
    put,
    path = "/api/comments/{comment_id}",
    params(
        ("comment_id" = i64, Path, description = "Comment ID")
    ),
    request_body = UpdateCommentDto,
    responses(
        (status = 200, description = "Comment updated", body = Comment),
        (status = 400, description = "No updatable fields or invalid field format", body = ErrorResponse),
        (status = 403, description = "Missing, malformed, expired or invalid token", body = ErrorResponse),
        (status = 404, description = "Comment not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Comments"
)]
#[instrument(skip(state, body))]
pub async fn update_comment(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(comment_id): Path<i64>,
    JsonObject(body): JsonObject,
) -> Result<Json<Comment>, AppError> {
    let comment =
        CommentService::update_comment(&state.db, &state.planner, user_id, comment_id, &body)
            .await?;
    Ok(Json(comment))
}

/// Delete one of the caller's comments
#[utoipa::path(
    delete,
    path = "/api/comments/{comment_id}",
    params(
        ("comment_id" = i64, Path, description = "Comment ID")
    ),
    responses(
        (status = 200, description = "Comment deleted", body = MessageResponse),
        (status = 403, description = "Missing, malformed, expired or invalid token", body = ErrorResponse),
        (status = 404, description = "Comment not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Comments"
)]
#[instrument(skip(state))]
pub async fn delete_comment(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(comment_id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    CommentService::delete_comment(&state.db, user_id, comment_id).await?;
    Ok(Json(MessageResponse::new("Comment deleted successfully")))
}
