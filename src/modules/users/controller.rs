use axum::Json;
use axum::extract::State;
use tasknote_core::{AppError, ErrorResponse};
use tasknote_models::{MessageResponse, UpdateUserDto, User, UserSummary};
use tracing::instrument;

use super::service::UserService;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validator::JsonObject;

/// Get the caller's profile
#[utoipa::path(
    get,
    path = "/api/users/me",
    responses(
        (status = 200, description = "User profile", body = User),
        (status = 403, description = "Missing, malformed, expired or invalid token", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<User>, AppError> {
    let user = UserService::get_profile(&state.db, user_id).await?;
    Ok(Json(user))
}

/// Get the caller's id and nickname
#[utoipa::path(
    get,
    path = "/api/users/me/summary",
    responses(
        (status = 200, description = "User summary", body = UserSummary),
        (status = 403, description = "Missing, malformed, expired or invalid token", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_summary(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<UserSummary>, AppError> {
    let summary = UserService::get_summary(&state.db, user_id).await?;
    Ok(Json(summary))
}

/// Update any subset of the caller's profile fields
#[utoipa::path(
    put,
    path = "/api/users/me",
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Profile updated", body = User),
        (status = 400, description = "No updatable fields or invalid field format", body = ErrorResponse),
        (status = 403, description = "Missing, malformed, expired or invalid token", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse),
        (status = 409, description = "Phone number or email already in use", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state, body))]
pub async fn update_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    JsonObject(body): JsonObject,
) -> Result<Json<User>, AppError> {
    let user = UserService::update_profile(&state.db, &state.planner, user_id, &body).await?;
    Ok(Json(user))
}

/// Delete the caller's account and everything it owns
#[utoipa::path(
    delete,
    path = "/api/users/me",
    responses(
        (status = 200, description = "Account deleted", body = MessageResponse),
        (status = 403, description = "Missing, malformed, expired or invalid token", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn delete_account(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<MessageResponse>, AppError> {
    UserService::delete_account(&state.db, user_id).await?;
    Ok(Json(MessageResponse::new("Account deleted successfully")))
}
