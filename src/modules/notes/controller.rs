use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tasknote_core::{AppError, ErrorResponse};
use tasknote_models::{CreateNoteDto, MessageResponse, Note, NoteSummary, UpdateNoteDto};
use tracing::instrument;

use super::service::NoteService;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validator::{JsonObject, ValidatedJson};

/// Create a note
#[utoipa::path(
    post,
    path = "/api/notes",
    request_body = CreateNoteDto,
    responses(
        (status = 201, description = "Note created", body = Note),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 403, description = "Missing, malformed, expired or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Notes"
)]
#[instrument(skip(state))]
pub async fn create_note(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateNoteDto>,
) -> Result<(StatusCode, Json<Note>), AppError> {
    let note = NoteService::create_note(&state.db, user_id, dto).await?;
    Ok((StatusCode::CREATED, Json(note)))
}

/// List the titles of the caller's notes, newest first
#[utoipa::path(
    get,
    path = "/api/notes",
    responses(
        (status = 200, description = "Note titles", body = Vec<NoteSummary>),
        (status = 403, description = "Missing, malformed, expired or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Notes"
)]
#[instrument(skip(state))]
pub async fn list_notes(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<NoteSummary>>, AppError> {
    let notes = NoteService::list_notes(&state.db, user_id).await?;
    Ok(Json(notes))
}

/// Get one of the caller's notes
#[utoipa::path(
    get,
    path = "/api/notes/{note_id}",
    params(
        ("note_id" = i64, Path, description = "Note ID")
    ),
    responses(
        (status = 200, description = "Note", body = Note),
        (status = 403, description = "Missing, malformed, expired or invalid token", body = ErrorResponse),
        (status = 404, description = "Note not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Notes"
)]
#[instrument(skip(state))]
pub async fn get_note(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(note_id): Path<i64>,
) -> Result<Json<Note>, AppError> {
    let note = NoteService::get_note(&state.db, user_id, note_id).await?;
    Ok(Json(note))
}

/// Update a note's title and/or content
#[utoipa::path(
    put,
    path = "/api/notes/{note_id}",
    params(
        ("note_id" = i64, Path, description = "Note ID")
    ),
    request_body = UpdateNoteDto,
    responses(
        (status = 200, description = "Note updated", body = Note),
        (status = 400, description = "No updatable fields or invalid field format", body = ErrorResponse),
        (status = 403, description = "Missing, malformed, expired or invalid token", body = ErrorResponse),
        (status = 404, description = "Note not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Notes"
)]
#[instrument(skip(state, body))]
pub async fn update_note(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(note_id): Path<i64>,
    JsonObject(body): JsonObject,
) -> Result<Json<Note>, AppError> {
    let note = NoteService::update_note(&state.db, &state.planner, user_id, note_id, &body).await?;
    Ok(Json(note))
}

/// Delete a note
#[utoipa::path(
    delete,
    path = "/api/notes/{note_id}",
    params(
        ("note_id" = i64, Path, description = "Note ID")
    ),
    responses(
        (status = 200, description = "Note deleted", body = MessageResponse),
        (status = 403, description = "Missing, malformed, expired or invalid token", body = ErrorResponse),
        (status = 404, description = "Note not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Notes"
)]
#[instrument(skip(state))]
pub async fn delete_note(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(note_id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    NoteService::delete_note(&state.db, user_id, note_id).await?;
    Ok(Json(MessageResponse::new("Note deleted successfully")))
}
