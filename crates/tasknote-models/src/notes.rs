//! Note models and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tasknote_core::UserId;
use tasknote_db::{Field, FieldKind, Resource};
use utoipa::ToSchema;
use validator::Validate;

use crate::validation::validate_not_blank;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Note {
    pub id: i64,
    pub user_id: UserId,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// List entry: notes are listed by title only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct NoteSummary {
    pub id: i64,
    pub title: String,
}

pub const NOTE_COLUMNS: &str = "id, user_id, title, content, created_at, updated_at";

pub static NOTE_RESOURCE: Resource = Resource {
    label: "Note",
    table: "notes",
    id_column: "id",
    owner_column: "user_id",
    fields: &[
        Field::new("title", "title", FieldKind::NonEmptyText),
        Field::new("content", "content", FieldKind::Text),
    ],
    touch_column: Some("updated_at"),
    returning: NOTE_COLUMNS,
    unique_violation: None,
};

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateNoteDto {
    #[validate(custom(function = "validate_not_blank"))]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Body of `PUT /api/notes/{note_id}`; see [`NOTE_RESOURCE`].
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateNoteDto {
    pub title: Option<String>,
    pub content: Option<String>,
}
