//! Comment models and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tasknote_core::UserId;
use tasknote_db::{Field, FieldKind, Resource};
use utoipa::ToSchema;
use validator::Validate;

use crate::validation::validate_not_blank;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Comment {
    pub id: i64,
    pub user_id: UserId,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A comment joined with its author's nickname.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CommentWithAuthor {
    pub id: i64,
    pub user_id: UserId,
    pub nickname: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

pub const COMMENT_COLUMNS: &str = "id, user_id, content, created_at";

pub static COMMENT_RESOURCE: Resource = Resource {
    label: "Comment",
    table: "comments",
    id_column: "id",
    owner_column: "user_id",
    fields: &[Field::new("content", "content", FieldKind::NonEmptyText)],
    touch_column: None,
    returning: COMMENT_COLUMNS,
    unique_violation: None,
};

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCommentDto {
    #[validate(custom(function = "validate_not_blank"))]
    pub content: String,
}

/// Body of `PUT /api/comments/{comment_id}`; see [`COMMENT_RESOURCE`].
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateCommentDto {
    pub content: Option<String>,
}
