//! Task models and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tasknote_core::UserId;
use tasknote_db::{Field, FieldKind, Resource};
use utoipa::ToSchema;
use validator::Validate;

use crate::validation::validate_not_blank;

pub const DEFAULT_STATUS: &str = "pending";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Task {
    pub id: i64,
    pub user_id: UserId,
    pub title: String,
    pub description: String,
    pub due_date: Option<DateTime<Utc>>,
    pub tag: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

pub const TASK_COLUMNS: &str =
    "id, user_id, title, description, due_date, tag, status, created_at";

pub static TASK_RESOURCE: Resource = Resource {
    label: "Task",
    table: "tasks",
    id_column: "id",
    owner_column: "user_id",
    fields: &[
        Field::new("title", "title", FieldKind::NonEmptyText),
        Field::new("description", "description", FieldKind::Text),
        Field::new("due_date", "due_date", FieldKind::Timestamp),
        Field::new("tag", "tag", FieldKind::Text),
        Field::new("status", "status", FieldKind::Text),
    ],
    touch_column: None,
    returning: TASK_COLUMNS,
    unique_violation: None,
};

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateTaskDto {
    #[validate(custom(function = "validate_not_blank"))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// `YYYY-MM-DD HH:MM[:SS]` in local time, or RFC 3339. Empty means none.
    #[schema(example = "2024-06-01 18:00")]
    pub due_date: Option<String>,
    #[serde(default)]
    pub tag: String,
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    DEFAULT_STATUS.to_string()
}

impl CreateTaskDto {
    /// The due date, treating an empty string as absent.
    pub fn due_date(&self) -> Option<&str> {
        self.due_date.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}

/// Body of `PUT /api/tasks/{task_id}`; see [`TASK_RESOURCE`].
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateTaskDto {
    pub title: Option<String>,
    pub description: Option<String>,
    #[schema(example = "2024-06-01 18:00")]
    pub due_date: Option<String>,
    pub tag: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TaskFilterParams {
    pub status: Option<String>,
    pub tag: Option<String>,
    /// Substring matched against title and description.
    pub search: Option<String>,
}
