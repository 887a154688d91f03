//! # Tasknote Models
//!
//! Domain models and DTOs for the Tasknote API.
//!
//! Each resource module also exports the static [`Resource`](tasknote_db::Resource)
//! descriptor that fixes which fields a caller may change through a partial
//! update.
//!
//! # Modules
//!
//! - [`auth`]: Registration, login, and password reset
//! - [`users`]: Account entity and profile updates
//! - [`tasks`]: Tasks with due dates, tags, and status
//! - [`notes`]: Titled notes
//! - [`comments`]: Comments with their author's nickname
//!
//! # Example
//!
//! ```ignore
//! use tasknote_models::tasks::{Task, TASK_RESOURCE};
//!
//! let plan = planner.plan(&TASK_RESOURCE, &body, OwnerScope::new(task_id, user_id))?;
//! let task: Task = plan.execute(&db).await?;
//! ```

pub mod auth;
pub mod comments;
pub mod notes;
pub mod tasks;
pub mod users;
pub mod validation;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub use auth::{LoginRequest, LoginResponse, RegisterRequest, ResetPasswordRequest};
pub use comments::{COMMENT_RESOURCE, Comment, CommentWithAuthor, CreateCommentDto, UpdateCommentDto};
pub use notes::{CreateNoteDto, NOTE_RESOURCE, Note, NoteSummary, UpdateNoteDto};
pub use tasks::{CreateTaskDto, TASK_RESOURCE, Task, TaskFilterParams, UpdateTaskDto};
pub use users::{USER_RESOURCE, UpdateUserDto, User, UserSummary};

/// Plain acknowledgement body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
