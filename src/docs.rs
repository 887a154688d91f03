use tasknote_core::{ErrorResponse, UserId};
use tasknote_models::{
    Comment, CommentWithAuthor, CreateCommentDto, CreateNoteDto, CreateTaskDto, LoginRequest,
    LoginResponse, MessageResponse, Note, NoteSummary, RegisterRequest, ResetPasswordRequest, Task,
    TaskFilterParams, UpdateCommentDto, UpdateNoteDto, UpdateTaskDto, UpdateUserDto, User,
    UserSummary,
};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register_user,
        crate::modules::auth::controller::login_user,
        crate::modules::auth::controller::reset_password,
        crate::modules::users::controller::get_profile,
        crate::modules::users::controller::get_summary,
        crate::modules::users::controller::update_profile,
        crate::modules::users::controller::delete_account,
        crate::modules::tasks::controller::create_task,
        crate::modules::tasks::controller::list_tasks,
        crate::modules::tasks::controller::update_task,
        crate::modules::tasks::controller::delete_task,
        crate::modules::notes::controller::create_note,
        crate::modules::notes::controller::list_notes,
        crate::modules::notes::controller::get_note,
        crate::modules::notes::controller::update_note,
        crate::modules::notes::controller::delete_note,
        crate::modules::comments::controller::create_comment,
        crate::modules::comments::controller::list_comments,
        crate::modules::comments::controller::update_comment,
        crate::modules::comments::controller::delete_comment,
    ),
    components(
        schemas(
            UserId,
            User,
            UserSummary,
            UpdateUserDto,
            RegisterRequest,
            LoginRequest,
            LoginResponse,
            ResetPasswordRequest,
            Task,
            CreateTaskDto,
            UpdateTaskDto,
            TaskFilterParams,
            Note,
            NoteSummary,
            CreateNoteDto,
            UpdateNoteDto,
            Comment,
            CommentWithAuthor,
            CreateCommentDto,
            UpdateCommentDto,
            MessageResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration, login and password reset"),
        (name = "Users", description = "The caller's own account"),
        (name = "Tasks", description = "Task management"),
        (name = "Notes", description = "Note management"),
        (name = "Comments", description = "Comment board")
    ),
    info(
        title = "Tasknote API",
        version = "0.1.0",
        description = "Tasks, notes and comments behind bearer-token authentication"
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_route_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/auth/register",
            "/api/auth/login",
            "/api/auth/reset-password",
            "/api/users/me",
            "/api/users/me/summary",
            "/api/tasks",
            "/api/tasks/{task_id}",
            "/api/notes",
            "/api/notes/{note_id}",
            "/api/comments",
            "/api/comments/{comment_id}",
        ] {
            assert!(doc.paths.paths.contains_key(path), "{}", path);
        }
    }

    #[test]
    fn test_bearer_scheme_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.unwrap();
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
