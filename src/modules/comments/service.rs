use serde_json::{Map, Value};
use sqlx::PgPool;
use tasknote_core::{AppError, UserId};
use tasknote_db::{OwnerScope, UpdatePlanner, delete_owned};
use tasknote_models::comments::COMMENT_COLUMNS;
use tasknote_models::{COMMENT_RESOURCE, Comment, CommentWithAuthor, CreateCommentDto};
use tracing::{info, instrument};

pub struct CommentService;

impl CommentService {
    #[instrument(skip(db))]
    pub async fn create_comment(
        db: &PgPool,
        user_id: UserId,
        dto: CreateCommentDto,
    ) -> Result<Comment, AppError> {
        let sql = format!(
            "INSERT INTO comments (user_id, content) VALUES ($1, $2) RETURNING {}",
            COMMENT_COLUMNS
        );

        let comment = sqlx::query_as::<_, Comment>(&sql)
            .bind(user_id)
            .bind(dto.content.trim())
            .fetch_one(db)
            .await?;

        info!(comment_id = comment.id, "Comment created");

        Ok(comment)
    }

    /// Every comment on the board, newest first. Reading is open to any
    /// authenticated caller; changing is not.
    #[instrument(skip(db))]
    pub async fn list_comments(db: &PgPool) -> Result<Vec<CommentWithAuthor>, AppError> {
        let comments = sqlx::query_as::<_, CommentWithAuthor>(
            r#"SELECT c.id, c.user_id, u.nickname, c.content, c.created_at
               FROM comments c
               JOIN users u ON u.id = c.user_id
               ORDER BY c.created_at DESC, c.id DESC"#,
        )
        .fetch_all(db)
        .await?;

        Ok(comments)
    }

    #[instrument(skip(db, planner, body))]
    pub async fn update_comment(
        db: &PgPool,
        planner: &UpdatePlanner,
        user_id: UserId,
        comment_id: i64,
        body: &Map<String, Value>,
    ) -> Result<Comment, AppError> {
        let comment: Comment = planner
            .plan(&COMMENT_RESOURCE, body, OwnerScope::new(comment_id, user_id))?
            .execute(db)
            .await?;

        info!(comment_id, "Comment updated");

        Ok(comment)
    }

    #[instrument(skip(db))]
    pub async fn delete_comment(
        db: &PgPool,
        user_id: UserId,
        comment_id: i64,
    ) -> Result<(), AppError> {
        delete_owned(db, &COMMENT_RESOURCE, OwnerScope::new(comment_id, user_id)).await?;

        info!(comment_id, "Comment deleted");

        Ok(())
    }
}
