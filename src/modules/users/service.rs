use anyhow::anyhow;
use serde_json::{Map, Value};
use sqlx::PgPool;
use tasknote_core::{AppError, UserId};
use tasknote_db::{OwnerScope, UpdatePlanner, delete_owned, fetch_owned};
use tasknote_models::{USER_RESOURCE, User, UserSummary};
use tracing::{info, instrument};

pub struct UserService;

impl UserService {
    #[instrument(skip(db))]
    pub async fn get_profile(db: &PgPool, user_id: UserId) -> Result<User, AppError> {
        fetch_owned(db, &USER_RESOURCE, OwnerScope::account(user_id)).await
    }

    #[instrument(skip(db))]
    pub async fn get_summary(db: &PgPool, user_id: UserId) -> Result<UserSummary, AppError> {
        sqlx::query_as::<_, UserSummary>("SELECT id, nickname FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("User not found")))
    }

    /// Applies the present fields of `body` to the caller's own account.
    #[instrument(skip(db, planner, body))]
    pub async fn update_profile(
        db: &PgPool,
        planner: &UpdatePlanner,
        user_id: UserId,
        body: &Map<String, Value>,
    ) -> Result<User, AppError> {
        let plan = planner.plan(&USER_RESOURCE, body, OwnerScope::account(user_id))?;
        let columns = plan.columns();

        let user: User = plan.execute(db).await?;

        info!(?columns, "Profile updated");

        Ok(user)
    }

    #[instrument(skip(db))]
    pub async fn delete_account(db: &PgPool, user_id: UserId) -> Result<(), AppError> {
        delete_owned(db, &USER_RESOURCE, OwnerScope::account(user_id)).await?;

        info!("Account deleted");

        Ok(())
    }
}
