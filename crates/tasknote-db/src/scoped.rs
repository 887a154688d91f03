//! Statements constrained by the ownership predicate.
//!
//! A record that exists but belongs to someone else is reported exactly like
//! a record that does not exist.

use sqlx::{FromRow, PgPool, postgres::PgRow};
use tasknote_core::{AppError, UserId};
use tracing::instrument;

use crate::partial_update::Resource;

/// The `(resourceId, ownerId)` pair every owner-scoped statement must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnerScope {
    pub resource_id: i64,
    pub owner_id: UserId,
}

impl OwnerScope {
    pub const fn new(resource_id: i64, owner_id: UserId) -> Self {
        Self {
            resource_id,
            owner_id,
        }
    }

    /// Scope of a user acting on their own account row.
    pub const fn account(user_id: UserId) -> Self {
        Self {
            resource_id: user_id.into_inner(),
            owner_id: user_id,
        }
    }
}

pub(crate) fn not_found(resource: &Resource) -> AppError {
    AppError::not_found(anyhow::anyhow!("{} not found", resource.label))
}

/// Loads one owned record.
#[instrument(skip(db, resource), fields(table = resource.table))]
pub async fn fetch_owned<T>(db: &PgPool, resource: &Resource, scope: OwnerScope) -> Result<T, AppError>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    let sql = format!(
        "SELECT {} FROM {} WHERE {} = $1 AND {} = $2",
        resource.returning, resource.table, resource.id_column, resource.owner_column
    );

    sqlx::query_as::<_, T>(&sql)
        .bind(scope.resource_id)
        .bind(scope.owner_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| not_found(resource))
}

/// Deletes one owned record.
#[instrument(skip(db, resource), fields(table = resource.table))]
pub async fn delete_owned(db: &PgPool, resource: &Resource, scope: OwnerScope) -> Result<(), AppError> {
    let sql = format!(
        "DELETE FROM {} WHERE {} = $1 AND {} = $2",
        resource.table, resource.id_column, resource.owner_column
    );

    let result = sqlx::query(&sql)
        .bind(scope.resource_id)
        .bind(scope.owner_id)
        .execute(db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(not_found(resource));
    }

    Ok(())
}
