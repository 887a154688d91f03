//! # Tasknote DB
//!
//! Storage-facing pieces of the Tasknote API.
//!
//! - [`init_db_pool`]: PostgreSQL pool initialisation
//! - [`scoped`]: Reads and deletes constrained by the `(resource, owner)` predicate
//! - [`partial_update`]: The planner that turns a sparse JSON object into a
//!   single parameterized, owner-scoped `UPDATE`
//!
//! # Example
//!
//! ```ignore
//! use tasknote_db::{init_db_pool, OwnerScope, UpdatePlanner};
//!
//! let pool = init_db_pool().await;
//! let plan = planner.plan(&TASK_RESOURCE, &body, OwnerScope::new(task_id, user_id))?;
//! let task: Task = plan.execute(&pool).await?;
//! ```

use std::env;

pub mod partial_update;
pub mod scoped;

pub use partial_update::{
    BindValue, Field, FieldKind, MutationState, PlanError, Resource, UpdatePlan, UpdatePlanner,
    is_valid_phone, parse_timestamp,
};
pub use scoped::{OwnerScope, delete_owned, fetch_owned};

/// Initializes a PostgreSQL connection pool.
///
/// This function reads the database URL from the `DATABASE_URL` environment
/// variable and creates a connection pool. The pool is used throughout the
/// application for all database operations.
///
/// # Panics
///
/// Panics if:
/// - `DATABASE_URL` environment variable is not set
/// - Connection to the database fails
pub async fn init_db_pool() -> sqlx::PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    sqlx::PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to database")
}

// Re-export PgPool for convenience
pub use sqlx::PgPool;
