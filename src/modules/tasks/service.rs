use serde_json::{Map, Value};
use sqlx::PgPool;
use tasknote_core::{AppError, UserId};
use tasknote_db::{OwnerScope, PlanError, UpdatePlanner, delete_owned, parse_timestamp};
use tasknote_models::tasks::TASK_COLUMNS;
use tasknote_models::{CreateTaskDto, TASK_RESOURCE, Task, TaskFilterParams};
use tracing::{info, instrument};

/// Escapes `LIKE` wildcards so a search term matches literally.
fn like_pattern(search: &str) -> String {
    let escaped = search
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

pub struct TaskService;

impl TaskService {
    #[instrument(skip(db, planner))]
    pub async fn create_task(
        db: &PgPool,
        planner: &UpdatePlanner,
        user_id: UserId,
        dto: CreateTaskDto,
    ) -> Result<Task, AppError> {
        let due_date = dto
            .due_date()
            .map(|raw| {
                parse_timestamp(raw, planner.local_offset()).ok_or(PlanError::InvalidFormat {
                    field: "due_date",
                    reason: "expected YYYY-MM-DD HH:MM[:SS] or RFC 3339",
                })
            })
            .transpose()?;

        let sql = format!(
            "INSERT INTO tasks (user_id, title, description, due_date, tag, status)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {}",
            TASK_COLUMNS
        );

        let task = sqlx::query_as::<_, Task>(&sql)
            .bind(user_id)
            .bind(dto.title.trim())
            .bind(&dto.description)
            .bind(due_date)
            .bind(&dto.tag)
            .bind(&dto.status)
            .fetch_one(db)
            .await?;

        info!(task_id = task.id, "Task created");

        Ok(task)
    }

    /// Lists the caller's tasks, newest first, narrowed by the given filters.
    #[instrument(skip(db))]
    pub async fn list_tasks(
        db: &PgPool,
        user_id: UserId,
        filters: TaskFilterParams,
    ) -> Result<Vec<Task>, AppError> {
        let mut sql = format!("SELECT {} FROM tasks WHERE user_id = $1", TASK_COLUMNS);
        let mut params: Vec<String> = Vec::new();

        if let Some(status) = filters.status.filter(|s| !s.is_empty()) {
            params.push(status);
            sql.push_str(&format!(" AND status = ${}", params.len() + 1));
        }

        if let Some(tag) = filters.tag.filter(|t| !t.is_empty()) {
            params.push(tag);
            sql.push_str(&format!(" AND tag = ${}", params.len() + 1));
        }

        if let Some(search) = filters.search.filter(|s| !s.is_empty()) {
            params.push(like_pattern(&search));
            let n = params.len() + 1;
            sql.push_str(&format!(
                " AND (title ILIKE ${n} OR description ILIKE ${n})"
            ));
        }

        sql.push_str(" ORDER BY created_at DESC, id DESC");

        let mut query = sqlx::query_as::<_, Task>(&sql).bind(user_id);
        for param in params {
            query = query.bind(param);
        }

        Ok(query.fetch_all(db).await?)
    }

    #[instrument(skip(db, planner, body))]
    pub async fn update_task(
        db: &PgPool,
        planner: &UpdatePlanner,
        user_id: UserId,
        task_id: i64,
        body: &Map<String, Value>,
    ) -> Result<Task, AppError> {
        let plan = planner.plan(&TASK_RESOURCE, body, OwnerScope::new(task_id, user_id))?;
        let columns = plan.columns();

        let task: Task = plan.execute(db).await?;

        info!(task_id, ?columns, "Task updated");

        Ok(task)
    }

    #[instrument(skip(db))]
    pub async fn delete_task(db: &PgPool, user_id: UserId, task_id: i64) -> Result<(), AppError> {
        delete_owned(db, &TASK_RESOURCE, OwnerScope::new(task_id, user_id)).await?;

        info!(task_id, "Task deleted");

        Ok(())
    }
}
