use axum::{
    Router,
    routing::{get, put},
};

use super::controller::{create_task, delete_task, list_tasks, update_task};
use crate::state::AppState;

pub fn init_tasks_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_tasks).post(create_task))
        .route("/{task_id}", put(update_task).delete(delete_task))
}
