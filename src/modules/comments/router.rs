use axum::{
    Router,
    routing::{get, put},
};

use super::controller::{create_comment, delete_comment, list_comments, update_comment};
use crate::state::AppState;

pub fn init_comments_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_comments).post(create_comment))
        .route("/{comment_id}", put(update_comment).delete(delete_comment))
}
