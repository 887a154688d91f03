use axum::{Router, routing::get};

use super::controller::{delete_account, get_profile, get_summary, update_profile};
use crate::state::AppState;

pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route(
            "/me",
            get(get_profile).put(update_profile).delete(delete_account),
        )
        .route("/me/summary", get(get_summary))
}
