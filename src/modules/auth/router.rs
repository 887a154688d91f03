use axum::{Router, routing::post};

use super::controller::{login_user, register_user, reset_password};
use crate::state::AppState;

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_user))
        .route("/login", post(login_user))
        .route("/reset-password", post(reset_password))
}
