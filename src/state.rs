use std::sync::Arc;

use sqlx::PgPool;
use tasknote_auth::TokenService;
use tasknote_config::{CorsConfig, JwtConfig, LocaleConfig, RegistrationConfig};
use tasknote_db::{UpdatePlanner, init_db_pool};

/// Shared, read-only request context.
///
/// Built once before the listener binds. Nothing in it is mutated while the
/// server runs; the signing secret lives only inside `tokens`.
#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub tokens: Arc<TokenService>,
    pub planner: UpdatePlanner,
    pub registration_config: RegistrationConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(
        db: PgPool,
        jwt_config: &JwtConfig,
        registration_config: RegistrationConfig,
        locale_config: LocaleConfig,
        cors_config: CorsConfig,
    ) -> Self {
        Self {
            db,
            tokens: Arc::new(TokenService::new(jwt_config)),
            planner: UpdatePlanner::new(locale_config.utc_offset),
            registration_config,
            cors_config,
        }
    }
}

pub async fn init_app_state() -> AppState {
    let jwt_config = JwtConfig::from_env();

    AppState::new(
        init_db_pool().await,
        &jwt_config,
        RegistrationConfig::from_env(),
        LocaleConfig::from_env(),
        CorsConfig::from_env(),
    )
}
