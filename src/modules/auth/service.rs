use anyhow::anyhow;
use axum::http::StatusCode;
use chrono::Utc;
use sqlx::{FromRow, PgPool};
use tasknote_auth::TokenService;
use tasknote_auth::BEARER_PREFIX;
use tasknote_config::RegistrationConfig;
use tasknote_core::errors::codes;
use tasknote_core::{AppError, hash_password, verify_password};
use tasknote_models::users::USER_COLUMNS;
use tasknote_models::{LoginRequest, LoginResponse, RegisterRequest, ResetPasswordRequest, User};
use tracing::{info, instrument, warn};

const DUPLICATE_ACCOUNT: &str = "Phone number or email already registered";
const INVALID_CREDENTIALS: &str = "Invalid phone number or password";

#[derive(FromRow)]
struct StoredCredentials {
    #[sqlx(flatten)]
    user: User,
    password: String,
}

pub struct AuthService;

impl AuthService {
    /// Creates an account. Uniqueness of phone number and email is left to
    /// the storage constraints.
    #[instrument(skip(db, config, dto), fields(phone = %dto.phone))]
    pub async fn register_user(
        db: &PgPool,
        config: &RegistrationConfig,
        dto: RegisterRequest,
    ) -> Result<User, AppError> {
        if !config.is_fresh(dto.timestamp, Utc::now().timestamp()) {
            warn!(timestamp = dto.timestamp, "Stale registration request");
            return Err(AppError::new(
                StatusCode::BAD_REQUEST,
                codes::REQUEST_EXPIRED,
                anyhow!("Request expired, please retry"),
            ));
        }

        let sql = format!(
            "INSERT INTO users (phone_number, nickname, email, password)
             VALUES ($1, $2, $3, $4)
             RETURNING {}",
            USER_COLUMNS
        );

        let user = sqlx::query_as::<_, User>(&sql)
            .bind(&dto.phone)
            .bind(dto.nickname.trim())
            .bind(&dto.email)
            .bind(hash_password(&dto.password))
            .fetch_one(db)
            .await
            .map_err(|e| AppError::from_unique_violation(e, DUPLICATE_ACCOUNT))?;

        info!(user_id = %user.id, "User registered");

        Ok(user)
    }

    #[instrument(skip(db, tokens, dto), fields(phone = %dto.phone_number))]
    pub async fn login_user(
        db: &PgPool,
        tokens: &TokenService,
        dto: LoginRequest,
    ) -> Result<LoginResponse, AppError> {
        let sql = format!(
            "SELECT {}, password FROM users WHERE phone_number = $1",
            USER_COLUMNS
        );

        let stored = sqlx::query_as::<_, StoredCredentials>(&sql)
            .bind(&dto.phone_number)
            .fetch_optional(db)
            .await?
            .filter(|stored| verify_password(&dto.password, stored.password.trim_end()))
            .ok_or_else(|| AppError::unauthorized(anyhow!(INVALID_CREDENTIALS)))?;

        let access_token = tokens.issue(stored.user.id)?;

        info!(user_id = %stored.user.id, "User logged in");

        Ok(LoginResponse {
            access_token,
            token_type: BEARER_PREFIX.trim_end().to_string(),
            expires_in: tokens.access_token_expiry(),
            user: stored.user,
        })
    }

    #[instrument(skip(db, dto), fields(phone = %dto.phone))]
    pub async fn reset_password(db: &PgPool, dto: ResetPasswordRequest) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE users SET password = $1 WHERE phone_number = $2")
            .bind(hash_password(&dto.new_password))
            .bind(&dto.phone)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow!("User not found")));
        }

        info!("Password reset");

        Ok(())
    }
}
