//! Token issuance and verification.
//!
//! Tokens are HS256 JWTs carrying `{sub, iat, exp}`. The signing secret is
//! taken from [`JwtConfig`] once, when the [`TokenService`] is built, and is
//! never mutated afterwards.
//!
//! Verification is a pure function of the token text, the current time and
//! the secret. Its outcome is exactly one of:
//!
//! - the embedded [`UserId`]
//! - [`AuthError::Malformed`]: not a well-formed signed claim set
//! - [`AuthError::Invalid`]: signature mismatch, unexpected algorithm, or a
//!   missing or non-numeric subject
//! - [`AuthError::Expired`]: valid signature, expiry in the past
//!
//! # Example
//!
//! ```ignore
//! let tokens = TokenService::new(&jwt_config);
//! let token = tokens.issue(UserId::new(42))?;
//! assert_eq!(tokens.verify(&token)?, UserId::new(42));
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use tasknote_config::JwtConfig;
use tasknote_core::{AppError, UserId};

use crate::claims::Claims;
use crate::error::AuthError;

const ALGORITHM: Algorithm = Algorithm::HS256;

#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    access_token_expiry: i64,
    leeway: i64,
}

impl TokenService {
    pub fn new(jwt_config: &JwtConfig) -> Self {
        let mut validation = Validation::new(ALGORITHM);
        // Expiry is compared in `verify_at` against the caller's clock.
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding_key: EncodingKey::from_secret(jwt_config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(jwt_config.secret.as_bytes()),
            validation,
            access_token_expiry: jwt_config.access_token_expiry,
            leeway: jwt_config.leeway,
        }
    }

    /// Validity window of issued tokens, in seconds.
    pub fn access_token_expiry(&self) -> i64 {
        self.access_token_expiry
    }

    /// Issues a token for `user_id`, valid from now for the configured window.
    pub fn issue(&self, user_id: UserId) -> Result<String, AppError> {
        self.issue_at(user_id, Utc::now())
    }

    /// Issues a token as if the current time were `now`.
    pub fn issue_at(&self, user_id: UserId, now: DateTime<Utc>) -> Result<String, AppError> {
        let iat = now.timestamp();
        let claims = Claims {
            sub: Some(user_id.to_string()),
            iat: Some(iat),
            exp: iat + self.access_token_expiry,
        };

        encode(&Header::new(ALGORITHM), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to create token: {}", e)))
    }

    /// Verifies `token` against the current time.
    pub fn verify(&self, token: &str) -> Result<UserId, AuthError> {
        self.verify_at(token, Utc::now())
    }

    /// Verifies `token` as if the current time were `now`.
    ///
    /// The signature is checked before expiry, so a tampered token is
    /// reported as [`AuthError::Invalid`] even when it is also stale.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<UserId, AuthError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)?.claims;

        if now.timestamp() - self.leeway > claims.exp {
            return Err(AuthError::Expired);
        }

        claims
            .sub
            .as_deref()
            .and_then(|sub| sub.parse::<UserId>().ok())
            .ok_or(AuthError::Invalid)
    }
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("algorithm", &ALGORITHM)
            .field("access_token_expiry", &self.access_token_expiry)
            .field("leeway", &self.leeway)
            .finish_non_exhaustive()
    }
}
