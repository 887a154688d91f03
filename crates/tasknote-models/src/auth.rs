//! Registration, login, and password reset DTOs.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::users::User;
use crate::validation::{validate_not_blank, validate_phone};

/// Account registration.
///
/// `timestamp` is the client's clock in epoch seconds; requests too far from
/// the server clock are rejected. `nonce` is required but not stored.
#[derive(Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(custom(function = "validate_phone"))]
    #[schema(example = "13800138000")]
    pub phone: String,
    #[validate(custom(function = "validate_not_blank"))]
    pub nickname: String,
    #[validate(email)]
    #[schema(example = "user@example.com")]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
    pub timestamp: i64,
    #[validate(length(min = 1))]
    pub nonce: String,
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("phone", &self.phone)
            .field("nickname", &self.nickname)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("timestamp", &self.timestamp)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[serde(rename = "phoneNumber", alias = "phone")]
    #[validate(custom(function = "validate_phone"))]
    #[schema(example = "13800138000")]
    pub phone_number: String,
    #[validate(length(min = 1))]
    #[schema(example = "password123")]
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("phone_number", &self.phone_number)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Successful login: a bearer token valid for `expires_in` seconds.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub access_token: String,
    #[schema(example = "Bearer")]
    pub token_type: String,
    pub expires_in: i64,
    pub user: User,
}

#[derive(Clone, Deserialize, Validate, ToSchema)]
pub struct ResetPasswordRequest {
    #[validate(custom(function = "validate_phone"))]
    #[schema(example = "13800138000")]
    pub phone: String,
    #[validate(length(min = 1))]
    pub new_password: String,
}

impl fmt::Debug for ResetPasswordRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResetPasswordRequest")
            .field("phone", &self.phone)
            .field("new_password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn register(phone: &str, email: &str) -> RegisterRequest {
        serde_json::from_value(json!({
            "phone": phone,
            "nickname": "alice",
            "email": email,
            "password": "secret-password",
            "timestamp": 1_700_000_000,
            "nonce": "n-1",
        }))
        .unwrap()
    }

    #[test]
    fn test_register_request_validation() {
        assert!(register("13800138000", "alice@example.com").validate().is_ok());
        assert!(register("1380013800", "alice@example.com").validate().is_err());
        assert!(register("13800138000", "alice").validate().is_err());
    }

    #[test]
    fn test_register_request_requires_every_field() {
        let result = serde_json::from_value::<RegisterRequest>(json!({
            "phone": "13800138000",
            "nickname": "alice",
            "email": "alice@example.com",
            "password": "secret-password",
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_login_request_accepts_both_phone_keys() {
        let camel: LoginRequest =
            serde_json::from_value(json!({ "phoneNumber": "13800138000", "password": "pw" })).unwrap();
        let short: LoginRequest =
            serde_json::from_value(json!({ "phone": "13800138000", "password": "pw" })).unwrap();

        assert_eq!(camel.phone_number, short.phone_number);
        assert!(camel.validate().is_ok());
    }

    #[test]
    fn test_debug_never_prints_passwords() {
        let request = register("13800138000", "alice@example.com");
        assert!(!format!("{:?}", request).contains("secret-password"));

        let reset = ResetPasswordRequest {
            phone: "13800138000".to_string(),
            new_password: "new-secret".to_string(),
        };
        assert!(!format!("{:?}", reset).contains("new-secret"));
    }
}
