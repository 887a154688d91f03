use axum::http::StatusCode;
use tasknote_core::AppError;
use tasknote_core::errors::codes;

/// Reasons a request fails authentication.
///
/// Every variant is terminal: the protected operation is never reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Token is missing")]
    MissingToken,

    #[error("Malformed token, expected 'Bearer <token>'")]
    Malformed,

    #[error("Token has expired")]
    Expired,

    #[error("Invalid token")]
    Invalid,
}

impl AuthError {
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::MissingToken => codes::MISSING_TOKEN,
            AuthError::Malformed => codes::MALFORMED_TOKEN,
            AuthError::Expired => codes::TOKEN_EXPIRED,
            AuthError::Invalid => codes::INVALID_TOKEN,
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        AppError::new(StatusCode::FORBIDDEN, err.code(), err)
    }
}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match err.kind() {
            ErrorKind::InvalidToken
            | ErrorKind::Base64(_)
            | ErrorKind::Json(_)
            | ErrorKind::Utf8(_) => AuthError::Malformed,
            ErrorKind::ExpiredSignature => AuthError::Expired,
            _ => AuthError::Invalid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_variant_maps_to_forbidden() {
        for err in [
            AuthError::MissingToken,
            AuthError::Malformed,
            AuthError::Expired,
            AuthError::Invalid,
        ] {
            let app_error = AppError::from(err);
            assert_eq!(app_error.status, StatusCode::FORBIDDEN);
            assert_eq!(app_error.code, err.code());
        }
    }

    #[test]
    fn test_jsonwebtoken_kinds() {
        use jsonwebtoken::errors::{Error, ErrorKind};

        assert_eq!(AuthError::from(Error::from(ErrorKind::InvalidToken)), AuthError::Malformed);
        assert_eq!(AuthError::from(Error::from(ErrorKind::InvalidSignature)), AuthError::Invalid);
        assert_eq!(AuthError::from(Error::from(ErrorKind::ExpiredSignature)), AuthError::Expired);
        assert_eq!(AuthError::from(Error::from(ErrorKind::InvalidAlgorithm)), AuthError::Invalid);
    }
}
