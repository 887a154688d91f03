//! The claim set embedded in an access token.

use serde::{Deserialize, Serialize};

/// JWT claims for access tokens.
///
/// `sub` is optional on the wire so that a correctly signed token without a
/// subject decodes and can be rejected as invalid rather than malformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID (subject claim), decimal string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    /// Token issued-at timestamp (Unix timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: i64,
}
