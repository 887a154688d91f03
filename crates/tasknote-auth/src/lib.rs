//! # Tasknote Auth
//!
//! Stateless bearer-token authentication for the Tasknote API.
//!
//! This crate provides:
//!
//! - [`claims`]: The signed claim set carried by every token
//! - [`jwt`]: [`TokenService`], which issues and verifies tokens
//! - [`guard`]: Extraction of the `Bearer` envelope and identity resolution
//! - [`error`]: The authentication failure taxonomy
//!
//! # Example
//!
//! ```ignore
//! use tasknote_auth::{TokenService, authenticate};
//! use tasknote_config::JwtConfig;
//!
//! let tokens = TokenService::new(&JwtConfig::from_env());
//!
//! let token = tokens.issue(user_id)?;
//! let resolved = tokens.verify(&token)?;
//! assert_eq!(resolved, user_id);
//! ```

pub mod claims;
pub mod error;
pub mod guard;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use error::AuthError;
pub use guard::{BEARER_PREFIX, authenticate, bearer_token};
pub use jwt::TokenService;
