//! Request guards.
//!
//! # Authentication Flow
//!
//! 1. Client sends request with `Authorization: Bearer <token>` header
//! 2. [`auth::require_auth`], layered on every protected router, verifies the
//!    token before any body extraction and stores the identity
//! 3. Handlers take [`auth::AuthUser`] to receive that identity
//!
//! A rejected request never reaches its handler.
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::AuthUser;
//!
//! async fn get_profile(AuthUser(user_id): AuthUser) -> impl IntoResponse {
//!     // user_id comes from a verified token, never from the request body
//! }
//! ```

pub mod auth;
