//! # Tasknote Config
//!
//! Configuration types for the Tasknote API.
//!
//! This crate provides configuration structures loaded from environment variables:
//!
//! - [`jwt`]: Token signing secret and validity window
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`registration`]: Replay window for account registration requests
//! - [`locale`]: Offset used to interpret timestamps sent without a zone
//! - [`server`]: Listen address
//!
//! All values are read once at start-up and never mutated afterwards.
//!
//! # Example
//!
//! ```ignore
//! use tasknote_config::{CorsConfig, JwtConfig, LocaleConfig, RegistrationConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! let registration_config = RegistrationConfig::from_env();
//! let locale_config = LocaleConfig::from_env();
//! ```

pub mod cors;
pub mod jwt;
pub mod locale;
pub mod registration;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use locale::LocaleConfig;
pub use registration::RegistrationConfig;
pub use server::ServerConfig;
