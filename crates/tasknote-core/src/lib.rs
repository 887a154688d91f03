//! # Tasknote Core
//!
//! Core types, errors, and utilities for the Tasknote API.
//!
//! This crate provides foundational types used throughout the application:
//!
//! - [`errors`]: Application error type with stable error codes and HTTP response conversion
//! - [`ids`]: The numeric principal identity
//! - [`password`]: Credential hashing and comparison
//!
//! # Example
//!
//! ```ignore
//! use tasknote_core::errors::AppError;
//! use tasknote_core::password::{hash_password, verify_password};
//!
//! let error = AppError::not_found(anyhow::anyhow!("Task not found"));
//!
//! let digest = hash_password("secure_password");
//! assert!(verify_password("secure_password", &digest));
//! ```

pub mod errors;
pub mod ids;
pub mod password;

// Re-export commonly used types at crate root
pub use errors::{AppError, ErrorResponse};
pub use ids::UserId;
pub use password::{hash_password, verify_password};
