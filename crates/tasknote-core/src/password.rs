//! Credential hashing.
//!
//! Secrets are reduced to a 64-character lowercase hex SHA-256 digest before
//! they are stored or compared. The digest is deterministic, so the stored
//! value itself is the comparison key.

use sha2::{Digest, Sha256};

/// Length of a digest produced by [`hash_password`].
pub const DIGEST_LEN: usize = 64;

/// Hashes a secret into its hex-encoded SHA-256 digest.
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Returns `true` when `password` hashes to `digest`.
pub fn verify_password(password: &str, digest: &str) -> bool {
    hash_password(password) == digest
}
