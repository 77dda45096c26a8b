/**
 * Credential Hashing
 *
 * This module wraps bcrypt for deriving and verifying password hashes.
 *
 * bcrypt is CPU-bound by design, so both operations run on tokio's blocking
 * pool instead of the async worker threads. Callers must not hold a store lock
 * while awaiting them.
 *
 * bcrypt only reads the first 72 bytes of its input, NUL terminator included.
 * Longer passwords are refused at hashing time and never verify, so two long passwords sharing a
 * prefix cannot stand in for each other.
 */

use std::fmt;

use crate::shared::StoreError;

/// Longest password bcrypt hashes in full
pub const MAX_PASSWORD_BYTES: usize = 71;

/// One-way credential material derived from a password
///
/// Holds a bcrypt hash string (algorithm, cost, salt, and digest). The raw
/// password is never retained.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(<redacted>)")
    }
}

/// Hashes and verifies passwords at a fixed bcrypt cost
#[derive(Debug, Clone, Copy)]
pub struct CredentialHasher {
    cost: u32,
}

impl CredentialHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Derive a salted hash for `password`
    ///
    /// Passwords over [`MAX_PASSWORD_BYTES`] are rejected as `InvalidInput`.
    pub async fn hash(&self, password: &str) -> Result<PasswordHash, StoreError> {
        if password.len() > MAX_PASSWORD_BYTES {
            return Err(StoreError::invalid_input(
                "password",
                format!("must be at most {} bytes", MAX_PASSWORD_BYTES),
            ));
        }

        let password = password.to_owned();
        let cost = self.cost;
        let hashed = tokio::task::spawn_blocking(move || {
            bcrypt::non_truncating_hash(password, cost)
        })
        .await
        .map_err(|e| StoreError::credential(format!("hashing task failed: {}", e)))??;
        Ok(PasswordHash(hashed))
    }

    /// Check `password` against a stored hash
    ///
    /// bcrypt compares digests in constant time. A password too long to have
    /// been hashed never matches.
    pub async fn verify(&self, password: &str, hash: &PasswordHash) -> Result<bool, StoreError> {
        if password.len() > MAX_PASSWORD_BYTES {
            return Ok(false);
        }

        let password = password.to_owned();
        let hash = hash.0.clone();
        let valid = tokio::task::spawn_blocking(move || {
            bcrypt::non_truncating_verify(password, &hash)
        })
        .await
        .map_err(|e| StoreError::credential(format!("verification task failed: {}", e)))??;
        Ok(valid)
    }
}
