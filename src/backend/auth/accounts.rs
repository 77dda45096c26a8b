/**
 * Account Model and Store
 *
 * This module defines the Account record, the `AccountStore` contract, and
 * the in-memory implementation used by the server.
 *
 * # Consistency
 *
 * The in-memory store keeps every account in one map behind a
 * `tokio::sync::RwLock`. Registration re-checks uniqueness and inserts under a
 * single write guard, so concurrent registrations for one email cannot both
 * succeed. Password hashing happens before the guard is taken.
 *
 * # Disclosure
 *
 * `authenticate` distinguishes `NotFound` from `InvalidCredentials` for the
 * caller, but both paths perform one bcrypt verification so their timing
 * matches. The HTTP layer reports both as the same 401.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::backend::auth::credentials::{CredentialHasher, PasswordHash};
use crate::shared::StoreError;

/// A registered identity
#[derive(Debug, Clone)]
pub struct Account {
    /// Unique identifier, case-sensitive as received
    pub email: String,
    /// bcrypt hash of the password
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
}

/// Storage contract for accounts
///
/// Implementations must make the uniqueness check and the insert in `register`
/// a single atomic step.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Register `email` with a hash of `password`
    ///
    /// # Errors
    /// * `InvalidInput` - email or password is empty
    /// * `AlreadyExists` - email is already registered
    /// * `Credential` - hashing failed
    async fn register(&self, email: &str, password: &str) -> Result<(), StoreError>;

    /// Verify `password` for `email`, returning the email on success
    ///
    /// # Errors
    /// * `NotFound` - no account for email
    /// * `InvalidCredentials` - password does not match
    /// * `Credential` - verification failed
    async fn authenticate(&self, email: &str, password: &str) -> Result<String, StoreError>;

    /// Whether an account exists for `email`
    async fn contains(&self, email: &str) -> bool;

    /// Number of registered accounts
    async fn len(&self) -> usize;
}

/// Process-local account store
pub struct InMemoryAccountStore {
    accounts: RwLock<HashMap<String, Account>>,
    hasher: CredentialHasher,
    /// Verified against when the email is unknown
    dummy_hash: PasswordHash,
}

impl InMemoryAccountStore {
    /// Create an empty store
    ///
    /// Derives the dummy hash up front so the first unknown-email login costs
    /// the same single verification as every later one.
    pub async fn new(hasher: CredentialHasher) -> Result<Self, StoreError> {
        let dummy_hash = hasher.hash("echosignal-unknown-account").await?;
        Ok(Self {
            accounts: RwLock::new(HashMap::new()),
            hasher,
            dummy_hash,
        })
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn register(&self, email: &str, password: &str) -> Result<(), StoreError> {
        StoreError::require_non_empty("email", email)?;
        StoreError::require_non_empty("password", password)?;

        // Skip the hashing cost for emails we already know are taken
        if self.accounts.read().await.contains_key(email) {
            return Err(StoreError::AlreadyExists);
        }

        let password_hash = self.hasher.hash(password).await?;

        let mut accounts = self.accounts.write().await;
        match accounts.entry(email.to_string()) {
            Entry::Occupied(_) => Err(StoreError::AlreadyExists),
            Entry::Vacant(slot) => {
                slot.insert(Account {
                    email: email.to_string(),
                    password_hash,
                    created_at: Utc::now(),
                });
                Ok(())
            }
        }
    }

    async fn authenticate(&self, email: &str, password: &str) -> Result<String, StoreError> {
        let stored = self
            .accounts
            .read()
            .await
            .get(email)
            .map(|account| account.password_hash.clone());

        match stored {
            Some(hash) => {
                if self.hasher.verify(password, &hash).await? {
                    Ok(email.to_string())
                } else {
                    Err(StoreError::InvalidCredentials)
                }
            }
            None => {
                self.hasher.verify(password, &self.dummy_hash).await?;
                Err(StoreError::NotFound)
            }
        }
    }

    async fn contains(&self, email: &str) -> bool {
        self.accounts.read().await.contains_key(email)
    }

    async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }
}
