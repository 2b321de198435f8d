//! Common repository traits
//!
//! This module defines the data-access interface shared by every account
//! store, one store instance per account kind.

use crate::entities::{Account, AccountKind};
use std::future::Future;
use thiserror::Error;

/// Errors reported by an account store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,

    /// Unique constraint on email (or id) violated
    #[error("record already exists")]
    Conflict,

    #[error("email or password do not match")]
    InvalidCredentials,

    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("store failure: {0}")]
    Backend(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::NotFound,

            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => Self::Conflict,

            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                Self::Unavailable(err.to_string())
            }

            other => Self::Backend(other.to_string()),
        }
    }
}

/// Data-access collaborator for one account kind
///
/// Futures are `Send` so that the service can be driven from axum handlers
/// on the multi-threaded runtime.
pub trait AccountStore: Send + Sync + 'static {
    /// Kind of account held by this store
    fn kind(&self) -> AccountKind;

    /// Reads the account with the given email
    ///
    /// # Returns
    /// * `Ok(Account)` - Account found
    /// * `Err(StoreError::NotFound)` - No account with that email
    fn get_by_email(&self, email: &str)
    -> impl Future<Output = Result<Account, StoreError>> + Send;

    /// Reads every account, in whatever order the store keeps them
    fn get_list(&self) -> impl Future<Output = Result<Vec<Account>, StoreError>> + Send;

    /// Reads the account with the given primary key
    fn get_by_id(&self, id: &str) -> impl Future<Output = Result<Account, StoreError>> + Send;

    /// Inserts a new account
    ///
    /// # Returns
    /// * `Err(StoreError::Conflict)` - Email (or id) already taken
    fn create(&self, account: &Account) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Replaces every column of the account stored under `id`
    ///
    /// # Returns
    /// * `Err(StoreError::NotFound)` - No account with that id
    /// * `Err(StoreError::Conflict)` - The new email belongs to another account
    fn update(
        &self,
        id: &str,
        account: &Account,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Deletes the account with the given primary key
    ///
    /// # Returns
    /// * `Err(StoreError::NotFound)` - Nothing was deleted
    fn delete_by_id(&self, id: &str) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Finds the account whose email and password match
    ///
    /// Unknown email and wrong password are both reported as
    /// `StoreError::InvalidCredentials`.
    fn login(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<Account, StoreError>> + Send {
        async move {
            let account = match self.get_by_email(email).await {
                Ok(account) => account,
                Err(StoreError::NotFound) => return Err(StoreError::InvalidCredentials),
                Err(err) => return Err(err),
            };

            if account.verify_password(password) {
                Ok(account)
            } else {
                Err(StoreError::InvalidCredentials)
            }
        }
    }
}
