//! Driving port for registration and login use-cases.
//!
//! Inbound adapters call this port to create accounts, check credentials, and
//! resolve the user behind a session without importing persistence or
//! hashing infrastructure.

use async_trait::async_trait;

use crate::domain::{Credentials, Error, User, UserId};

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Hash the password and create an account.
    ///
    /// Fails with a `Conflict` error when the username is already taken.
    async fn register(&self, credentials: &Credentials) -> Result<User, Error>;

    /// Validate credentials and return the authenticated user id.
    ///
    /// Unknown usernames and wrong passwords both yield the same
    /// `Unauthorized` error.
    async fn authenticate(&self, credentials: &Credentials) -> Result<UserId, Error>;

    /// Resolve a session's user id to an account, if it still exists.
    async fn find_user(&self, id: UserId) -> Result<Option<User>, Error>;
}
