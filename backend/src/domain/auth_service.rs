//! Password-based authentication service.
//!
//! Implements the [`AuthService`] driving port on top of a credential store
//! and a password hasher. Hashing runs on tokio's blocking pool so request
//! workers stay responsive.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info, warn};
use zeroize::Zeroizing;

use crate::domain::ports::{
    AuthService, CredentialStore, CredentialStoreError, PasswordHasher, PasswordHasherError,
};
use crate::domain::{Credentials, Error, PasswordHash, TraceId, User, UserId};

const INVALID_CREDENTIALS: &str = "invalid credentials";

/// [`AuthService`] backed by salted password hashes.
#[derive(Clone)]
pub struct PasswordAuthService {
    store: Arc<dyn CredentialStore>,
    hasher: Arc<dyn PasswordHasher>,
}

impl PasswordAuthService {
    /// Create a service over the given store and hasher.
    #[must_use]
    pub const fn new(store: Arc<dyn CredentialStore>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { store, hasher }
    }

    async fn hash(&self, plaintext: &str) -> Result<PasswordHash, Error> {
        let hasher = Arc::clone(&self.hasher);
        let secret = Zeroizing::new(plaintext.to_owned());
        TraceId::in_blocking(move || hasher.hash(secret.as_str()))
            .await
            .map_err(|err| Error::internal(format!("password hashing task failed: {err}")))?
            .map_err(map_hasher_error)
    }

    async fn verify(&self, plaintext: &str, hash: PasswordHash) -> Result<bool, PasswordHasherError> {
        let hasher = Arc::clone(&self.hasher);
        let secret = Zeroizing::new(plaintext.to_owned());
        TraceId::in_blocking(move || hasher.verify(secret.as_str(), &hash))
            .await
            .map_err(|err| PasswordHasherError::hash(format!("verification task failed: {err}")))?
    }
}

pub(crate) fn map_credential_store_error(error: CredentialStoreError) -> Error {
    match error {
        CredentialStoreError::Conflict { username } => {
            Error::conflict(format!("username {username} is already registered"))
        }
        CredentialStoreError::Connection { message } => {
            warn!(%message, "credential store unavailable");
            Error::service_unavailable(message)
        }
        CredentialStoreError::Query { message } => {
            error!(%message, "credential store query failed");
            Error::internal(message)
        }
    }
}

fn map_hasher_error(error: PasswordHasherError) -> Error {
    error!(error = %error, "password hasher failed");
    Error::internal(error.to_string())
}

#[async_trait]
impl AuthService for PasswordAuthService {
    async fn register(&self, credentials: &Credentials) -> Result<User, Error> {
        let hash = self.hash(credentials.password()).await?;
        let user = self
            .store
            .create(credentials.username(), &hash)
            .await
            .map_err(map_credential_store_error)?;
        info!(user_id = %user.id(), "user registered");
        Ok(user)
    }

    async fn authenticate(&self, credentials: &Credentials) -> Result<UserId, Error> {
        let found = self
            .store
            .find_by_username(credentials.username())
            .await
            .map_err(map_credential_store_error)?;

        let Some(user) = found else {
            // Spend a hash on unknown usernames so both rejections cost the same.
            if let Err(err) = self.hash(credentials.password()).await {
                warn!(error = %err, "decoy hash failed");
            }
            debug!("login rejected");
            return Err(Error::unauthorized(INVALID_CREDENTIALS));
        };

        match self
            .verify(credentials.password(), user.password_hash().clone())
            .await
        {
            Ok(true) => {
                info!(user_id = %user.id(), "user authenticated");
                Ok(user.id())
            }
            Ok(false) => {
                debug!("login rejected");
                Err(Error::unauthorized(INVALID_CREDENTIALS))
            }
            Err(err) => {
                error!(user_id = %user.id(), error = %err, "stored password hash unusable");
                Err(Error::unauthorized(INVALID_CREDENTIALS))
            }
        }
    }

    async fn find_user(&self, id: UserId) -> Result<Option<User>, Error> {
        self.store
            .find_by_id(id)
            .await
            .map_err(map_credential_store_error)
    }
}
