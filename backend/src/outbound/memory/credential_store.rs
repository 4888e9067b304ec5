//! `CredentialStore` held in a mutex-guarded vector.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::domain::ports::{CredentialStore, CredentialStoreError};
use crate::domain::{PasswordHash, User, UserId, Username};

#[derive(Debug, Default)]
struct State {
    users: Vec<User>,
    next_id: i32,
}

/// In-memory implementation of the `CredentialStore` port.
///
/// Identifiers start at 1 and are never reused.
#[derive(Debug, Default)]
pub struct InMemoryCredentialStore {
    state: Mutex<State>,
}

impl InMemoryCredentialStore {
    /// Number of registered accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .users
            .len()
    }

    /// True when nobody has registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn with_state<T>(
        &self,
        f: impl FnOnce(&mut State) -> Result<T, CredentialStoreError>,
    ) -> Result<T, CredentialStoreError> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| CredentialStoreError::query("credential store state poisoned"))?;
        f(&mut state)
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn create(
        &self,
        username: &Username,
        password_hash: &PasswordHash,
    ) -> Result<User, CredentialStoreError> {
        self.with_state(|state| {
            if state.users.iter().any(|user| user.username() == username) {
                return Err(CredentialStoreError::conflict(username.as_ref()));
            }
            state.next_id = state
                .next_id
                .checked_add(1)
                .ok_or_else(|| CredentialStoreError::query("user id space exhausted"))?;
            let user = User::new(
                UserId::new(state.next_id),
                username.clone(),
                password_hash.clone(),
            );
            state.users.push(user.clone());
            Ok(user)
        })
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, CredentialStoreError> {
        self.with_state(|state| {
            Ok(state
                .users
                .iter()
                .find(|user| user.username() == username)
                .cloned())
        })
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, CredentialStoreError> {
        self.with_state(|state| Ok(state.users.iter().find(|user| user.id() == id).cloned()))
    }
}
