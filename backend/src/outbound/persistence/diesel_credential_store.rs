//! PostgreSQL-backed `CredentialStore` implementation using Diesel ORM.
//!
//! Username uniqueness is enforced by the `users_username_key` constraint;
//! the adapter turns the resulting unique violation into
//! [`CredentialStoreError::Conflict`] instead of checking first and racing.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{CredentialStore, CredentialStoreError};
use crate::domain::{PasswordHash, User, UserId, Username};

use super::diesel_error_mapping::{is_unique_violation, map_diesel_error, map_pool_error};
use super::models::{NewUserRow, UserRow};
use super::pool::DbPool;
use super::schema::users;

/// Diesel-backed implementation of the `CredentialStore` port.
#[derive(Clone)]
pub struct DieselCredentialStore {
    pool: DbPool,
}

impl DieselCredentialStore {
    /// Create a new store with the given connection pool.
    #[must_use]
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_error(error: &diesel::result::Error) -> CredentialStoreError {
    map_diesel_error(
        error,
        CredentialStoreError::query,
        CredentialStoreError::connection,
    )
}

fn row_to_user(row: UserRow) -> Result<User, CredentialStoreError> {
    let username = Username::new(&row.username)
        .map_err(|err| CredentialStoreError::query(format!("stored username invalid: {err}")))?;
    let password_hash = PasswordHash::new(row.password)
        .map_err(|err| CredentialStoreError::query(format!("stored hash invalid: {err}")))?;
    Ok(User::new(UserId::new(row.id), username, password_hash))
}

#[async_trait]
impl CredentialStore for DieselCredentialStore {
    async fn create(
        &self,
        username: &Username,
        password_hash: &PasswordHash,
    ) -> Result<User, CredentialStoreError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(&err, CredentialStoreError::connection))?;

        let row = NewUserRow {
            username: username.as_ref(),
            password: password_hash.as_ref(),
        };

        let inserted: UserRow = diesel::insert_into(users::table)
            .values(&row)
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    CredentialStoreError::conflict(username.as_ref())
                } else {
                    map_error(&err)
                }
            })?;

        row_to_user(inserted)
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, CredentialStoreError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(&err, CredentialStoreError::connection))?;

        let row: Option<UserRow> = users::table
            .filter(users::username.eq(username.as_ref()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_error(&err))?;

        row.map(row_to_user).transpose()
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, CredentialStoreError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(&err, CredentialStoreError::connection))?;

        let row: Option<UserRow> = users::table
            .find(id.get())
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_error(&err))?;

        row.map(row_to_user).transpose()
    }
}
