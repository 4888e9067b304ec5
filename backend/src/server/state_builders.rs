//! Builders wiring store adapters into the HTTP state.

use std::sync::Arc;

use actix_web::web;
use tracing::warn;

use roster::domain::ports::{CredentialStore, EmployeeStore};
use roster::domain::{PasswordAuthService, RosterService};
use roster::inbound::http::state::HttpState;
use roster::outbound::crypto::Argon2PasswordHasher;
use roster::outbound::memory::{InMemoryCredentialStore, InMemoryEmployeeStore};
use roster::outbound::persistence::{DbPool, DieselCredentialStore, DieselEmployeeStore};

use super::ServerConfig;

type Stores = (Arc<dyn CredentialStore>, Arc<dyn EmployeeStore>);

/// Store adapters backing the services.
fn build_stores(pool: Option<&DbPool>) -> Stores {
    pool.map_or_else(
        || -> Stores {
            warn!("no database configured; accounts and employees are kept in memory");
            (
                Arc::new(InMemoryCredentialStore::default()),
                Arc::new(InMemoryEmployeeStore::default()),
            )
        },
        |db| -> Stores {
            (
                Arc::new(DieselCredentialStore::new(db.clone())),
                Arc::new(DieselEmployeeStore::new(db.clone())),
            )
        },
    )
}

/// Build the shared handler state from configuration.
///
/// # Errors
/// Returns [`std::io::Error`] when the configured Argon2 cost is rejected.
pub(super) fn build_http_state(config: &ServerConfig) -> std::io::Result<web::Data<HttpState>> {
    let hasher = Argon2PasswordHasher::new(config.hashing_cost)
        .map_err(|err| std::io::Error::other(format!("invalid password hashing cost: {err}")))?;
    let (credentials, employees) = build_stores(config.db_pool.as_ref());
    let auth = PasswordAuthService::new(credentials, Arc::new(hasher));
    let roster = Arc::new(RosterService::new(employees));
    Ok(web::Data::new(HttpState::new(
        Arc::new(auth),
        roster.clone(),
        roster,
    )))
}
