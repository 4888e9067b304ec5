//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{AuthService, RosterCommand, RosterQuery};

use super::views::{HtmlPages, PageRenderer};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Registration, login, and session-to-user resolution.
    pub auth: Arc<dyn AuthService>,
    /// Roster writes.
    pub roster: Arc<dyn RosterCommand>,
    /// Roster reads.
    pub roster_query: Arc<dyn RosterQuery>,
    /// HTML templates.
    pub pages: Arc<dyn PageRenderer>,
}

impl HttpState {
    /// Bundle the driving ports with the default HTML renderer.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use roster::domain::{PasswordAuthService, RosterService};
    /// use roster::inbound::http::state::HttpState;
    /// use roster::outbound::crypto::{Argon2PasswordHasher, HashingCost};
    /// use roster::outbound::memory::{InMemoryCredentialStore, InMemoryEmployeeStore};
    ///
    /// let hasher = Argon2PasswordHasher::new(HashingCost::default()).expect("valid cost");
    /// let auth = PasswordAuthService::new(
    ///     Arc::new(InMemoryCredentialStore::default()),
    ///     Arc::new(hasher),
    /// );
    /// let roster = Arc::new(RosterService::new(Arc::new(InMemoryEmployeeStore::default())));
    /// let state = HttpState::new(Arc::new(auth), roster.clone(), roster);
    /// let _pages = state.pages.clone();
    /// ```
    #[must_use]
    pub fn new(
        auth: Arc<dyn AuthService>,
        roster: Arc<dyn RosterCommand>,
        roster_query: Arc<dyn RosterQuery>,
    ) -> Self {
        Self {
            auth,
            roster,
            roster_query,
            pages: Arc::new(HtmlPages),
        }
    }
}
