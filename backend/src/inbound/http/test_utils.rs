//! Test helpers for inbound HTTP components.

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::ServiceResponse;

use std::sync::Arc;

use crate::domain::{PasswordAuthService, RosterService};
use crate::outbound::crypto::{Argon2PasswordHasher, HashingCost};
use crate::outbound::memory::{InMemoryCredentialStore, InMemoryEmployeeStore};

use super::session_config::SESSION_COOKIE;
use super::state::HttpState;

/// Build a session middleware configured for tests.
///
/// - Generates a fresh signing/encryption key per invocation.
/// - Sets the cookie name to `session` and disables the `Secure` flag for
///   local HTTP tests.
#[must_use]
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name(SESSION_COOKIE.to_owned())
        .cookie_secure(false)
        .build()
}

/// Extract the session cookie set by a response.
///
/// # Panics
///
/// Panics when the response did not set the cookie.
#[expect(clippy::expect_used, reason = "test helper fails loudly on a missing cookie")]
#[must_use]
pub fn session_cookie<B>(response: &ServiceResponse<B>) -> Cookie<'static> {
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == SESSION_COOKIE)
        .map(Cookie::into_owned)
        .expect("session cookie set")
}

/// Handler state backed by in-memory stores and the cheapest Argon2 cost.
///
/// # Panics
///
/// Panics if Argon2 rejects its own minimum parameters.
#[expect(clippy::expect_used, reason = "minimum Argon2 cost is always valid")]
#[must_use]
pub fn memory_state() -> HttpState {
    let hasher = Argon2PasswordHasher::new(HashingCost::MINIMUM).expect("minimum cost accepted");
    let auth = PasswordAuthService::new(
        Arc::new(InMemoryCredentialStore::default()),
        Arc::new(hasher),
    );
    let roster = Arc::new(RosterService::new(Arc::new(InMemoryEmployeeStore::default())));
    HttpState::new(Arc::new(auth), roster.clone(), roster)
}
