//! Authentication guard used by HTTP handlers.
//!
//! Keep the HTTP modules focused on request/response mapping by concentrating
//! session-to-user resolution here. Protected handlers call [`require_user`]
//! first and propagate its error, which the error mapping turns into a
//! redirect to the login page.

use tracing::debug;

use crate::domain::{Error, User};

use super::ApiResult;
use super::session::SessionContext;
use super::state::HttpState;

/// The account bound to this session, if it still exists.
///
/// A session pointing at a deleted account is purged so later requests skip
/// the lookup.
pub async fn current_user(session: &SessionContext, state: &HttpState) -> ApiResult<Option<User>> {
    let Some(user_id) = session.user_id() else {
        return Ok(None);
    };
    let user = state.auth.find_user(user_id).await?;
    if user.is_none() {
        debug!(%user_id, "session refers to a missing account");
        session.purge();
    }
    Ok(user)
}

/// The authenticated user, or an `Unauthorized` error.
pub async fn require_user(session: &SessionContext, state: &HttpState) -> ApiResult<User> {
    current_user(session, state)
        .await?
        .ok_or_else(|| Error::unauthorized("login required"))
}
