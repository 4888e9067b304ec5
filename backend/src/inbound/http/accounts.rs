//! Account handlers: registration, login, and logout.
//!
//! ```text
//! POST /register username=alice&password=secret
//! POST /login    username=alice&password=secret
//! GET  /logout
//! ```
//!
//! Failed logins and registrations re-render their form with a notification
//! instead of redirecting, so the response body tells the user what happened.

use actix_web::{HttpResponse, get, post, web};
use serde::Deserialize;
use tracing::debug;

use crate::domain::{Credentials, Error, ErrorCode, Notification};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::require_user;
use crate::inbound::http::error::LOGIN_PATH;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{html, see_other};

/// Form body for `POST /login` and `POST /register`.
///
/// Missing fields deserialize as empty strings so shape problems surface as
/// credential validation failures rather than extractor errors.
#[derive(Deserialize, Default)]
#[serde(default)]
pub struct CredentialsForm {
    /// Submitted login name.
    pub username: String,
    /// Submitted plaintext password.
    pub password: String,
}

impl TryFrom<&CredentialsForm> for Credentials {
    type Error = crate::domain::CredentialsValidationError;

    fn try_from(form: &CredentialsForm) -> Result<Self, Self::Error> {
        Self::try_from_parts(&form.username, &form.password)
    }
}

/// Render the login form with any queued notifications.
#[get("/login")]
pub async fn login_page(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    let notifications = session.take_notifications();
    Ok(html(state.pages.login(&notifications)))
}

/// Check credentials and bind the session to the account.
///
/// Malformed input, unknown usernames, and wrong passwords all produce the
/// same re-rendered form.
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<CredentialsForm>,
) -> ApiResult<HttpResponse> {
    let outcome = match Credentials::try_from(&*form) {
        Ok(credentials) => state.auth.authenticate(&credentials).await,
        Err(err) => {
            debug!(error = %err, "rejecting malformed login form");
            Err(Error::unauthorized("invalid credentials"))
        }
    };
    match outcome {
        Ok(user_id) => {
            session.persist_user(user_id)?;
            Ok(see_other("/"))
        }
        Err(err) if err.code() == ErrorCode::Unauthorized => {
            let mut notifications = session.take_notifications();
            notifications.push(Notification::invalid_credentials());
            Ok(html(state.pages.login(&notifications)))
        }
        Err(err) => Err(err),
    }
}

/// Render the registration form.
#[get("/register")]
pub async fn register_page(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    let notifications = session.take_notifications();
    Ok(html(state.pages.register(&notifications)))
}

/// Create an account and send the user to the login page.
#[post("/register")]
pub async fn register(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<CredentialsForm>,
) -> ApiResult<HttpResponse> {
    let outcome = match Credentials::try_from(&*form) {
        Ok(credentials) => state.auth.register(&credentials).await,
        Err(err) => Err(Error::invalid_request(err.to_string())),
    };
    match outcome {
        Ok(_) => {
            session.push_notification(Notification::registered())?;
            Ok(see_other(LOGIN_PATH))
        }
        Err(err) if matches!(err.code(), ErrorCode::Conflict | ErrorCode::InvalidRequest) => {
            debug!(error = %err, "registration rejected");
            Ok(html(state.pages.register(&[Notification::registration_failed()])))
        }
        Err(err) => Err(err),
    }
}

/// End the session.
#[get("/logout")]
pub async fn logout(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    let user = require_user(&session, &state).await?;
    session.purge();
    debug!(user_id = %user.id(), "session ended");
    Ok(see_other(LOGIN_PATH))
}
