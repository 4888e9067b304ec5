//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! Provides a thin wrapper around Actix sessions so handlers only deal with
//! domain-friendly operations: binding a user id, queueing one-shot
//! notifications, and tearing the session down.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use crate::domain::{Error, Notification, UserId};

pub(crate) const USER_ID_KEY: &str = "user_id";
pub(crate) const NOTIFICATIONS_KEY: &str = "notifications";

/// Newtype wrapper that exposes higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    #[must_use]
    pub const fn new(session: Session) -> Self {
        Self(session)
    }

    /// Bind the session to a freshly authenticated user.
    ///
    /// The session key is renewed first so an identifier planted before login
    /// cannot be reused afterwards.
    pub fn persist_user(&self, user_id: UserId) -> Result<(), Error> {
        self.0.renew();
        self.0
            .insert(USER_ID_KEY, user_id.get())
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// The user id stored in the session, if any.
    ///
    /// Values that do not decode as an id are treated as an anonymous
    /// session rather than an error.
    #[must_use]
    pub fn user_id(&self) -> Option<UserId> {
        self.0
            .get::<i32>(USER_ID_KEY)
            .unwrap_or_else(|error| {
                warn!(%error, "invalid user id in session cookie");
                None
            })
            .map(UserId::new)
    }

    /// Drop every value and expire the cookie.
    pub fn purge(&self) {
        self.0.purge();
    }

    /// Queue a notification for the next rendered page.
    pub fn push_notification(&self, notification: Notification) -> Result<(), Error> {
        let mut queued = self.peek_notifications();
        queued.push(notification);
        self.0
            .insert(NOTIFICATIONS_KEY, queued)
            .map_err(|error| Error::internal(format!("failed to queue notification: {error}")))
    }

    /// Remove and return all queued notifications.
    #[must_use]
    pub fn take_notifications(&self) -> Vec<Notification> {
        match self.0.remove_as::<Vec<Notification>>(NOTIFICATIONS_KEY) {
            Some(Ok(queued)) => queued,
            Some(Err(raw)) => {
                warn!(len = raw.len(), "discarding undecodable notifications");
                Vec::new()
            }
            None => Vec::new(),
        }
    }

    fn peek_notifications(&self) -> Vec<Notification> {
        self.0
            .get::<Vec<Notification>>(NOTIFICATIONS_KEY)
            .ok()
            .flatten()
            .unwrap_or_default()
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(Self::new) })
    }
}
