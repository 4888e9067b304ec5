//! HTTP inbound adapter serving the roster's HTML pages.
//!
//! ```text
//! GET  /                 employee list (login required)
//! GET  /login            login form
//! POST /login            authenticate and start a session
//! GET  /register         registration form
//! POST /register         create an account
//! GET  /logout           end the session
//! POST /add              add an employee
//! GET  /delete/{id}      delete an employee
//! GET  /update/{id}      edit form
//! POST /update/{id}      overwrite an employee
//! ```

pub mod accounts;
pub mod auth;
pub mod employees;
pub mod error;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(any(test, feature = "test-support"))]
pub mod test_utils;
pub mod views;

use actix_web::http::header::{self, ContentType};
use actix_web::{HttpResponse, web};

use crate::domain::Error;

pub use error::ApiResult;

/// Register every roster route plus extractor error handlers.
///
/// Unknown paths and malformed `{id}` segments render the not-found page;
/// unreadable form bodies become a bad request.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PathConfig::default().error_handler(|err, _req| {
        Error::not_found(format!("no such page: {err}")).into()
    }))
    .app_data(web::FormConfig::default().error_handler(|err, _req| {
        Error::invalid_request(format!("unreadable form: {err}")).into()
    }))
    .service(employees::index)
    .service(accounts::login_page)
    .service(accounts::login)
    .service(accounts::register_page)
    .service(accounts::register)
    .service(accounts::logout)
    .service(employees::add)
    .service(employees::delete)
    .service(employees::edit_page)
    .service(employees::update)
    .default_service(web::to(|| async {
        ApiResult::<HttpResponse>::Err(Error::not_found("no such page"))
    }));
}

/// `200 OK` with an HTML body.
pub(crate) fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body)
}

/// `303 See Other` so browsers follow with a GET.
pub(crate) fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}
