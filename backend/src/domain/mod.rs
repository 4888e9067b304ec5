//! Domain primitives, aggregates, and services.
//!
//! Purpose: Define strongly typed domain entities used by the HTTP and
//! persistence layers, plus the services that implement the driving ports.
//! Keep types immutable and document invariants in each type's Rustdoc.
//!
//! Public surface:
//! - Error (alias to `error::DomainError`): error payload carried to adapters.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - User, Username, PasswordHash: account identity.
//! - Employee, EmployeeFields, EmployeeInput: roster entries.
//! - Notification: one-shot user-facing messages.
//! - PasswordAuthService, RosterService: driving port implementations.

pub mod auth;
mod auth_service;
pub mod employee;
pub mod error;
pub mod notification;
pub mod ports;
mod roster_service;
pub mod trace_id;
pub mod user;

pub use self::auth::{Credentials, CredentialsValidationError};
pub use self::auth_service::PasswordAuthService;
pub use self::employee::{
    EMPLOYEE_TEXT_MAX, Employee, EmployeeField, EmployeeFields, EmployeeId, EmployeeInput,
    EmployeeValidationError,
};
pub use self::error::{DomainError as Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::notification::{Notification, NotificationLevel};
pub use self::roster_service::RosterService;
pub use self::trace_id::TraceId;
pub use self::user::{PasswordHash, USERNAME_MAX, User, UserId, UserValidationError, Username};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use roster::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
