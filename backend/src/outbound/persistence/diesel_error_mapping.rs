//! Shared Diesel error mapping for the roster stores.
//!
//! Each store passes its own port-error constructors so the classification
//! stays in one place: closed connections and pool failures become connection
//! errors, everything else a query error.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;

/// Map a pool failure through the store's connection constructor.
pub(super) fn map_pool_error<E>(error: &PoolError, connection: impl FnOnce(String) -> E) -> E {
    debug!(error = %error, "database pool failure");
    connection(error.message().to_owned())
}

/// Map a Diesel failure into a store's query or connection error.
///
/// Detailed driver messages are logged at debug level and replaced with fixed
/// text so they never reach users.
pub(super) fn map_diesel_error<E>(
    error: &DieselError,
    query: impl FnOnce(&'static str) -> E,
    connection: impl FnOnce(&'static str) -> E,
) -> E {
    match error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => query("record not found"),
        DieselError::QueryBuilderError(_) => query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            connection("database connection error")
        }
        _ => query("database error"),
    }
}

/// True when the failure is a unique-constraint violation.
pub(super) fn is_unique_violation(error: &DieselError) -> bool {
    matches!(
        error,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)
    )
}
