//! Port abstraction for employee persistence and its errors.

use async_trait::async_trait;

use crate::domain::{Employee, EmployeeFields, EmployeeId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by employee store adapters.
    pub enum EmployeeStoreError {
        /// Store connection could not be established.
        Connection { message: String } => "employee store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "employee store query failed: {message}",
    }
}

/// Durable storage for roster entries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Return every employee ordered by identifier.
    async fn list(&self) -> Result<Vec<Employee>, EmployeeStoreError>;

    /// Insert a row and return it with its assigned identifier.
    async fn insert(&self, fields: &EmployeeFields) -> Result<Employee, EmployeeStoreError>;

    /// Fetch an employee by identifier.
    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, EmployeeStoreError>;

    /// Overwrite all fields of an existing row. Returns `None` when no row
    /// has the identifier.
    async fn replace(
        &self,
        id: EmployeeId,
        fields: &EmployeeFields,
    ) -> Result<Option<Employee>, EmployeeStoreError>;

    /// Remove a row. Returns `false` when no row had the identifier.
    async fn delete(&self, id: EmployeeId) -> Result<bool, EmployeeStoreError>;
}
