//! Driving ports for roster reads and writes.
//!
//! Callers must have passed the authentication guard; these ports do not
//! check ownership because any authenticated user may edit any employee.

use async_trait::async_trait;

use crate::domain::{Employee, EmployeeId, EmployeeInput, Error};

/// Read-side roster use-cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RosterQuery: Send + Sync {
    /// Every employee, freshly queried, ordered by identifier.
    async fn list_all(&self) -> Result<Vec<Employee>, Error>;

    /// A single employee, or a `NotFound` error.
    async fn get(&self, id: EmployeeId) -> Result<Employee, Error>;
}

/// Write-side roster use-cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RosterCommand: Send + Sync {
    /// Validate and insert a new employee.
    ///
    /// Any missing or malformed field yields `InvalidRequest` and nothing is
    /// written.
    async fn add(&self, input: &EmployeeInput) -> Result<Employee, Error>;

    /// Overwrite all fields of an existing employee.
    ///
    /// Fails with `NotFound` (mutating nothing) when the id is unknown and
    /// with `InvalidRequest` when the age is unusable.
    async fn update(&self, id: EmployeeId, input: &EmployeeInput) -> Result<Employee, Error>;

    /// Remove an existing employee, or fail with `NotFound`.
    async fn delete(&self, id: EmployeeId) -> Result<(), Error>;
}
