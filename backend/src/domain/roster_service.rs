//! Employee roster service.
//!
//! Validates form input, then delegates to the [`EmployeeStore`] driven port.
//! Updates and deletes look the row up first so unknown identifiers fail with
//! `NotFound` before anything is written.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{error, info, warn};

use crate::domain::ports::{EmployeeStore, EmployeeStoreError, RosterCommand, RosterQuery};
use crate::domain::{
    Employee, EmployeeFields, EmployeeId, EmployeeInput, EmployeeValidationError, Error,
};

/// Roster use-cases over an employee store.
#[derive(Clone)]
pub struct RosterService {
    store: Arc<dyn EmployeeStore>,
}

impl RosterService {
    /// Create a service over the given store.
    #[must_use]
    pub const fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }
}

fn map_store_error(error: EmployeeStoreError) -> Error {
    match error {
        EmployeeStoreError::Connection { message } => {
            warn!(%message, "employee store unavailable");
            Error::service_unavailable(message)
        }
        EmployeeStoreError::Query { message } => {
            error!(%message, "employee store query failed");
            Error::internal(message)
        }
    }
}

fn map_validation_error(error: EmployeeValidationError) -> Error {
    Error::invalid_request(error.to_string()).with_details(json!({
        "field": error.field().as_str(),
    }))
}

fn employee_not_found(id: EmployeeId) -> Error {
    Error::not_found(format!("employee {id} not found"))
}

#[async_trait]
impl RosterQuery for RosterService {
    async fn list_all(&self) -> Result<Vec<Employee>, Error> {
        self.store.list().await.map_err(map_store_error)
    }

    async fn get(&self, id: EmployeeId) -> Result<Employee, Error> {
        self.store
            .find_by_id(id)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| employee_not_found(id))
    }
}

#[async_trait]
impl RosterCommand for RosterService {
    async fn add(&self, input: &EmployeeInput) -> Result<Employee, Error> {
        let fields = EmployeeFields::for_insert(&input.name, &input.age, &input.department)
            .map_err(map_validation_error)?;
        let employee = self.store.insert(&fields).await.map_err(map_store_error)?;
        info!(employee_id = %employee.id(), "employee added");
        Ok(employee)
    }

    async fn update(&self, id: EmployeeId, input: &EmployeeInput) -> Result<Employee, Error> {
        self.get(id).await?;
        let fields = EmployeeFields::for_replace(&input.name, &input.age, &input.department)
            .map_err(map_validation_error)?;
        // The row may vanish between the lookup and the write.
        let employee = self
            .store
            .replace(id, &fields)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| employee_not_found(id))?;
        info!(employee_id = %id, "employee updated");
        Ok(employee)
    }

    async fn delete(&self, id: EmployeeId) -> Result<(), Error> {
        self.get(id).await?;
        if !self.store.delete(id).await.map_err(map_store_error)? {
            return Err(employee_not_found(id));
        }
        info!(employee_id = %id, "employee deleted");
        Ok(())
    }
}
