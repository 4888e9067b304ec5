//! PostgreSQL-backed `EmployeeStore` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{EmployeeStore, EmployeeStoreError};
use crate::domain::{Employee, EmployeeFields, EmployeeId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{EmployeeChanges, EmployeeRow};
use super::pool::DbPool;
use super::schema::employees;

/// Diesel-backed implementation of the `EmployeeStore` port.
#[derive(Clone)]
pub struct DieselEmployeeStore {
    pool: DbPool,
}

impl DieselEmployeeStore {
    /// Create a new store with the given connection pool.
    #[must_use]
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_error(error: &diesel::result::Error) -> EmployeeStoreError {
    map_diesel_error(error, EmployeeStoreError::query, EmployeeStoreError::connection)
}

fn row_to_employee(row: EmployeeRow) -> Employee {
    Employee::new(
        EmployeeId::new(row.id),
        EmployeeFields::from_stored(row.name, row.age, row.department),
    )
}

fn changes(fields: &EmployeeFields) -> EmployeeChanges<'_> {
    EmployeeChanges {
        name: fields.name(),
        age: fields.age(),
        department: fields.department(),
    }
}

#[async_trait]
impl EmployeeStore for DieselEmployeeStore {
    async fn list(&self) -> Result<Vec<Employee>, EmployeeStoreError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(&err, EmployeeStoreError::connection))?;

        let rows: Vec<EmployeeRow> = employees::table
            .order(employees::id.asc())
            .select(EmployeeRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_error(&err))?;

        Ok(rows.into_iter().map(row_to_employee).collect())
    }

    async fn insert(&self, fields: &EmployeeFields) -> Result<Employee, EmployeeStoreError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(&err, EmployeeStoreError::connection))?;

        let row: EmployeeRow = diesel::insert_into(employees::table)
            .values(&changes(fields))
            .returning(EmployeeRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| map_error(&err))?;

        Ok(row_to_employee(row))
    }

    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, EmployeeStoreError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(&err, EmployeeStoreError::connection))?;

        let row: Option<EmployeeRow> = employees::table
            .find(id.get())
            .select(EmployeeRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_error(&err))?;

        Ok(row.map(row_to_employee))
    }

    async fn replace(
        &self,
        id: EmployeeId,
        fields: &EmployeeFields,
    ) -> Result<Option<Employee>, EmployeeStoreError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(&err, EmployeeStoreError::connection))?;

        let row: Option<EmployeeRow> = diesel::update(employees::table.find(id.get()))
            .set(&changes(fields))
            .returning(EmployeeRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(|err| map_error(&err))?;

        Ok(row.map(row_to_employee))
    }

    async fn delete(&self, id: EmployeeId) -> Result<bool, EmployeeStoreError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(&err, EmployeeStoreError::connection))?;

        let removed = diesel::delete(employees::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(|err| map_error(&err))?;

        Ok(removed > 0)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn row_to_employee_copies_every_column() {
        let employee = row_to_employee(EmployeeRow {
            id: 7,
            name: "Jane".to_owned(),
            age: 30,
            department: "Eng".to_owned(),
        });

        assert_eq!(employee.id(), EmployeeId::new(7));
        assert_eq!(employee.name(), "Jane");
        assert_eq!(employee.age(), 30);
        assert_eq!(employee.department(), "Eng");
    }

    #[rstest]
    fn changes_borrow_validated_fields() {
        let fields = EmployeeFields::for_replace("", "41", "Ops").expect("valid");
        let payload = changes(&fields);

        assert_eq!(payload.name, "");
        assert_eq!(payload.age, 41);
        assert_eq!(payload.department, "Ops");
    }

    #[rstest]
    fn not_found_maps_to_query_error() {
        let err = map_error(&diesel::result::Error::NotFound);
        assert!(matches!(err, EmployeeStoreError::Query { .. }));
    }
}
