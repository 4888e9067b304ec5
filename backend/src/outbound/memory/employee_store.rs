//! `EmployeeStore` held in a mutex-guarded ordered map.

use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::domain::ports::{EmployeeStore, EmployeeStoreError};
use crate::domain::{Employee, EmployeeFields, EmployeeId};

#[derive(Debug, Default)]
struct State {
    rows: BTreeMap<EmployeeId, EmployeeFields>,
    next_id: i32,
}

/// In-memory implementation of the `EmployeeStore` port.
///
/// Rows are keyed by id, so listing is naturally ordered.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeStore {
    state: Mutex<State>,
}

impl InMemoryEmployeeStore {
    /// Number of stored employees.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .rows
            .len()
    }

    /// True when the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn with_state<T>(
        &self,
        f: impl FnOnce(&mut State) -> Result<T, EmployeeStoreError>,
    ) -> Result<T, EmployeeStoreError> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| EmployeeStoreError::query("employee store state poisoned"))?;
        f(&mut state)
    }
}

#[async_trait]
impl EmployeeStore for InMemoryEmployeeStore {
    async fn list(&self) -> Result<Vec<Employee>, EmployeeStoreError> {
        self.with_state(|state| {
            Ok(state
                .rows
                .iter()
                .map(|(id, fields)| Employee::new(*id, fields.clone()))
                .collect())
        })
    }

    async fn insert(&self, fields: &EmployeeFields) -> Result<Employee, EmployeeStoreError> {
        self.with_state(|state| {
            state.next_id = state
                .next_id
                .checked_add(1)
                .ok_or_else(|| EmployeeStoreError::query("employee id space exhausted"))?;
            let id = EmployeeId::new(state.next_id);
            state.rows.insert(id, fields.clone());
            Ok(Employee::new(id, fields.clone()))
        })
    }

    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, EmployeeStoreError> {
        self.with_state(|state| {
            Ok(state
                .rows
                .get(&id)
                .map(|fields| Employee::new(id, fields.clone())))
        })
    }

    async fn replace(
        &self,
        id: EmployeeId,
        fields: &EmployeeFields,
    ) -> Result<Option<Employee>, EmployeeStoreError> {
        self.with_state(|state| {
            Ok(state.rows.get_mut(&id).map(|slot| {
                slot.clone_from(fields);
                Employee::new(id, fields.clone())
            }))
        })
    }

    async fn delete(&self, id: EmployeeId) -> Result<bool, EmployeeStoreError> {
        self.with_state(|state| Ok(state.rows.remove(&id).is_some()))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    fn fields(name: &str) -> EmployeeFields {
        EmployeeFields::for_insert(name, "30", "Eng").expect("valid fields")
    }

    #[rstest]
    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = InMemoryEmployeeStore::default();
        let first = store.insert(&fields("Ann")).await.expect("insert");
        assert!(store.delete(first.id()).await.expect("delete"));

        let second = store.insert(&fields("Bo")).await.expect("insert");

        assert_eq!(second.id(), EmployeeId::new(2));
        assert_eq!(store.len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn replace_only_touches_existing_rows() {
        let store = InMemoryEmployeeStore::default();
        let ann = store.insert(&fields("Ann")).await.expect("insert");

        let replaced = store
            .replace(ann.id(), &fields("Anne"))
            .await
            .expect("replace");
        let missing = store
            .replace(EmployeeId::new(42), &fields("Ghost"))
            .await
            .expect("replace");

        assert_eq!(replaced.map(|e| e.name().to_owned()), Some("Anne".to_owned()));
        assert!(missing.is_none());
        assert_eq!(store.len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn exhausted_id_space_is_a_query_error() {
        let store = InMemoryEmployeeStore {
            state: Mutex::new(State {
                rows: BTreeMap::new(),
                next_id: i32::MAX,
            }),
        };

        let err = store
            .insert(&fields("Ann"))
            .await
            .expect_err("no identifiers left");

        assert_eq!(err, EmployeeStoreError::query("employee id space exhausted"));
        assert!(store.is_empty());
    }
}
