//! Internal Diesel row structs.
//!
//! These types are implementation details of the persistence layer and never
//! cross into the domain.

use diesel::prelude::*;

use super::schema::{employees, users};

/// Row read from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub username: String,
    pub password: String,
}

/// Insertable account.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Row read from the employees table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = employees)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct EmployeeRow {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub department: String,
}

/// Insert and full-replacement payload for employees.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = employees)]
pub(crate) struct EmployeeChanges<'a> {
    pub name: &'a str,
    pub age: i32,
    pub department: &'a str,
}
