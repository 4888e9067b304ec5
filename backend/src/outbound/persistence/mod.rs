//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the credential and employee store ports,
//! backed by `diesel-async` connections drawn from a `bb8` pool.
//!
//! - **Thin adapters**: stores only translate between Diesel rows and domain
//!   types; validation lives in the domain.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leave this module.
//! - **Typed errors**: driver failures are mapped to port error enums with
//!   fixed, user-safe messages.
//!
//! # Example
//!
//! ```ignore
//! use roster::outbound::persistence::{DbPool, DieselEmployeeStore, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/roster")).await?;
//! let store = DieselEmployeeStore::new(pool);
//! ```

mod diesel_credential_store;
mod diesel_employee_store;
mod diesel_error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_credential_store::DieselCredentialStore;
pub use diesel_employee_store::DieselEmployeeStore;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DEFAULT_MAX_CONNECTIONS, DbPool, PoolConfig, PoolError};
