//! Process-local store adapters.
//!
//! Used when no database URL is configured and by the HTTP integration
//! tests. Contents vanish when the process exits.

mod credential_store;
mod employee_store;

pub use credential_store::InMemoryCredentialStore;
pub use employee_store::InMemoryEmployeeStore;
