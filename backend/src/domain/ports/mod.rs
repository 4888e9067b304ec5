//! Domain ports for the hexagonal boundary.
//!
//! Driving ports (`AuthService`, `RosterCommand`, `RosterQuery`) are called by
//! inbound adapters. Driven ports (`CredentialStore`, `EmployeeStore`,
//! `PasswordHasher`) are implemented by outbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod auth_service;
mod credential_store;
mod employee_store;
mod password_hasher;
mod roster;

#[cfg(test)]
pub use auth_service::MockAuthService;
pub use auth_service::AuthService;
#[cfg(test)]
pub use credential_store::MockCredentialStore;
pub use credential_store::{CredentialStore, CredentialStoreError};
#[cfg(test)]
pub use employee_store::MockEmployeeStore;
pub use employee_store::{EmployeeStore, EmployeeStoreError};
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
pub use password_hasher::{PasswordHasher, PasswordHasherError};
#[cfg(test)]
pub use roster::{MockRosterCommand, MockRosterQuery};
pub use roster::{RosterCommand, RosterQuery};
