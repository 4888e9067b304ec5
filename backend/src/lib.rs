//! Employee roster web application.
//!
//! The crate follows a hexagonal layout: [`domain`] holds entities, ports,
//! and the services behind them; [`inbound`] adapts HTTP requests onto the
//! driving ports; [`outbound`] implements the driven ports against
//! PostgreSQL, process memory, and Argon2.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

pub use domain::TraceId;
pub use middleware::Trace;
