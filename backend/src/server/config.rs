//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use roster::inbound::http::session_config::SessionSettings;
use roster::outbound::crypto::HashingCost;
use roster::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) session: SessionSettings,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) hashing_cost: HashingCost,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a server configuration without persistence.
    #[must_use]
    pub const fn new(session: SessionSettings, bind_addr: SocketAddr, hashing_cost: HashingCost) -> Self {
        Self {
            session,
            bind_addr,
            hashing_cost,
            db_pool: None,
        }
    }

    /// Attach a database connection pool.
    ///
    /// Without one the server keeps accounts and employees in memory.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }
}
