//! Roster entry-point: loads settings, prepares persistence, and serves HTML.

mod server;

use std::io;

use actix_web::web;
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use roster::inbound::http::session_config::{BuildMode, session_settings_from_env};
use roster::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use roster::settings::RosterSettings;

use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    let settings = RosterSettings::load()
        .map_err(|err| io::Error::other(format!("failed to load settings: {err}")))?;
    init_tracing(settings.debug);

    let session = session_settings_from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())
        .map_err(io::Error::other)?;
    let bind_addr = settings.bind_addr().map_err(io::Error::other)?;
    let mut config = ServerConfig::new(session, bind_addr, settings.hashing_cost());

    if let Some(database_url) = settings.database_url() {
        migrate(database_url).await?;
        let pool_config =
            PoolConfig::new(database_url).with_max_size(settings.db_max_connections());
        let pool = DbPool::new(pool_config)
            .await
            .map_err(|err| io::Error::other(err.to_string()))?;
        config = config.with_db_pool(pool);
    }

    info!(%bind_addr, "roster listening");
    create_server(config)?.await
}

/// JSON logs at `info` by default; pretty `debug` logs when requested.
/// `RUST_LOG` overrides the level either way.
fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let result = if debug {
        fmt().with_env_filter(filter).pretty().try_init()
    } else {
        fmt().with_env_filter(filter).json().try_init()
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}

/// Bring the schema up to date on a blocking thread.
async fn migrate(database_url: &str) -> io::Result<()> {
    let url = database_url.to_owned();
    let applied = web::block(move || run_pending_migrations(&url))
        .await
        .map_err(io::Error::other)?
        .map_err(io::Error::other)?;
    info!(applied, "database schema up to date");
    Ok(())
}
