//! User lookup server entry-point: loads settings, builds the pool and serves
//! `GET /users/{username}` plus health probes.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

mod server;

use std::sync::Arc;

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use user_lookup::config::AppSettings;
use user_lookup::inbound::http::{FailurePolicy, HealthState};
use user_lookup::outbound::persistence::{
    DbPool, DieselUserRepository, PoolConfig, run_pending_migrations,
};

/// Connect to the store selected by `settings`.
///
/// A missing or blank database URL aborts startup.
async fn build_db_pool(settings: &AppSettings) -> Result<DbPool> {
    let database_url = settings
        .database_url_for_environment()
        .wrap_err("resolve database URL")?;
    if settings.run_migrations {
        run_pending_migrations(&database_url)
            .await
            .wrap_err("apply database migrations")?;
    }
    let config = PoolConfig::new(database_url).with_max_size(settings.pool_max_size());
    let pool = DbPool::new(config).await.wrap_err("create database pool")?;
    info!(
        environment = ?settings.database_environment(),
        "database pool ready"
    );
    Ok(pool)
}

async fn server_config(settings: &AppSettings) -> Result<ServerConfig> {
    let bind_addr = settings.bind_addr().wrap_err("resolve bind address")?;
    let pool = build_db_pool(settings).await?;
    Ok(
        ServerConfig::new(bind_addr, Arc::new(DieselUserRepository::new(pool)))
            .with_failure_policy(FailurePolicy::from_redact_flag(settings.redact_failures)),
    )
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings =
        AppSettings::load_from_iter(std::env::args_os()).wrap_err("load user lookup settings")?;
    let config = server_config(&settings).await?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config).wrap_err("start HTTP server")?;
    let outcome = server.await;
    health_state.mark_unhealthy();
    outcome.wrap_err("HTTP server terminated")
}

#[cfg(test)]
mod tests;
