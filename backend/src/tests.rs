//! Tests for the server bootstrap: readiness signalling and settings wiring.

use std::sync::Arc;

use super::server::{ServerConfig, create_server};
use super::server_config;
use actix_web::web;
use rstest::{fixture, rstest};
use user_lookup::config::{AppSettings, ConfigError};
use user_lookup::domain::ports::FixtureUserRepository;
use user_lookup::inbound::http::HealthState;

#[fixture]
fn health_state() -> web::Data<HealthState> {
    web::Data::new(HealthState::new())
}

#[fixture]
fn settings() -> AppSettings {
    AppSettings {
        database_url: None,
        environment: None,
        bind_addr: Some("127.0.0.1:0".to_owned()),
        redact_failures: true,
        run_migrations: false,
        pool_max_size: None,
    }
}

#[rstest]
#[actix_rt::test]
async fn create_server_marks_ready(health_state: web::Data<HealthState>) {
    assert!(!health_state.is_ready(), "state should start unready");

    let config = ServerConfig::new(
        ([127, 0, 0, 1], 0).into(),
        Arc::new(FixtureUserRepository::default()),
    );
    let _server =
        create_server(health_state.clone(), config).expect("server should bind an ephemeral port");

    assert!(health_state.is_ready(), "state should be ready after bind");
}

#[rstest]
#[case(None)]
#[case(Some(""))]
#[case(Some("   "))]
#[actix_rt::test]
async fn startup_fails_without_database_url(
    mut settings: AppSettings,
    #[case] database_url: Option<&str>,
) {
    settings.database_url = database_url.map(str::to_owned);

    let error = server_config(&settings)
        .await
        .err()
        .expect("startup should require a database URL");

    assert!(error.to_string().contains("database URL"));
    assert!(
        error
            .chain()
            .any(|cause| cause.downcast_ref::<ConfigError>() == Some(&ConfigError::MissingDatabaseUrl)),
        "cause should be the missing URL: {error:?}"
    );
}

#[rstest]
#[actix_rt::test]
async fn invalid_bind_address_is_rejected(mut settings: AppSettings) {
    settings.bind_addr = Some("not-an-address".to_owned());

    let error = server_config(&settings)
        .await
        .err()
        .expect("bind address should be rejected");

    assert!(error.to_string().contains("bind address"));
}
