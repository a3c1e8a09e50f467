//! Service settings loaded via OrthoConfig.
//!
//! Values are layered from defaults, an optional config file, `USER_LOOKUP_*`
//! environment variables and command-line flags.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_POOL_MAX_SIZE: u32 = 10;

/// Database selected for the running environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseEnvironment {
    /// Test runs use `TEST_DB`.
    Test,
    /// Every other mode uses `PROD_DB`.
    Production,
}

impl DatabaseEnvironment {
    /// Select the database for a mode flag.
    ///
    /// Only the exact value `test` selects the test database.
    ///
    /// # Examples
    /// ```
    /// use user_lookup::config::DatabaseEnvironment;
    ///
    /// assert_eq!(DatabaseEnvironment::from_mode("test"), DatabaseEnvironment::Test);
    /// assert_eq!(DatabaseEnvironment::from_mode("staging"), DatabaseEnvironment::Production);
    /// ```
    #[must_use]
    pub fn from_mode(mode: &str) -> Self {
        if mode == "test" {
            Self::Test
        } else {
            Self::Production
        }
    }

    /// Name of the database for this environment.
    #[must_use]
    pub fn database_name(self) -> &'static str {
        match self {
            Self::Test => "TEST_DB",
            Self::Production => "PROD_DB",
        }
    }
}

/// Errors raised while deriving runtime values from [`AppSettings`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// No base connection string was provided.
    #[error("database URL is not configured; set USER_LOOKUP_DATABASE_URL")]
    MissingDatabaseUrl,
    /// The base connection string could not be parsed.
    #[error("database URL is invalid: {message}")]
    InvalidDatabaseUrl { message: String },
    /// The bind address could not be parsed.
    #[error("bind address `{value}` is invalid: {message}")]
    InvalidBindAddr { value: String, message: String },
}

/// Runtime settings for the user lookup service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_LOOKUP")]
pub struct AppSettings {
    /// Base PostgreSQL connection string; its path is replaced by the
    /// environment's database name.
    pub database_url: Option<String>,
    /// Mode flag; `test` selects `TEST_DB`.
    pub environment: Option<String>,
    /// Listen address for the HTTP server.
    pub bind_addr: Option<String>,
    /// Replace failure causes in 500 bodies with a fixed message.
    #[ortho_config(default = false)]
    pub redact_failures: bool,
    /// Apply embedded migrations before serving.
    #[ortho_config(default = false)]
    pub run_migrations: bool,
    /// Maximum pooled database connections.
    pub pool_max_size: Option<u32>,
}

impl AppSettings {
    /// Database selected by the configured mode flag.
    #[must_use]
    pub fn database_environment(&self) -> DatabaseEnvironment {
        DatabaseEnvironment::from_mode(self.environment.as_deref().unwrap_or("production"))
    }

    /// Connection string pointing at the environment's database.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingDatabaseUrl`] when no base URL is set and
    /// [`ConfigError::InvalidDatabaseUrl`] when it cannot be parsed.
    pub fn database_url_for_environment(&self) -> Result<String, ConfigError> {
        let raw = self
            .database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::MissingDatabaseUrl)?;
        let mut url = Url::parse(raw).map_err(|err| ConfigError::InvalidDatabaseUrl {
            message: err.to_string(),
        })?;
        if url.cannot_be_a_base() {
            return Err(ConfigError::InvalidDatabaseUrl {
                message: format!("`{}` has no path component", url.scheme()),
            });
        }
        url.set_path(self.database_environment().database_name());
        Ok(url.into())
    }

    /// Parsed listen address, defaulting to `0.0.0.0:8080`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBindAddr`] when the value is not a
    /// socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value.parse().map_err(|err: std::net::AddrParseError| ConfigError::InvalidBindAddr {
            value: value.to_owned(),
            message: err.to_string(),
        })
    }

    /// Maximum pooled connections, defaulting to ten.
    #[must_use]
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE)
    }
}
