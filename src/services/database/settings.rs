use secrecy::{ExposeSecret, Secret};
use std::time::Duration;

use crate::utils::constants::{defaults, env, load_bool_or_default, load_or_default};

/// Where the service runs. Only production makes an unreachable database
/// fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Production,
    Other(String),
}

impl Environment {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            other => Self::Other(other.to_owned()),
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, Clone)]
pub struct PostgresSettings {
    pub user: String,
    pub password: Secret<String>,
    pub host: String,
    pub port: String,
    pub database: String,
}

/// Pool tuning for the networked target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolSettings {
    pub size: u32,
    pub max_overflow: u32,
    pub connect_timeout: Duration,
    pub recycle: Duration,
}

impl PoolSettings {
    pub fn max_connections(&self) -> u32 {
        (self.size + self.max_overflow).max(1)
    }
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            size: defaults::POOL_SIZE,
            max_overflow: defaults::POOL_MAX_OVERFLOW,
            connect_timeout: Duration::from_secs(
                defaults::CONNECT_TIMEOUT_SECS,
            ),
            recycle: Duration::from_secs(defaults::POOL_RECYCLE_SECS),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub test_mode: bool,
    pub sqlite_url: String,
    pub postgres: PostgresSettings,
    pub environment: Environment,
    pub test_db_connection: bool,
    pub pool: PoolSettings,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            test_mode: load_bool_or_default(env::TEST_MODE_ENV_VAR, false),
            sqlite_url: load_or_default(
                env::SQLITE_URL_ENV_VAR,
                defaults::SQLITE_URL,
            ),
            postgres: PostgresSettings {
                user: load_or_default(
                    env::POSTGRES_USER_ENV_VAR,
                    defaults::POSTGRES_USER,
                ),
                password: Secret::new(load_or_default(
                    env::POSTGRES_PASSWORD_ENV_VAR,
                    "",
                )),
                host: load_or_default(
                    env::POSTGRES_HOST_ENV_VAR,
                    defaults::POSTGRES_HOST,
                ),
                port: load_or_default(
                    env::POSTGRES_PORT_ENV_VAR,
                    defaults::POSTGRES_PORT,
                ),
                database: load_or_default(
                    env::POSTGRES_DB_ENV_VAR,
                    defaults::POSTGRES_DB,
                ),
            },
            environment: Environment::parse(&load_or_default(
                env::ENVIRONMENT_ENV_VAR,
                defaults::ENVIRONMENT,
            )),
            test_db_connection: load_bool_or_default(
                env::TEST_DB_CONNECTION_ENV_VAR,
                true,
            ),
            pool: PoolSettings {
                size: load_number_or_default(
                    env::DB_POOL_SIZE_ENV_VAR,
                    defaults::POOL_SIZE,
                ),
                max_overflow: load_number_or_default(
                    env::DB_MAX_OVERFLOW_ENV_VAR,
                    defaults::POOL_MAX_OVERFLOW,
                ),
                connect_timeout: Duration::from_secs(load_number_or_default(
                    env::DB_CONNECT_TIMEOUT_ENV_VAR,
                    defaults::CONNECT_TIMEOUT_SECS,
                )),
                recycle: Duration::from_secs(load_number_or_default(
                    env::DB_POOL_RECYCLE_ENV_VAR,
                    defaults::POOL_RECYCLE_SECS,
                )),
            },
        }
    }

    /// Embedded store settings rooted at `sqlite_url`, with everything else
    /// at its default.
    pub fn embedded(sqlite_url: impl Into<String>) -> Self {
        Self {
            test_mode: true,
            sqlite_url: sqlite_url.into(),
            postgres: PostgresSettings {
                user: defaults::POSTGRES_USER.to_owned(),
                password: Secret::new(String::new()),
                host: defaults::POSTGRES_HOST.to_owned(),
                port: defaults::POSTGRES_PORT.to_owned(),
                database: defaults::POSTGRES_DB.to_owned(),
            },
            environment: Environment::parse(defaults::ENVIRONMENT),
            test_db_connection: true,
            pool: PoolSettings::default(),
        }
    }

    /// The connection descriptor for the configured target. Pure: no I/O,
    /// no validation beyond string assembly.
    pub fn database_url(&self) -> Secret<String> {
        if self.test_mode {
            return Secret::new(self.sqlite_url.clone());
        }
        Secret::new(self.postgres_url())
    }

    fn postgres_url(&self) -> String {
        let pg = &self.postgres;
        format!(
            "postgres://{}:{}@{}:{}/{}",
            urlencoding::encode(&pg.user),
            urlencoding::encode(pg.password.expose_secret()),
            pg.host,
            pg.port,
            pg.database
        )
    }
}

fn load_number_or_default<T>(variable_name: &str, default_value: T) -> T
where
    T: std::str::FromStr,
{
    load_or_default(variable_name, "")
        .trim()
        .parse()
        .unwrap_or(default_value)
}
