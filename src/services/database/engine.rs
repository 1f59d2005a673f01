use color_eyre::eyre::eyre;
use secrecy::ExposeSecret;
use sqlx::any::{AnyConnectOptions, AnyPoolOptions};
use sqlx::AnyPool;
use std::str::FromStr;

use super::{DatabaseError, PoolSettings, Settings};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Sqlite,
    Postgres,
}

impl Backend {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sqlite => "sqlite",
            Self::Postgres => "postgresql",
        }
    }
}

/// How the engine came to point at its backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineOrigin {
    Configured,
    Fallback,
}

/// A connection pool bound to one backend. Cloning the pool inside is cheap;
/// the engine itself is owned by [`super::Database`].
#[derive(Debug)]
pub struct Engine {
    pool: AnyPool,
    backend: Backend,
    origin: EngineOrigin,
    schema_ready: bool,
}

impl Engine {
    pub(super) fn new(
        pool: AnyPool,
        backend: Backend,
        origin: EngineOrigin,
        schema_ready: bool,
    ) -> Self {
        Self {
            pool,
            backend,
            origin,
            schema_ready,
        }
    }

    pub fn pool(&self) -> &AnyPool {
        &self.pool
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    pub fn origin(&self) -> EngineOrigin {
        self.origin
    }

    pub fn is_fallback(&self) -> bool {
        self.origin == EngineOrigin::Fallback
    }

    /// False when schema creation failed at startup; queries may fail later.
    pub fn schema_ready(&self) -> bool {
        self.schema_ready
    }
}

#[tracing::instrument(name = "Opening embedded SQLite store", skip(pool))]
pub(super) async fn connect_embedded(
    url: &str,
    pool: &PoolSettings,
) -> Result<AnyPool, DatabaseError> {
    let options = parse_options(url)?;

    // SQLite allows one writer at a time. Sessions are transactions, so a
    // second pooled connection would upgrade its read lock and fail with
    // SQLITE_BUSY instead of waiting. One connection queues them in the pool.
    AnyPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(pool.connect_timeout)
        .connect_with(options)
        .await
        .map_err(connect_error)
}

#[tracing::instrument(name = "Connecting to PostgreSQL", skip_all)]
pub(super) async fn connect_networked(
    settings: &Settings,
) -> Result<AnyPool, DatabaseError> {
    let port = &settings.postgres.port;
    if port.parse::<u16>().is_err() {
        return Err(DatabaseError::Configuration(format!(
            "POSTGRES_PORT is not a valid port number: {port}"
        )));
    }

    let options = parse_options(settings.database_url().expose_secret())?;
    let pool_options = AnyPoolOptions::new()
        .min_connections(settings.pool.size.min(settings.pool.max_connections()))
        .max_connections(settings.pool.max_connections())
        .acquire_timeout(settings.pool.connect_timeout)
        .max_lifetime(settings.pool.recycle)
        .test_before_acquire(true);

    // Production must know the database is there before serving.
    if !settings.test_db_connection && !settings.environment.is_production() {
        return Ok(pool_options.connect_lazy_with(options));
    }

    let pool = pool_options
        .connect_with(options)
        .await
        .map_err(connect_error)?;

    sqlx::query("SELECT 1")
        .execute(&pool)
        .await
        .map_err(connect_error)?;

    Ok(pool)
}

fn parse_options(url: &str) -> Result<AnyConnectOptions, DatabaseError> {
    AnyConnectOptions::from_str(url)
        .map_err(|e| DatabaseError::Configuration(e.to_string()))
}

fn connect_error(e: sqlx::Error) -> DatabaseError {
    match e {
        sqlx::Error::Configuration(e) => {
            DatabaseError::Configuration(e.to_string())
        }
        e => DatabaseError::Connectivity(eyre!(e)),
    }
}
