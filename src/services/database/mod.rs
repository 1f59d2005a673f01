mod diagnostics;
mod engine;
mod schema;
mod session;
mod settings;

pub use diagnostics::*;
pub use engine::*;
pub use session::*;
pub use settings::*;

use color_eyre::eyre::Report;
use thiserror::Error;
use tokio::sync::OnceCell;

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Invalid database configuration: {0}")]
    Configuration(String),
    #[error("Cannot reach the database")]
    Connectivity(#[source] Report),
    #[error("Failed to create the database schema")]
    SchemaInit(#[source] Report),
}

/// Process-wide storage handle. Built once at startup and shared by `Arc`.
///
/// The engine is created on first use. Concurrent first callers are
/// serialised by the cell, so at most one engine is ever built per handle.
/// A failed attempt leaves the cell empty and the next caller retries.
#[derive(Debug)]
pub struct Database {
    settings: Settings,
    engine: OnceCell<Engine>,
    session_factory: OnceCell<SessionFactory>,
}

impl Database {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            engine: OnceCell::new(),
            session_factory: OnceCell::new(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub async fn get_engine(&self) -> Result<&Engine, DatabaseError> {
        self.engine.get_or_try_init(|| self.build_engine()).await
    }

    pub async fn get_session_factory(
        &self,
    ) -> Result<&SessionFactory, DatabaseError> {
        let engine = self.get_engine().await?;
        Ok(self
            .session_factory
            .get_or_init(|| async { SessionFactory::new(engine.pool().clone()) })
            .await)
    }

    /// The only way repository code reaches storage.
    pub async fn acquire_session(&self) -> Result<Session, DatabaseError> {
        self.get_session_factory().await?.open().await
    }

    #[tracing::instrument(name = "Provisioning database engine", skip_all)]
    async fn build_engine(&self) -> Result<Engine, DatabaseError> {
        sqlx::any::install_default_drivers();
        let settings = &self.settings;

        let (pool, backend, origin) = if settings.test_mode {
            let pool =
                connect_embedded(&settings.sqlite_url, &settings.pool).await?;
            (pool, Backend::Sqlite, EngineOrigin::Configured)
        } else {
            match connect_networked(settings).await {
                Ok(pool) => {
                    (pool, Backend::Postgres, EngineOrigin::Configured)
                }
                Err(DatabaseError::Connectivity(report))
                    if !settings.environment.is_production() =>
                {
                    tracing::warn!(
                        error = %report,
                        sqlite_url = %settings.sqlite_url,
                        "PostgreSQL is unreachable, falling back to the embedded store"
                    );
                    let pool =
                        connect_embedded(&settings.sqlite_url, &settings.pool)
                            .await?;
                    (pool, Backend::Sqlite, EngineOrigin::Fallback)
                }
                Err(e) => return Err(e),
            }
        };

        let schema_ready = match schema::create_schema(&pool, backend).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(
                    error = ?e,
                    "Schema initialisation failed, continuing without it"
                );
                false
            }
        };

        tracing::info!(
            backend = backend.name(),
            ?origin,
            schema_ready,
            "Database engine ready"
        );
        Ok(Engine::new(pool, backend, origin, schema_ready))
    }
}
