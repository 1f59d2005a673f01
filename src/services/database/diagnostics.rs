use color_eyre::eyre::eyre;

use super::{Backend, Database, DatabaseError, EngineOrigin};

/// What a live connection reports about itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionReport {
    pub backend: Backend,
    pub origin: EngineOrigin,
    /// Database name on PostgreSQL, file path for SQLite.
    pub database: String,
    /// SQLite has no users.
    pub user: Option<String>,
    pub tables: Vec<String>,
}

/// Round-trips a trivial query, then reads the database identity and the
/// table list. Nothing is written.
#[tracing::instrument(name = "Checking database connection", skip_all)]
pub async fn check_connection(
    database: &Database,
) -> Result<ConnectionReport, DatabaseError> {
    let engine = database.get_engine().await?;
    let mut session = database.acquire_session().await?;
    let connection = session.connection();

    sqlx::query("SELECT 1")
        .execute(&mut *connection)
        .await
        .map_err(query_error)?;

    let (name, user, tables) = match engine.backend() {
        Backend::Postgres => {
            let (name, user): (String, String) = sqlx::query_as(
                "SELECT current_database()::text, current_user::text",
            )
            .fetch_one(&mut *connection)
            .await
            .map_err(query_error)?;
            let tables: Vec<String> = sqlx::query_scalar(
                r#"
                SELECT table_name::text FROM information_schema.tables
                WHERE table_schema = 'public'
                ORDER BY table_name
                "#,
            )
            .fetch_all(&mut *connection)
            .await
            .map_err(query_error)?;
            (name, Some(user), tables)
        }
        Backend::Sqlite => {
            let name: String = sqlx::query_scalar(
                "SELECT file FROM pragma_database_list WHERE name = 'main'",
            )
            .fetch_one(&mut *connection)
            .await
            .map_err(query_error)?;
            let tables: Vec<String> = sqlx::query_scalar(
                r#"
                SELECT name FROM sqlite_master
                WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
                ORDER BY name
                "#,
            )
            .fetch_all(&mut *connection)
            .await
            .map_err(query_error)?;
            (name, None, tables)
        }
    };

    Ok(ConnectionReport {
        backend: engine.backend(),
        origin: engine.origin(),
        database: name,
        user,
        tables,
    })
}

fn query_error(e: sqlx::Error) -> DatabaseError {
    DatabaseError::Connectivity(eyre!(e))
}
