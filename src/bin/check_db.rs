use lamfo_api::{
    services::database::{check_connection, Database, Settings},
    utils::tracing::init_tracing,
};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let settings = Settings::from_env();
    if settings.test_mode {
        tracing::info!(url = %settings.sqlite_url, "Checking embedded store");
    } else {
        let pg = &settings.postgres;
        tracing::info!(
            host = %pg.host,
            port = %pg.port,
            database = %pg.database,
            user = %pg.user,
            "Checking PostgreSQL"
        );
    }

    let report = check_connection(&Database::new(settings)).await?;
    tracing::info!(
        backend = report.backend.name(),
        origin = ?report.origin,
        database = %report.database,
        user = report.user.as_deref().unwrap_or("-"),
        "Connection successful"
    );
    if report.tables.is_empty() {
        tracing::warn!("No tables found in the database");
    } else {
        tracing::info!(tables = %report.tables.join(", "), "Available tables");
    }
    Ok(())
}
