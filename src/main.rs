use std::sync::Arc;

use lamfo_api::{
    app_state::AppState,
    services::{
        data_stores::{SqlMemberStore, SqlProjectStore},
        database::{Database, Settings},
    },
    utils::{
        constants::{ALLOWED_ORIGINS, APP_ADDRESS},
        tracing::init_tracing,
    },
    Application,
};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let database = Arc::new(Database::new(Settings::from_env()));
    // Provision up front so a production outage stops startup here.
    let engine = database.get_engine().await?;
    tracing::info!(
        backend = engine.backend().name(),
        fallback = engine.is_fallback(),
        "Storage ready"
    );

    let member_store = Arc::new(SqlMemberStore::new(database.clone()));
    let project_store = Arc::new(SqlProjectStore::new(database.clone()));
    let app_state = AppState::new(member_store, project_store, database);

    let app = Application::build(app_state, &APP_ADDRESS, &ALLOWED_ORIGINS)
        .await
        .map_err(|e| color_eyre::eyre::eyre!("Failed to build app: {e}"))?;

    app.run().await?;
    Ok(())
}
