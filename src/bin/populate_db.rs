use lamfo_api::{
    services::{
        database::{Database, Settings},
        seed::{populate, SeedOutcome},
    },
    utils::tracing::init_tracing,
};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let database = Database::new(Settings::from_env());
    match populate(&database).await? {
        SeedOutcome::Seeded { members, projects } => {
            tracing::info!(members, projects, "Sample data created");
        }
        SeedOutcome::Skipped => {
            tracing::info!("Database already has members, nothing to do");
        }
    }
    Ok(())
}
