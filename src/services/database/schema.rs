use color_eyre::eyre::eyre;
use sqlx::AnyPool;

use super::{Backend, DatabaseError};

const MEMBERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS members (
        id {id_column},
        name VARCHAR(100) NOT NULL,
        email VARCHAR(255) NOT NULL UNIQUE,
        role VARCHAR(50),
        bio TEXT,
        github_username VARCHAR(100),
        linkedin_url VARCHAR(255),
        created_at VARCHAR(64) NOT NULL,
        updated_at VARCHAR(64)
    )
"#;

const PROJECTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS projects (
        id {id_column},
        title VARCHAR(200) NOT NULL,
        description TEXT,
        status VARCHAR(50) DEFAULT 'active',
        github_url VARCHAR(255),
        demo_url VARCHAR(255),
        created_at VARCHAR(64) NOT NULL,
        updated_at VARCHAR(64)
    )
"#;

const MEMBER_PROJECTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS member_projects (
        member_id BIGINT NOT NULL REFERENCES members (id) ON DELETE CASCADE,
        project_id BIGINT NOT NULL REFERENCES projects (id) ON DELETE CASCADE,
        PRIMARY KEY (member_id, project_id)
    )
"#;

const MEMBER_PROJECTS_INDEX: &str = r#"
    CREATE INDEX IF NOT EXISTS ix_member_projects_project_id
    ON member_projects (project_id)
"#;

fn id_column(backend: Backend) -> &'static str {
    match backend {
        Backend::Sqlite => "INTEGER PRIMARY KEY AUTOINCREMENT",
        Backend::Postgres => "BIGSERIAL PRIMARY KEY",
    }
}

pub(super) fn statements(backend: Backend) -> Vec<String> {
    [
        MEMBERS_TABLE,
        PROJECTS_TABLE,
        MEMBER_PROJECTS_TABLE,
        MEMBER_PROJECTS_INDEX,
    ]
    .iter()
    .map(|statement| statement.replace("{id_column}", id_column(backend)))
    .collect()
}

/// Creates whatever tables are missing. Never drops or alters existing ones.
#[tracing::instrument(name = "Creating database schema", skip(pool))]
pub(super) async fn create_schema(
    pool: &AnyPool,
    backend: Backend,
) -> Result<(), DatabaseError> {
    for statement in statements(backend) {
        sqlx::query(&statement)
            .execute(pool)
            .await
            .map_err(|e| DatabaseError::SchemaInit(eyre!(e)))?;
    }
    Ok(())
}

#[test]
fn test_id_column_per_backend() {
    let sqlite = statements(Backend::Sqlite);
    let postgres = statements(Backend::Postgres);
    assert_eq!(sqlite.len(), 4);
    assert!(sqlite[0].contains("id INTEGER PRIMARY KEY AUTOINCREMENT"));
    assert!(postgres[1].contains("id BIGSERIAL PRIMARY KEY"));
    assert!(sqlite
        .iter()
        .chain(postgres.iter())
        .all(|statement| statement.contains("IF NOT EXISTS")));
}
