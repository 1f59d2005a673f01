use std::collections::HashSet;

use sqlx::{any::AnyRow, Row};

use super::{
    format_timestamp, map_sqlx_error, next_update_timestamp,
    parse_optional_timestamp, parse_timestamp, timestamp_now, Filters,
};
use crate::{
    domain::{
        MemberId, MemberSummary, NewProject, Pagination, Project,
        ProjectChanges, ProjectId, ProjectQuery, StoreError,
    },
    services::database::Session,
};

const PROJECT_COLUMNS: &str = "id, title, description, status, github_url, \
                               demo_url, created_at, updated_at";

#[tracing::instrument(name = "Getting project by id", skip(session))]
pub async fn get_project(
    session: &mut Session,
    id: ProjectId,
) -> Result<Option<Project>, StoreError> {
    let row = sqlx::query(&format!(
        "SELECT {PROJECT_COLUMNS} FROM projects WHERE id = $1"
    ))
    .bind(*id.as_ref())
    .fetch_optional(session.connection())
    .await
    .map_err(map_sqlx_error)?;

    match row {
        Some(row) => {
            Ok(Some(with_members(session, project_from_row(&row)?).await?))
        }
        None => Ok(None),
    }
}

#[tracing::instrument(name = "Listing projects", skip(session))]
pub async fn list_projects(
    session: &mut Session,
    page: Pagination,
) -> Result<Vec<Project>, StoreError> {
    search_projects(session, &ProjectQuery::default(), page).await
}

/// Projects matching `query`, in its order. Paging applies after filtering.
#[tracing::instrument(name = "Searching projects", skip(session))]
pub async fn search_projects(
    session: &mut Session,
    query: &ProjectQuery,
    page: Pagination,
) -> Result<Vec<Project>, StoreError> {
    let mut filters = Filters::default();
    if let Some(search) = &query.search {
        filters.search(&["title", "description"], search);
    }
    if let Some(status) = &query.status {
        filters.equals("status", status);
    }
    let sql = filters.select(
        PROJECT_COLUMNS,
        "projects",
        query.sort.column(),
        query.order,
    );

    let mut statement = sqlx::query(&sql);
    for bind in &filters.binds {
        statement = statement.bind(bind.clone());
    }
    let rows = statement
        .bind(page.limit())
        .bind(page.skip())
        .fetch_all(session.connection())
        .await
        .map_err(map_sqlx_error)?;

    let mut projects = Vec::with_capacity(rows.len());
    for row in rows {
        projects.push(with_members(session, project_from_row(&row)?).await?);
    }
    Ok(projects)
}

/// Member ids that match no member are skipped, not reported as errors.
#[tracing::instrument(name = "Creating project", skip_all)]
pub async fn create_project(
    session: &mut Session,
    project: NewProject,
) -> Result<Project, StoreError> {
    let created_at = timestamp_now();

    let row = sqlx::query(
        r#"
        INSERT INTO projects
            (title, description, status, github_url, demo_url, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id
        "#,
    )
    .bind(project.title.as_ref().to_owned())
    .bind(project.description.clone())
    .bind(project.status.clone())
    .bind(project.github_url.clone())
    .bind(project.demo_url.clone())
    .bind(format_timestamp(&created_at))
    .fetch_one(session.connection())
    .await
    .map_err(map_sqlx_error)?;

    let id = ProjectId::new(row.try_get("id").map_err(map_sqlx_error)?);
    attach_members(session, id, &project.member_ids).await?;

    let created = Project {
        id,
        title: project.title.as_ref().to_owned(),
        description: project.description,
        status: project.status,
        github_url: project.github_url,
        demo_url: project.demo_url,
        created_at,
        updated_at: None,
        members: Vec::new(),
    };
    with_members(session, created).await
}

/// Returns `None` when no project has this id. A supplied `member_ids`
/// replaces the membership set wholesale; an omitted one leaves it alone.
#[tracing::instrument(name = "Updating project", skip(session, changes))]
pub async fn update_project(
    session: &mut Session,
    id: ProjectId,
    changes: ProjectChanges,
) -> Result<Option<Project>, StoreError> {
    let Some(mut project) = get_project(session, id).await? else {
        return Ok(None);
    };
    if !project.apply(&changes) {
        return Ok(Some(project));
    }
    let updated_at = next_update_timestamp(project.updated_at);

    sqlx::query(
        r#"
        UPDATE projects
        SET title = $2, description = $3, status = $4,
            github_url = $5, demo_url = $6, updated_at = $7
        WHERE id = $1
        "#,
    )
    .bind(*project.id.as_ref())
    .bind(project.title.clone())
    .bind(project.description.clone())
    .bind(project.status.clone())
    .bind(project.github_url.clone())
    .bind(project.demo_url.clone())
    .bind(format_timestamp(&updated_at))
    .execute(session.connection())
    .await
    .map_err(map_sqlx_error)?;
    project.updated_at = Some(updated_at);

    if let Some(member_ids) = &changes.member_ids {
        sqlx::query("DELETE FROM member_projects WHERE project_id = $1")
            .bind(*id.as_ref())
            .execute(session.connection())
            .await
            .map_err(map_sqlx_error)?;
        attach_members(session, id, member_ids).await?;
    }

    with_members(session, project).await.map(Some)
}

/// Detaches every member, then removes the project. Members are never
/// deleted.
#[tracing::instrument(name = "Deleting project", skip(session))]
pub async fn delete_project(
    session: &mut Session,
    id: ProjectId,
) -> Result<bool, StoreError> {
    sqlx::query("DELETE FROM member_projects WHERE project_id = $1")
        .bind(*id.as_ref())
        .execute(session.connection())
        .await
        .map_err(map_sqlx_error)?;

    let result = sqlx::query("DELETE FROM projects WHERE id = $1")
        .bind(*id.as_ref())
        .execute(session.connection())
        .await
        .map_err(map_sqlx_error)?;

    Ok(result.rows_affected() > 0)
}

/// Links each existing member to the project and returns the ids that
/// matched nothing.
async fn attach_members(
    session: &mut Session,
    project_id: ProjectId,
    member_ids: &[MemberId],
) -> Result<Vec<MemberId>, StoreError> {
    let mut seen = HashSet::new();
    let mut skipped = Vec::new();

    for member_id in member_ids.iter().filter(|id| seen.insert(**id)) {
        let result = sqlx::query(
            r#"
            INSERT INTO member_projects (member_id, project_id)
            SELECT id, $2 FROM members WHERE id = $1
            "#,
        )
        .bind(*member_id.as_ref())
        .bind(*project_id.as_ref())
        .execute(session.connection())
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            skipped.push(*member_id);
        }
    }

    if !skipped.is_empty() {
        tracing::warn!(
            project_id = %project_id,
            skipped = ?skipped,
            "Ignoring member ids that do not exist"
        );
    }
    Ok(skipped)
}

async fn with_members(
    session: &mut Session,
    mut project: Project,
) -> Result<Project, StoreError> {
    let rows = sqlx::query(
        r#"
        SELECT members.id, members.name, members.email, members.role
        FROM members
        INNER JOIN member_projects ON member_projects.member_id = members.id
        WHERE member_projects.project_id = $1
        ORDER BY members.id
        "#,
    )
    .bind(*project.id.as_ref())
    .fetch_all(session.connection())
    .await
    .map_err(map_sqlx_error)?;

    project.members = rows
        .iter()
        .map(|row| {
            Ok(MemberSummary {
                id: MemberId::new(row.try_get("id")?),
                name: row.try_get("name")?,
                email: row.try_get("email")?,
                role: row.try_get("role")?,
            })
        })
        .collect::<Result<_, sqlx::Error>>()
        .map_err(map_sqlx_error)?;
    Ok(project)
}

fn project_from_row(row: &AnyRow) -> Result<Project, StoreError> {
    let created_at: String =
        row.try_get("created_at").map_err(map_sqlx_error)?;
    let updated_at: Option<String> =
        row.try_get("updated_at").map_err(map_sqlx_error)?;

    Ok(Project {
        id: ProjectId::new(row.try_get("id").map_err(map_sqlx_error)?),
        title: row.try_get("title").map_err(map_sqlx_error)?,
        description: row.try_get("description").map_err(map_sqlx_error)?,
        status: row.try_get("status").map_err(map_sqlx_error)?,
        github_url: row.try_get("github_url").map_err(map_sqlx_error)?,
        demo_url: row.try_get("demo_url").map_err(map_sqlx_error)?,
        created_at: parse_timestamp(&created_at)?,
        updated_at: parse_optional_timestamp(updated_at)?,
        members: Vec::new(),
    })
}
