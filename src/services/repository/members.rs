use sqlx::{any::AnyRow, Row};

use super::{
    format_timestamp, map_sqlx_error, next_update_timestamp,
    parse_optional_timestamp, parse_timestamp, timestamp_now, Filters,
};
use crate::{
    domain::{
        Email, Member, MemberChanges, MemberId, MemberQuery, NewMember,
        Pagination, ProjectId, ProjectSummary, StoreError,
    },
    services::database::Session,
};

const MEMBER_COLUMNS: &str = "id, name, email, role, bio, github_username, \
                              linkedin_url, created_at, updated_at";

#[tracing::instrument(name = "Getting member by id", skip(session))]
pub async fn get_member(
    session: &mut Session,
    id: MemberId,
) -> Result<Option<Member>, StoreError> {
    let row = sqlx::query(&format!(
        "SELECT {MEMBER_COLUMNS} FROM members WHERE id = $1"
    ))
    .bind(*id.as_ref())
    .fetch_optional(session.connection())
    .await
    .map_err(map_sqlx_error)?;

    match row {
        Some(row) => {
            Ok(Some(with_projects(session, member_from_row(&row)?).await?))
        }
        None => Ok(None),
    }
}

#[tracing::instrument(name = "Getting member by email", skip_all)]
pub async fn get_member_by_email(
    session: &mut Session,
    email: &Email,
) -> Result<Option<Member>, StoreError> {
    let row = sqlx::query(&format!(
        "SELECT {MEMBER_COLUMNS} FROM members WHERE email = $1"
    ))
    .bind(email.as_ref().to_owned())
    .fetch_optional(session.connection())
    .await
    .map_err(map_sqlx_error)?;

    match row {
        Some(row) => {
            Ok(Some(with_projects(session, member_from_row(&row)?).await?))
        }
        None => Ok(None),
    }
}

#[tracing::instrument(name = "Listing members", skip(session))]
pub async fn list_members(
    session: &mut Session,
    page: Pagination,
) -> Result<Vec<Member>, StoreError> {
    search_members(session, &MemberQuery::default(), page).await
}

/// Members matching `query`, in its order. Paging applies after filtering.
#[tracing::instrument(name = "Searching members", skip(session))]
pub async fn search_members(
    session: &mut Session,
    query: &MemberQuery,
    page: Pagination,
) -> Result<Vec<Member>, StoreError> {
    let mut filters = Filters::default();
    if let Some(search) = &query.search {
        filters.search(&["name", "email"], search);
    }
    if let Some(role) = &query.role {
        filters.equals("role", role);
    }
    let sql = filters.select(
        MEMBER_COLUMNS,
        "members",
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

    let mut members = Vec::with_capacity(rows.len());
    for row in rows {
        members.push(with_projects(session, member_from_row(&row)?).await?);
    }
    Ok(members)
}

/// Distinct non-null roles, alphabetically.
#[tracing::instrument(name = "Listing member roles", skip_all)]
pub async fn list_member_roles(
    session: &mut Session,
) -> Result<Vec<String>, StoreError> {
    sqlx::query_scalar(
        "SELECT DISTINCT role FROM members WHERE role IS NOT NULL ORDER BY role",
    )
    .fetch_all(session.connection())
    .await
    .map_err(map_sqlx_error)
}

/// Fails with [`StoreError::ConstraintViolation`] when the email is taken.
#[tracing::instrument(name = "Creating member", skip_all)]
pub async fn create_member(
    session: &mut Session,
    member: NewMember,
) -> Result<Member, StoreError> {
    let created_at = timestamp_now();

    let row = sqlx::query(
        r#"
        INSERT INTO members
            (name, email, role, bio, github_username, linkedin_url, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id
        "#,
    )
    .bind(member.name.as_ref().to_owned())
    .bind(member.email.as_ref().to_owned())
    .bind(member.role.clone())
    .bind(member.bio.clone())
    .bind(member.github_username.clone())
    .bind(member.linkedin_url.clone())
    .bind(format_timestamp(&created_at))
    .fetch_one(session.connection())
    .await
    .map_err(map_sqlx_error)?;

    let id = row.try_get::<i64, _>("id").map_err(map_sqlx_error)?;
    tracing::debug!(member_id = id, "member created");

    Ok(Member {
        id: MemberId::new(id),
        name: member.name.as_ref().to_owned(),
        email: member.email.as_ref().to_owned(),
        role: member.role,
        bio: member.bio,
        github_username: member.github_username,
        linkedin_url: member.linkedin_url,
        created_at,
        updated_at: None,
        projects: Vec::new(),
    })
}

/// Returns `None` when no member has this id. An empty change set leaves the
/// row, `updated_at` included, untouched.
#[tracing::instrument(name = "Updating member", skip(session, changes))]
pub async fn update_member(
    session: &mut Session,
    id: MemberId,
    changes: MemberChanges,
) -> Result<Option<Member>, StoreError> {
    let Some(mut member) = get_member(session, id).await? else {
        return Ok(None);
    };
    if !member.apply(changes) {
        return Ok(Some(member));
    }
    let updated_at = next_update_timestamp(member.updated_at);

    sqlx::query(
        r#"
        UPDATE members
        SET name = $2, email = $3, role = $4, bio = $5,
            github_username = $6, linkedin_url = $7, updated_at = $8
        WHERE id = $1
        "#,
    )
    .bind(*member.id.as_ref())
    .bind(member.name.clone())
    .bind(member.email.clone())
    .bind(member.role.clone())
    .bind(member.bio.clone())
    .bind(member.github_username.clone())
    .bind(member.linkedin_url.clone())
    .bind(format_timestamp(&updated_at))
    .execute(session.connection())
    .await
    .map_err(map_sqlx_error)?;

    member.updated_at = Some(updated_at);
    Ok(Some(member))
}

/// Detaches the member from every project, then removes it. Projects are
/// never deleted.
#[tracing::instrument(name = "Deleting member", skip(session))]
pub async fn delete_member(
    session: &mut Session,
    id: MemberId,
) -> Result<bool, StoreError> {
    sqlx::query("DELETE FROM member_projects WHERE member_id = $1")
        .bind(*id.as_ref())
        .execute(session.connection())
        .await
        .map_err(map_sqlx_error)?;

    let result = sqlx::query("DELETE FROM members WHERE id = $1")
        .bind(*id.as_ref())
        .execute(session.connection())
        .await
        .map_err(map_sqlx_error)?;

    Ok(result.rows_affected() > 0)
}

async fn with_projects(
    session: &mut Session,
    mut member: Member,
) -> Result<Member, StoreError> {
    let rows = sqlx::query(
        r#"
        SELECT projects.id, projects.title, projects.status
        FROM projects
        INNER JOIN member_projects ON member_projects.project_id = projects.id
        WHERE member_projects.member_id = $1
        ORDER BY projects.id
        "#,
    )
    .bind(*member.id.as_ref())
    .fetch_all(session.connection())
    .await
    .map_err(map_sqlx_error)?;

    member.projects = rows
        .iter()
        .map(|row| {
            Ok(ProjectSummary {
                id: ProjectId::new(row.try_get("id")?),
                title: row.try_get("title")?,
                status: row.try_get("status")?,
            })
        })
        .collect::<Result<_, sqlx::Error>>()
        .map_err(map_sqlx_error)?;
    Ok(member)
}

fn member_from_row(row: &AnyRow) -> Result<Member, StoreError> {
    let created_at: String = row.try_get("created_at").map_err(map_sqlx_error)?;
    let updated_at: Option<String> =
        row.try_get("updated_at").map_err(map_sqlx_error)?;

    Ok(Member {
        id: MemberId::new(row.try_get("id").map_err(map_sqlx_error)?),
        name: row.try_get("name").map_err(map_sqlx_error)?,
        email: row.try_get("email").map_err(map_sqlx_error)?,
        role: row.try_get("role").map_err(map_sqlx_error)?,
        bio: row.try_get("bio").map_err(map_sqlx_error)?,
        github_username: row
            .try_get("github_username")
            .map_err(map_sqlx_error)?,
        linkedin_url: row.try_get("linkedin_url").map_err(map_sqlx_error)?,
        created_at: parse_timestamp(&created_at)?,
        updated_at: parse_optional_timestamp(updated_at)?,
        projects: Vec::new(),
    })
}
