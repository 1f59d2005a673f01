//! Read-only HTML views over the stored entities, with search, filters and
//! sortable columns.

use askama::Template;
use axum::{
    extract::{Query, State},
    response::Html,
};
use color_eyre::eyre::eyre;
use serde::Deserialize;

use crate::{
    app_state::AppState,
    domain::{
        ApiError, Member, MemberQuery, MemberSortKey, Pagination, Project,
        ProjectQuery, ProjectSortKey, SortOrder, ValidationError,
        KNOWN_PROJECT_STATUSES, MAX_PAGE_LIMIT,
    },
};

#[derive(Template)]
#[template(path = "admin/index.html")]
struct IndexPage {
    backend: &'static str,
    fallback: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct MemberListParams {
    pub q: Option<String>,
    pub role: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

impl MemberListParams {
    fn parse(self) -> Result<MemberQuery, ValidationError> {
        Ok(MemberQuery {
            search: non_blank(self.q),
            role: non_blank(self.role),
            sort: non_blank(self.sort)
                .map(|sort| MemberSortKey::parse(&sort))
                .transpose()?
                .unwrap_or_default(),
            order: parse_order(self.order)?,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ProjectListParams {
    pub q: Option<String>,
    pub status: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

impl ProjectListParams {
    fn parse(self) -> Result<ProjectQuery, ValidationError> {
        Ok(ProjectQuery {
            search: non_blank(self.q),
            status: non_blank(self.status),
            sort: non_blank(self.sort)
                .map(|sort| ProjectSortKey::parse(&sort))
                .transpose()?
                .unwrap_or_default(),
            order: parse_order(self.order)?,
        })
    }
}

/// Empty form fields arrive as `?q=`; they mean "no filter".
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn parse_order(order: Option<String>) -> Result<SortOrder, ValidationError> {
    non_blank(order)
        .map(|order| SortOrder::parse(&order))
        .transpose()
        .map(Option::unwrap_or_default)
}

struct Header {
    label: &'static str,
    href: Option<String>,
    marker: &'static str,
}

impl Header {
    fn plain(label: &'static str) -> Self {
        Self {
            label,
            href: None,
            marker: "",
        }
    }

    /// A column link that keeps the active filters. Clicking the current
    /// sort column flips its direction.
    fn sortable(
        label: &'static str,
        path: &str,
        column: &str,
        current: (&str, SortOrder),
        filters: &[(&str, &Option<String>)],
    ) -> Self {
        let (current_column, current_order) = current;
        let active = column == current_column;
        let next_order = if active {
            current_order.reversed()
        } else {
            SortOrder::Ascending
        };

        let mut href =
            format!("{path}?sort={column}&order={}", next_order.as_str());
        for (name, value) in filters {
            if let Some(value) = value {
                href.push_str(&format!(
                    "&{name}={}",
                    urlencoding::encode(value)
                ));
            }
        }

        let marker = match (active, current_order) {
            (false, _) => "",
            (true, SortOrder::Ascending) => " ▲",
            (true, SortOrder::Descending) => " ▼",
        };
        Self {
            label,
            href: Some(href),
            marker,
        }
    }
}

struct FilterOption {
    value: String,
    selected: bool,
}

fn filter_options(
    values: impl IntoIterator<Item = String>,
    current: &Option<String>,
) -> Vec<FilterOption> {
    let mut options: Vec<FilterOption> = values
        .into_iter()
        .map(|value| FilterOption {
            selected: current.as_ref() == Some(&value),
            value,
        })
        .collect();
    // Keep an unlisted filter visible so the form shows what is applied.
    if let Some(current) = current {
        if !options.iter().any(|option| option.selected) {
            options.push(FilterOption {
                value: current.clone(),
                selected: true,
            });
        }
    }
    options
}

#[derive(Template)]
#[template(path = "admin/members.html")]
struct MembersPage {
    search: String,
    sort: &'static str,
    order: &'static str,
    roles: Vec<FilterOption>,
    headers: Vec<Header>,
    members: Vec<MemberRow>,
}

impl MembersPage {
    fn new(
        query: MemberQuery,
        members: Vec<Member>,
        roles: Vec<String>,
    ) -> Self {
        const PATH: &str = "/admin/members";
        let current = (query.sort.column(), query.order);
        let filters = [("q", &query.search), ("role", &query.role)];
        let sortable = |label, key: MemberSortKey| {
            Header::sortable(label, PATH, key.column(), current, &filters)
        };

        Self {
            headers: vec![
                sortable("ID", MemberSortKey::Id),
                sortable("Name", MemberSortKey::Name),
                sortable("Email", MemberSortKey::Email),
                Header::plain("Role"),
                sortable("Created", MemberSortKey::CreatedAt),
            ],
            roles: filter_options(roles, &query.role),
            search: query.search.clone().unwrap_or_default(),
            sort: query.sort.column(),
            order: query.order.as_str(),
            members: members.into_iter().map(Into::into).collect(),
        }
    }
}

struct MemberRow {
    id: i64,
    name: String,
    email: String,
    role: String,
    created_at: String,
}

impl From<Member> for MemberRow {
    fn from(member: Member) -> Self {
        Self {
            id: *member.id.as_ref(),
            name: member.name,
            email: member.email,
            role: member.role.unwrap_or_default(),
            created_at: member.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "admin/projects.html")]
struct ProjectsPage {
    search: String,
    sort: &'static str,
    order: &'static str,
    statuses: Vec<FilterOption>,
    headers: Vec<Header>,
    projects: Vec<ProjectRow>,
}

impl ProjectsPage {
    fn new(query: ProjectQuery, projects: Vec<Project>) -> Self {
        const PATH: &str = "/admin/projects";
        let current = (query.sort.column(), query.order);
        let filters = [("q", &query.search), ("status", &query.status)];
        let sortable = |label, key: ProjectSortKey| {
            Header::sortable(label, PATH, key.column(), current, &filters)
        };
        let known = KNOWN_PROJECT_STATUSES.iter().map(|s| s.to_string());

        Self {
            headers: vec![
                sortable("ID", ProjectSortKey::Id),
                sortable("Title", ProjectSortKey::Title),
                Header::plain("Status"),
                Header::plain("Members"),
                sortable("Created", ProjectSortKey::CreatedAt),
            ],
            statuses: filter_options(known, &query.status),
            search: query.search.clone().unwrap_or_default(),
            sort: query.sort.column(),
            order: query.order.as_str(),
            projects: projects.into_iter().map(Into::into).collect(),
        }
    }
}

struct ProjectRow {
    id: i64,
    title: String,
    status: String,
    members: usize,
    created_at: String,
}

impl From<Project> for ProjectRow {
    fn from(project: Project) -> Self {
        Self {
            id: *project.id.as_ref(),
            title: project.title,
            status: project.status.unwrap_or_default(),
            members: project.members.len(),
            created_at: project
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string(),
        }
    }
}

fn render(page: impl Template) -> Result<Html<String>, ApiError> {
    page.render()
        .map(Html)
        .map_err(|e| ApiError::UnexpectedError(eyre!(e)))
}

fn full_page() -> Result<Pagination, ApiError> {
    Ok(Pagination::parse(None, Some(MAX_PAGE_LIMIT))?)
}

#[tracing::instrument(name = "Admin index route handler", skip_all)]
pub async fn admin_index(
    State(state): State<AppState>,
) -> Result<Html<String>, ApiError> {
    let engine = state
        .database
        .get_engine()
        .await
        .map_err(|e| ApiError::ServiceUnavailable(eyre!(e)))?;

    render(IndexPage {
        backend: engine.backend().name(),
        fallback: engine.is_fallback(),
    })
}

#[tracing::instrument(name = "Admin members route handler", skip_all)]
pub async fn admin_members(
    State(state): State<AppState>,
    Query(params): Query<MemberListParams>,
) -> Result<Html<String>, ApiError> {
    let query = params.parse()?;
    let members = state
        .member_store
        .search_members(query.clone(), full_page()?)
        .await?;
    let roles = state.member_store.list_member_roles().await?;

    render(MembersPage::new(query, members, roles))
}

#[tracing::instrument(name = "Admin projects route handler", skip_all)]
pub async fn admin_projects(
    State(state): State<AppState>,
    Query(params): Query<ProjectListParams>,
) -> Result<Html<String>, ApiError> {
    let query = params.parse()?;
    let projects = state
        .project_store
        .search_projects(query.clone(), full_page()?)
        .await?;

    render(ProjectsPage::new(query, projects))
}
