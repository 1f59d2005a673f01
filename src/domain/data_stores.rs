use super::{
    Email, Member, MemberChanges, MemberId, MemberQuery, NewMember,
    NewProject, Pagination, Project, ProjectChanges, ProjectId, ProjectQuery,
};
use color_eyre::eyre::Report;
use thiserror::Error;

/// Member persistence. A miss on lookup, update or delete is reported through
/// `None`/`false`, never as an error.
#[async_trait::async_trait]
pub trait MemberStore {
    async fn get_member(
        &self,
        id: MemberId,
    ) -> Result<Option<Member>, StoreError>;
    async fn get_member_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<Member>, StoreError>;
    async fn list_members(
        &self,
        page: Pagination,
    ) -> Result<Vec<Member>, StoreError>;
    async fn search_members(
        &self,
        query: MemberQuery,
        page: Pagination,
    ) -> Result<Vec<Member>, StoreError>;
    async fn list_member_roles(&self) -> Result<Vec<String>, StoreError>;
    async fn create_member(
        &self,
        member: NewMember,
    ) -> Result<Member, StoreError>;
    async fn update_member(
        &self,
        id: MemberId,
        changes: MemberChanges,
    ) -> Result<Option<Member>, StoreError>;
    async fn delete_member(&self, id: MemberId) -> Result<bool, StoreError>;
}

#[async_trait::async_trait]
pub trait ProjectStore {
    async fn get_project(
        &self,
        id: ProjectId,
    ) -> Result<Option<Project>, StoreError>;
    async fn list_projects(
        &self,
        page: Pagination,
    ) -> Result<Vec<Project>, StoreError>;
    async fn search_projects(
        &self,
        query: ProjectQuery,
        page: Pagination,
    ) -> Result<Vec<Project>, StoreError>;
    async fn create_project(
        &self,
        project: NewProject,
    ) -> Result<Project, StoreError>;
    async fn update_project(
        &self,
        id: ProjectId,
        changes: ProjectChanges,
    ) -> Result<Option<Project>, StoreError>;
    async fn delete_project(&self, id: ProjectId) -> Result<bool, StoreError>;
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
    #[error("Database unreachable")]
    Connectivity(#[source] Report),
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}

impl PartialEq for StoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::ConstraintViolation(_), Self::ConstraintViolation(_))
                | (Self::Connectivity(_), Self::Connectivity(_))
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}
