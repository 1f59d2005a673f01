use std::sync::Arc;

use crate::{
    domain::{
        Email, Member, MemberChanges, MemberId, MemberQuery, MemberStore,
        NewMember, Pagination, StoreError,
    },
    services::{
        database::Database,
        repository::{self, map_sqlx_error},
    },
};

/// Runs each operation in its own session and commits it once.
pub struct SqlMemberStore {
    database: Arc<Database>,
}

impl SqlMemberStore {
    pub fn new(database: Arc<Database>) -> Self {
        Self { database }
    }
}

#[async_trait::async_trait]
impl MemberStore for SqlMemberStore {
    #[tracing::instrument(name = "Getting member from SQL store", skip_all)]
    async fn get_member(
        &self,
        id: MemberId,
    ) -> Result<Option<Member>, StoreError> {
        let mut session = self.database.acquire_session().await?;
        let member = repository::get_member(&mut session, id).await?;
        session.commit().await.map_err(map_sqlx_error)?;
        Ok(member)
    }

    #[tracing::instrument(
        name = "Getting member by email from SQL store",
        skip_all
    )]
    async fn get_member_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<Member>, StoreError> {
        let mut session = self.database.acquire_session().await?;
        let member = repository::get_member_by_email(&mut session, email).await?;
        session.commit().await.map_err(map_sqlx_error)?;
        Ok(member)
    }

    #[tracing::instrument(name = "Listing members from SQL store", skip_all)]
    async fn list_members(
        &self,
        page: Pagination,
    ) -> Result<Vec<Member>, StoreError> {
        let mut session = self.database.acquire_session().await?;
        let members = repository::list_members(&mut session, page).await?;
        session.commit().await.map_err(map_sqlx_error)?;
        Ok(members)
    }

    #[tracing::instrument(name = "Searching members in SQL store", skip_all)]
    async fn search_members(
        &self,
        query: MemberQuery,
        page: Pagination,
    ) -> Result<Vec<Member>, StoreError> {
        let mut session = self.database.acquire_session().await?;
        let members =
            repository::search_members(&mut session, &query, page).await?;
        session.commit().await.map_err(map_sqlx_error)?;
        Ok(members)
    }

    #[tracing::instrument(name = "Listing member roles in SQL store", skip_all)]
    async fn list_member_roles(&self) -> Result<Vec<String>, StoreError> {
        let mut session = self.database.acquire_session().await?;
        let roles = repository::list_member_roles(&mut session).await?;
        session.commit().await.map_err(map_sqlx_error)?;
        Ok(roles)
    }

    #[tracing::instrument(name = "Adding member to SQL store", skip_all)]
    async fn create_member(
        &self,
        member: NewMember,
    ) -> Result<Member, StoreError> {
        let mut session = self.database.acquire_session().await?;
        let member = repository::create_member(&mut session, member).await?;
        session.commit().await.map_err(map_sqlx_error)?;
        Ok(member)
    }

    #[tracing::instrument(name = "Updating member in SQL store", skip_all)]
    async fn update_member(
        &self,
        id: MemberId,
        changes: MemberChanges,
    ) -> Result<Option<Member>, StoreError> {
        let mut session = self.database.acquire_session().await?;
        let member =
            repository::update_member(&mut session, id, changes).await?;
        session.commit().await.map_err(map_sqlx_error)?;
        Ok(member)
    }

    #[tracing::instrument(name = "Deleting member from SQL store", skip_all)]
    async fn delete_member(&self, id: MemberId) -> Result<bool, StoreError> {
        let mut session = self.database.acquire_session().await?;
        let deleted = repository::delete_member(&mut session, id).await?;
        session.commit().await.map_err(map_sqlx_error)?;
        Ok(deleted)
    }
}
