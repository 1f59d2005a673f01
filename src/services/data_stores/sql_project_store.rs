use std::sync::Arc;

use crate::{
    domain::{
        NewProject, Pagination, Project, ProjectChanges, ProjectId,
        ProjectQuery, ProjectStore, StoreError,
    },
    services::{
        database::Database,
        repository::{self, map_sqlx_error},
    },
};

pub struct SqlProjectStore {
    database: Arc<Database>,
}

impl SqlProjectStore {
    pub fn new(database: Arc<Database>) -> Self {
        Self { database }
    }
}

#[async_trait::async_trait]
impl ProjectStore for SqlProjectStore {
    #[tracing::instrument(name = "Getting project from SQL store", skip_all)]
    async fn get_project(
        &self,
        id: ProjectId,
    ) -> Result<Option<Project>, StoreError> {
        let mut session = self.database.acquire_session().await?;
        let project = repository::get_project(&mut session, id).await?;
        session.commit().await.map_err(map_sqlx_error)?;
        Ok(project)
    }

    #[tracing::instrument(name = "Listing projects from SQL store", skip_all)]
    async fn list_projects(
        &self,
        page: Pagination,
    ) -> Result<Vec<Project>, StoreError> {
        let mut session = self.database.acquire_session().await?;
        let projects = repository::list_projects(&mut session, page).await?;
        session.commit().await.map_err(map_sqlx_error)?;
        Ok(projects)
    }

    #[tracing::instrument(name = "Searching projects in SQL store", skip_all)]
    async fn search_projects(
        &self,
        query: ProjectQuery,
        page: Pagination,
    ) -> Result<Vec<Project>, StoreError> {
        let mut session = self.database.acquire_session().await?;
        let projects =
            repository::search_projects(&mut session, &query, page).await?;
        session.commit().await.map_err(map_sqlx_error)?;
        Ok(projects)
    }

    #[tracing::instrument(name = "Adding project to SQL store", skip_all)]
    async fn create_project(
        &self,
        project: NewProject,
    ) -> Result<Project, StoreError> {
        let mut session = self.database.acquire_session().await?;
        let project = repository::create_project(&mut session, project).await?;
        session.commit().await.map_err(map_sqlx_error)?;
        Ok(project)
    }

    #[tracing::instrument(name = "Updating project in SQL store", skip_all)]
    async fn update_project(
        &self,
        id: ProjectId,
        changes: ProjectChanges,
    ) -> Result<Option<Project>, StoreError> {
        let mut session = self.database.acquire_session().await?;
        let project =
            repository::update_project(&mut session, id, changes).await?;
        session.commit().await.map_err(map_sqlx_error)?;
        Ok(project)
    }

    #[tracing::instrument(name = "Deleting project from SQL store", skip_all)]
    async fn delete_project(&self, id: ProjectId) -> Result<bool, StoreError> {
        let mut session = self.database.acquire_session().await?;
        let deleted = repository::delete_project(&mut session, id).await?;
        session.commit().await.map_err(map_sqlx_error)?;
        Ok(deleted)
    }
}
