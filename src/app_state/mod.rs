use std::sync::Arc;

use crate::{
    domain::{MemberStore, ProjectStore},
    services::database::Database,
};

pub type MemberStoreType = Arc<dyn MemberStore + Send + Sync>;
pub type ProjectStoreType = Arc<dyn ProjectStore + Send + Sync>;

#[derive(Clone)]
pub struct AppState {
    pub member_store: MemberStoreType,
    pub project_store: ProjectStoreType,
    pub database: Arc<Database>,
}

impl AppState {
    pub fn new(
        member_store: MemberStoreType,
        project_store: ProjectStoreType,
        database: Arc<Database>,
    ) -> Self {
        Self {
            member_store,
            project_store,
            database,
        }
    }
}
