mod sql_member_store;
mod sql_project_store;

pub use sql_member_store::*;
pub use sql_project_store::*;

use color_eyre::eyre::eyre;

use crate::{domain::StoreError, services::database::DatabaseError};

impl From<DatabaseError> for StoreError {
    fn from(e: DatabaseError) -> Self {
        match e {
            DatabaseError::Connectivity(report) => Self::Connectivity(report),
            e => Self::UnexpectedError(eyre!(e)),
        }
    }
}
