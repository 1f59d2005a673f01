mod create_project;
mod delete_project;
mod get_project;
mod list_projects;
mod update_project;

pub use create_project::*;
pub use delete_project::*;
pub use get_project::*;
pub use list_projects::*;
pub use update_project::*;

use crate::domain::{
    parse_bounded_text, parse_web_url, MemberId, ValidationError,
    MAX_STATUS_LENGTH,
};

pub(crate) const PROJECT_NOT_FOUND: &str = "Project not found";

fn parse_status(status: String) -> Result<String, ValidationError> {
    parse_bounded_text("status", status, MAX_STATUS_LENGTH)
}

fn parse_github_url(url: String) -> Result<String, ValidationError> {
    parse_web_url("github_url", url)
}

fn parse_demo_url(url: String) -> Result<String, ValidationError> {
    parse_web_url("demo_url", url)
}

fn to_member_ids(ids: Vec<i64>) -> Vec<MemberId> {
    ids.into_iter().map(MemberId::new).collect()
}
