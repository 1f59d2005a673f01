mod create_member;
mod delete_member;
mod get_member;
mod list_members;
mod update_member;

pub use create_member::*;
pub use delete_member::*;
pub use get_member::*;
pub use list_members::*;
pub use update_member::*;

use crate::domain::{
    parse_bounded_text, parse_web_url, ValidationError,
    MAX_GITHUB_USERNAME_LENGTH, MAX_ROLE_LENGTH,
};

pub(crate) const MEMBER_NOT_FOUND: &str = "Member not found";
pub(crate) const EMAIL_ALREADY_REGISTERED: &str = "Email already registered";

fn parse_role(role: String) -> Result<String, ValidationError> {
    parse_bounded_text("role", role, MAX_ROLE_LENGTH)
}

fn parse_github_username(username: String) -> Result<String, ValidationError> {
    parse_bounded_text("github_username", username, MAX_GITHUB_USERNAME_LENGTH)
}

fn parse_linkedin_url(url: String) -> Result<String, ValidationError> {
    parse_web_url("linkedin_url", url)
}
