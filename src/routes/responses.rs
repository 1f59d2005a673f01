use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Member, MemberSummary, Project, ProjectSummary};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct MemberResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Option<String>,
    pub bio: Option<String>,
    pub github_username: Option<String>,
    pub linkedin_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub projects: Vec<ProjectSummaryResponse>,
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self {
            id: *member.id.as_ref(),
            name: member.name,
            email: member.email,
            role: member.role,
            bio: member.bio,
            github_username: member.github_username,
            linkedin_url: member.linkedin_url,
            created_at: member.created_at,
            updated_at: member.updated_at,
            projects: member.projects.into_iter().map(Into::into).collect(),
        }
    }
}

/// A project as embedded in a member. Carries no members of its own.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectSummaryResponse {
    pub id: i64,
    pub title: String,
    pub status: Option<String>,
}

impl From<ProjectSummary> for ProjectSummaryResponse {
    fn from(project: ProjectSummary) -> Self {
        Self {
            id: *project.id.as_ref(),
            title: project.title,
            status: project.status,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectResponse {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: Option<String>,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub members: Vec<MemberSummaryResponse>,
}

impl From<Project> for ProjectResponse {
    fn from(project: Project) -> Self {
        Self {
            id: *project.id.as_ref(),
            title: project.title,
            description: project.description,
            status: project.status,
            github_url: project.github_url,
            demo_url: project.demo_url,
            created_at: project.created_at,
            updated_at: project.updated_at,
            members: project.members.into_iter().map(Into::into).collect(),
        }
    }
}

/// A member as embedded in a project. No bio, no reverse relation.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct MemberSummaryResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Option<String>,
}

impl From<MemberSummary> for MemberSummaryResponse {
    fn from(member: MemberSummary) -> Self {
        Self {
            id: *member.id.as_ref(),
            name: member.name,
            email: member.email,
            role: member.role,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_owned(),
        }
    }
}

/// Offset paging as accepted on list routes.
#[derive(Debug, Default, Deserialize)]
pub struct PageQueryParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}
