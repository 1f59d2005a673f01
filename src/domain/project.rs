use chrono::{DateTime, Utc};

use super::{MemberId, MemberSummary, ProjectId, ProjectTitle};

pub const DEFAULT_PROJECT_STATUS: &str = "active";

/// Statuses the UI offers. The column itself accepts any text.
pub const KNOWN_PROJECT_STATUSES: [&str; 4] =
    ["active", "completed", "on_hold", "cancelled"];

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: Option<String>,
    pub status: Option<String>,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub members: Vec<MemberSummary>,
}

impl Project {
    /// Overwrites the scalar fields present in `changes`; membership is
    /// handled by the repository. Returns whether anything was supplied,
    /// membership included.
    pub fn apply(&mut self, changes: &ProjectChanges) -> bool {
        if changes.is_empty() {
            return false;
        }
        if let Some(title) = &changes.title {
            self.title = title.as_ref().to_owned();
        }
        if let Some(description) = &changes.description {
            self.description = description.clone();
        }
        if let Some(status) = &changes.status {
            self.status = status.clone();
        }
        if let Some(github_url) = &changes.github_url {
            self.github_url = github_url.clone();
        }
        if let Some(demo_url) = &changes.demo_url {
            self.demo_url = demo_url.clone();
        }
        true
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewProject {
    pub title: ProjectTitle,
    pub description: Option<String>,
    pub status: Option<String>,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    pub member_ids: Vec<MemberId>,
}

impl NewProject {
    pub fn new(title: ProjectTitle) -> Self {
        Self {
            title,
            description: None,
            status: Some(DEFAULT_PROJECT_STATUS.to_owned()),
            github_url: None,
            demo_url: None,
            member_ids: Vec::new(),
        }
    }
}

/// Partial update. `member_ids: Some(..)` replaces the whole membership set,
/// even when empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectChanges {
    pub title: Option<ProjectTitle>,
    pub description: Option<Option<String>>,
    pub status: Option<Option<String>>,
    pub github_url: Option<Option<String>>,
    pub demo_url: Option<Option<String>>,
    pub member_ids: Option<Vec<MemberId>>,
}

impl ProjectChanges {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Reduced view of a project embedded in a member.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectSummary {
    pub id: ProjectId,
    pub title: String,
    pub status: Option<String>,
}
