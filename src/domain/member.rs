use chrono::{DateTime, Utc};

use super::{Email, MemberId, MemberName, ProjectSummary};

/// A persisted member, as stored, together with the projects it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub email: String,
    pub role: Option<String>,
    pub bio: Option<String>,
    pub github_username: Option<String>,
    pub linkedin_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub projects: Vec<ProjectSummary>,
}

impl Member {
    /// Overwrites every field present in `changes`. Returns whether any
    /// field was supplied at all.
    pub fn apply(&mut self, changes: MemberChanges) -> bool {
        if changes.is_empty() {
            return false;
        }
        if let Some(name) = changes.name {
            self.name = name.as_ref().to_owned();
        }
        if let Some(email) = changes.email {
            self.email = email.as_ref().to_owned();
        }
        if let Some(role) = changes.role {
            self.role = role;
        }
        if let Some(bio) = changes.bio {
            self.bio = bio;
        }
        if let Some(github_username) = changes.github_username {
            self.github_username = github_username;
        }
        if let Some(linkedin_url) = changes.linkedin_url {
            self.linkedin_url = linkedin_url;
        }
        true
    }
}

/// Validated creation payload.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMember {
    pub name: MemberName,
    pub email: Email,
    pub role: Option<String>,
    pub bio: Option<String>,
    pub github_username: Option<String>,
    pub linkedin_url: Option<String>,
}

impl NewMember {
    pub fn new(name: MemberName, email: Email) -> Self {
        Self {
            name,
            email,
            role: None,
            bio: None,
            github_username: None,
            linkedin_url: None,
        }
    }
}

/// Validated partial update. `None` leaves a field untouched; for nullable
/// columns `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberChanges {
    pub name: Option<MemberName>,
    pub email: Option<Email>,
    pub role: Option<Option<String>>,
    pub bio: Option<Option<String>>,
    pub github_username: Option<Option<String>>,
    pub linkedin_url: Option<Option<String>>,
}

impl MemberChanges {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Reduced view of a member embedded in a project.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberSummary {
    pub id: MemberId,
    pub name: String,
    pub email: String,
    pub role: Option<String>,
}
