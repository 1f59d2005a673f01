use super::ValidationError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        match value {
            "asc" => Ok(Self::Ascending),
            "desc" => Ok(Self::Descending),
            other => Err(ValidationError::new(format!(
                "Unknown sort order: {other}"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    pub fn reversed(&self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Member columns a listing can be ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MemberSortKey {
    #[default]
    Id,
    Name,
    Email,
    CreatedAt,
}

impl MemberSortKey {
    pub const ALL: [Self; 4] =
        [Self::Id, Self::Name, Self::Email, Self::CreatedAt];

    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        Self::ALL
            .into_iter()
            .find(|key| key.column() == value)
            .ok_or_else(|| {
                ValidationError::new(format!("Cannot sort members by {value}"))
            })
    }

    /// Column name, doubling as the query parameter value.
    pub fn column(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Email => "email",
            Self::CreatedAt => "created_at",
        }
    }
}

/// Project columns a listing can be ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProjectSortKey {
    #[default]
    Id,
    Title,
    CreatedAt,
}

impl ProjectSortKey {
    pub const ALL: [Self; 3] = [Self::Id, Self::Title, Self::CreatedAt];

    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        Self::ALL
            .into_iter()
            .find(|key| key.column() == value)
            .ok_or_else(|| {
                ValidationError::new(format!("Cannot sort projects by {value}"))
            })
    }

    pub fn column(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Title => "title",
            Self::CreatedAt => "created_at",
        }
    }
}

/// Search, filter and ordering for the member listing.
///
/// `search` matches name or email as a case-insensitive substring. `role`
/// must match exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberQuery {
    pub search: Option<String>,
    pub role: Option<String>,
    pub sort: MemberSortKey,
    pub order: SortOrder,
}

/// Search, filter and ordering for the project listing.
///
/// `search` matches title or description. `status` must match exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectQuery {
    pub search: Option<String>,
    pub status: Option<String>,
    pub sort: ProjectSortKey,
    pub order: SortOrder,
}
