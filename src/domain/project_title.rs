use super::ValidationError;
use serde::{Deserialize, Serialize};

const MAX_PROJECT_TITLE_LENGTH: usize = 200;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectTitle(String);

impl ProjectTitle {
    pub fn parse(title: String) -> Result<Self, ValidationError> {
        if title.trim().is_empty() {
            return Err(ValidationError::new(
                "Project title cannot be empty".to_string(),
            ));
        }
        match title.chars().count() {
            x if x > MAX_PROJECT_TITLE_LENGTH => {
                Err(ValidationError::new(format!(
                    "Max title length is {MAX_PROJECT_TITLE_LENGTH} characters"
                )))
            }
            _ => Ok(Self(title)),
        }
    }
}

impl AsRef<String> for ProjectTitle {
    fn as_ref(&self) -> &String {
        &self.0
    }
}

#[test]
fn test_valid_project_titles() {
    let valid_titles = ["a".to_string(), "a".repeat(200)];
    for valid_title in valid_titles.iter() {
        let parsed = ProjectTitle::parse(valid_title.to_owned())
            .expect("Failed to parse valid project title");

        assert_eq!(parsed.as_ref(), valid_title);
    }
}

#[test]
fn test_empty_project_titles() {
    let result = ProjectTitle::parse(String::new());
    assert_eq!(
        result.unwrap_err().as_ref(),
        "Project title cannot be empty"
    );
}

#[test]
fn test_long_project_titles() {
    let result = ProjectTitle::parse("a".repeat(201));
    assert_eq!(
        result.unwrap_err().as_ref(),
        "Max title length is 200 characters"
    );
}

#[test]
fn test_padded_project_titles_count_whitespace() {
    let padded = format!("{}   ", "a".repeat(198));
    let result = ProjectTitle::parse(padded);
    assert_eq!(
        result.unwrap_err().as_ref(),
        "Max title length is 200 characters"
    );

    let result = ProjectTitle::parse("   ".to_string());
    assert_eq!(
        result.unwrap_err().as_ref(),
        "Project title cannot be empty"
    );
}
