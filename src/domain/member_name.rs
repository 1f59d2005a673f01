use super::ValidationError;
use serde::{Deserialize, Serialize};

const MAX_MEMBER_NAME_LENGTH: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberName(String);

impl MemberName {
    pub fn parse(name: String) -> Result<Self, ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::new(
                "Member name cannot be empty".to_string(),
            ));
        }
        // Stored as given, so padding counts towards the limit.
        match name.chars().count() {
            x if x > MAX_MEMBER_NAME_LENGTH => Err(ValidationError::new(
                format!("Max name length is {MAX_MEMBER_NAME_LENGTH} characters"),
            )),
            _ => Ok(Self(name)),
        }
    }
}

impl AsRef<String> for MemberName {
    fn as_ref(&self) -> &String {
        &self.0
    }
}

#[test]
fn test_valid_member_names() {
    let valid_names = ["a".to_string(), "a".repeat(100), "João Silva".into()];
    for valid_name in valid_names.iter() {
        let parsed = MemberName::parse(valid_name.to_owned())
            .expect("Failed to parse valid Member name");

        assert_eq!(parsed.as_ref(), valid_name);
    }
}

#[test]
fn test_blank_member_names() {
    for blank in ["", "   "] {
        let result = MemberName::parse(blank.to_string());
        assert_eq!(result.unwrap_err().as_ref(), "Member name cannot be empty");
    }
}

#[test]
fn test_long_member_names() {
    let long_name = "a".repeat(101);
    let result = MemberName::parse(long_name);
    assert!(result.is_err());
    assert_eq!(
        result.unwrap_err().as_ref(),
        "Max name length is 100 characters"
    );
}

#[test]
fn test_padded_member_names_count_whitespace() {
    let padded = format!("  {}  ", "a".repeat(99));
    let result = MemberName::parse(padded);
    assert_eq!(
        result.unwrap_err().as_ref(),
        "Max name length is 100 characters"
    );

    let padded = format!(" {} ", "a".repeat(98));
    let parsed = MemberName::parse(padded.clone()).unwrap();
    assert_eq!(parsed.as_ref(), &padded);
}
