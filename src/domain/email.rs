use serde::{Deserialize, Serialize};

use super::ValidationError;

const MAX_EMAIL_LENGTH: usize = 255;

/// Member email address. Compared byte-for-byte, so `Foo@x.io` and
/// `foo@x.io` are different addresses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    pub fn parse(s: String) -> Result<Self, ValidationError> {
        if s.chars().count() > MAX_EMAIL_LENGTH {
            return Err(ValidationError::new(format!(
                "Max email length is {MAX_EMAIL_LENGTH} characters"
            )));
        }
        if !validator::validate_email(&s) {
            return Err(ValidationError::new(format!(
                "Invalid email address: {s}"
            )));
        }

        Ok(Self(s))
    }
}

impl AsRef<String> for Email {
    fn as_ref(&self) -> &String {
        &self.0
    }
}
