use super::ValidationError;

pub const MAX_ROLE_LENGTH: usize = 50;
pub const MAX_GITHUB_USERNAME_LENGTH: usize = 100;
pub const MAX_STATUS_LENGTH: usize = 50;
pub const MAX_URL_LENGTH: usize = 255;

/// Checks a free-text column against its width. Content is not otherwise
/// interpreted.
pub fn parse_bounded_text(
    field: &str,
    value: String,
    max: usize,
) -> Result<String, ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::new(format!(
            "Max {field} length is {max} characters"
        )));
    }
    Ok(value)
}

/// Absolute http(s) URL, stored as plain text.
pub fn parse_web_url(
    field: &str,
    value: String,
) -> Result<String, ValidationError> {
    let value = parse_bounded_text(field, value, MAX_URL_LENGTH)?;
    let has_web_scheme =
        value.starts_with("http://") || value.starts_with("https://");
    if !has_web_scheme || !validator::validate_url(&value) {
        return Err(ValidationError::new(format!(
            "Invalid {field}: {value}"
        )));
    }
    Ok(value)
}
