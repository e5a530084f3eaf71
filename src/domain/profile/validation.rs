//! Profile validation rules

use thiserror::Error;

use crate::domain::DomainError;

const MAX_PROFILE_ID_LENGTH: usize = 64;

/// Validation errors for profile fields
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileValidationError {
    #[error("Profile ID cannot be empty")]
    EmptyId,

    #[error("Profile ID exceeds {MAX_PROFILE_ID_LENGTH} characters")]
    IdTooLong,

    #[error("Profile ID may only contain alphanumerics, hyphens and underscores: '{0}'")]
    InvalidIdCharacters(String),

    #[error("Unknown archetype: '{0}'")]
    UnknownArchetype(String),
}

impl From<ProfileValidationError> for DomainError {
    fn from(err: ProfileValidationError) -> Self {
        DomainError::invalid_id(err.to_string())
    }
}

/// Validate a profile identifier
pub fn validate_profile_id(id: &str) -> Result<(), ProfileValidationError> {
    if id.is_empty() {
        return Err(ProfileValidationError::EmptyId);
    }

    if id.len() > MAX_PROFILE_ID_LENGTH {
        return Err(ProfileValidationError::IdTooLong);
    }

    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ProfileValidationError::InvalidIdCharacters(id.to_string()));
    }

    Ok(())
}
