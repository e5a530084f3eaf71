//! Profile entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{validate_profile_id, ProfileValidationError};

/// Profile identifier - non-empty, alphanumeric + hyphens/underscores, max 64 characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProfileId(String);

impl ProfileId {
    /// Create a new ProfileId after validation
    pub fn new(id: impl Into<String>) -> Result<Self, ProfileValidationError> {
        let id = id.into();
        validate_profile_id(&id)?;
        Ok(Self(id))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ProfileId {
    type Error = ProfileValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProfileId> for String {
    fn from(id: ProfileId) -> Self {
        id.0
    }
}

impl std::fmt::Display for ProfileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Professional style of a directory profile
///
/// A closed set: both a directory filter and a ranking signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Archetype {
    Coach,
    Mentor,
    Counselor,
    Consultant,
}

impl Archetype {
    pub const ALL: [Archetype; 4] = [
        Archetype::Coach,
        Archetype::Mentor,
        Archetype::Counselor,
        Archetype::Consultant,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Archetype::Coach => "coach",
            Archetype::Mentor => "mentor",
            Archetype::Counselor => "counselor",
            Archetype::Consultant => "consultant",
        }
    }

    /// One-line description used in the ranking prompt
    pub fn description(&self) -> &'static str {
        match self {
            Archetype::Coach => "Performance-focused guidance, goal achievement, accountability",
            Archetype::Mentor => "Experience sharing, career guidance, wisdom transfer",
            Archetype::Counselor => "Emotional support, personal challenges, healing",
            Archetype::Consultant => "Problem-solving, strategic advice, expertise",
        }
    }
}

impl std::fmt::Display for Archetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Archetype {
    type Err = ProfileValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "coach" => Ok(Archetype::Coach),
            "mentor" => Ok(Archetype::Mentor),
            "counselor" => Ok(Archetype::Counselor),
            "consultant" => Ok(Archetype::Consultant),
            other => Err(ProfileValidationError::UnknownArchetype(other.to_string())),
        }
    }
}

/// A bookable professional listed in the directory
///
/// Created externally (seed data or a hosted store) and treated as immutable
/// for the duration of a search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    pub name: String,
    pub archetype: Archetype,
    pub bio: String,
    pub specialties: Vec<String>,
    pub rating: f32,
    pub hourly_rate: u32,
    pub location: String,
    pub availability: String,
    pub sessions: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_url: Option<String>,
    /// Only approved profiles are listed in the directory
    pub approved: bool,
    pub created_at: DateTime<Utc>,
}

impl Profile {
    pub fn new(id: ProfileId, name: impl Into<String>, archetype: Archetype) -> Self {
        Self {
            id,
            name: name.into(),
            archetype,
            bio: String::new(),
            specialties: Vec::new(),
            rating: 0.0,
            hourly_rate: 0,
            location: String::new(),
            availability: String::new(),
            sessions: 0,
            booking_url: None,
            approved: true,
            created_at: Utc::now(),
        }
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = bio.into();
        self
    }

    pub fn with_specialties(mut self, specialties: Vec<String>) -> Self {
        self.specialties = specialties;
        self
    }

    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_hourly_rate(mut self, rate: u32) -> Self {
        self.hourly_rate = rate;
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_availability(mut self, availability: impl Into<String>) -> Self {
        self.availability = availability.into();
        self
    }

    pub fn with_sessions(mut self, sessions: u32) -> Self {
        self.sessions = sessions;
        self
    }

    pub fn with_booking_url(mut self, url: impl Into<String>) -> Self {
        self.booking_url = Some(url.into());
        self
    }

    pub fn with_approved(mut self, approved: bool) -> Self {
        self.approved = approved;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_profile_id_validation() {
        assert!(ProfileId::new("wiz-1").is_ok());
        assert!(ProfileId::new("sarah_johnson").is_ok());
        assert!(ProfileId::new("").is_err());
        assert!(ProfileId::new("has spaces").is_err());
    }

    #[test]
    fn test_archetype_round_trip() {
        for archetype in Archetype::ALL {
            let parsed = Archetype::from_str(archetype.as_str()).unwrap();
            assert_eq!(parsed, archetype);
        }
    }

    #[test]
    fn test_archetype_parse_case_insensitive() {
        assert_eq!(Archetype::from_str("Coach").unwrap(), Archetype::Coach);
        assert!(Archetype::from_str("wizard").is_err());
    }

    #[test]
    fn test_archetype_serde() {
        let json = serde_json::to_string(&Archetype::Counselor).unwrap();
        assert_eq!(json, "\"counselor\"");

        let parsed: Archetype = serde_json::from_str("\"mentor\"").unwrap();
        assert_eq!(parsed, Archetype::Mentor);
    }

    #[test]
    fn test_profile_builder() {
        let profile = Profile::new(
            ProfileId::new("wiz-1").unwrap(),
            "Sarah Johnson",
            Archetype::Coach,
        )
        .with_bio("Performance coach")
        .with_specialties(vec!["Leadership".to_string()])
        .with_rating(4.9)
        .with_hourly_rate(120)
        .with_location("San Francisco, CA");

        assert_eq!(profile.name, "Sarah Johnson");
        assert_eq!(profile.archetype, Archetype::Coach);
        assert_eq!(profile.hourly_rate, 120);
        assert!(profile.approved);
    }
}
