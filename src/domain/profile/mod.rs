//! Profile domain - directory entries and their store boundary

pub mod entity;
pub mod repository;
pub mod validation;

pub use entity::{Archetype, Profile, ProfileId};
pub use repository::ProfileRepository;
pub use validation::{validate_profile_id, ProfileValidationError};
