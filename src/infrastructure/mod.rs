//! Infrastructure layer - concrete implementations of domain boundaries

pub mod cache;
pub mod llm;
pub mod logging;
pub mod profile;
pub mod search;
