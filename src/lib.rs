//! Wizardoo search service
//!
//! Free-text directory search for a coach-matching platform:
//! - LLM-ranked matching over approved profiles
//! - TTL-cached search results
//! - Local keyword fallback when the remote path fails

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use api::state::AppState;
use domain::{Archetype, LlmProvider, Profile, ProfileId};
use infrastructure::{
    cache::InMemoryCache,
    llm::{HttpClient, OpenAiProvider},
    profile::InMemoryProfileRepository,
    search::{LlmProfileRanker, ProfileSearchService},
};

/// Create the application state with all services initialized
pub async fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default()).await
}

/// Create the application state with custom configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let provider = create_openai_provider(config)?;

    let repository = Arc::new(InMemoryProfileRepository::with_profiles(default_profiles()));
    let ranker = Arc::new(LlmProfileRanker::new(provider, &config.search.model));
    let cache = Arc::new(InMemoryCache::default());

    let search_service = Arc::new(
        ProfileSearchService::new(repository.clone(), ranker, cache)
            .with_cache_ttl(Duration::from_secs(config.search.cache_ttl_secs)),
    );

    Ok(AppState::new(search_service, repository))
}

fn create_openai_provider(config: &AppConfig) -> anyhow::Result<Arc<dyn LlmProvider>> {
    let api_key =
        std::env::var("OPENAI_API_KEY").unwrap_or_else(|_| "sk-placeholder".to_string());
    let base_url = std::env::var("OPENAI_BASE_URL").ok();

    let http_client = Arc::new(HttpClient::with_timeout(Duration::from_secs(
        config.search.request_timeout_secs,
    ))?);

    let provider = OpenAiProvider::new(api_key, http_client);

    let provider = if let Some(url) = base_url {
        info!("Using OpenAI provider with custom base URL: {}", url);
        provider.with_base_url(url)
    } else {
        info!("Using OpenAI provider with default base URL");
        provider
    };

    Ok(Arc::new(provider))
}

// ============================================================================
// Default Entities
// ============================================================================

fn default_profiles() -> Vec<Profile> {
    fn profile(
        id: &str,
        name: &str,
        archetype: Archetype,
        bio: &str,
        specialties: &[&str],
        rating: f32,
        sessions: u32,
        location: &str,
        hourly_rate: u32,
        availability: &str,
    ) -> Profile {
        Profile::new(
            ProfileId::new(id).expect("seed profile id is valid"),
            name,
            archetype,
        )
        .with_bio(bio)
        .with_specialties(specialties.iter().map(|s| s.to_string()).collect())
        .with_rating(rating)
        .with_sessions(sessions)
        .with_location(location)
        .with_hourly_rate(hourly_rate)
        .with_availability(availability)
    }

    vec![
        profile(
            "wiz-1",
            "Sarah Johnson",
            Archetype::Coach,
            "Performance coach specializing in career acceleration and goal achievement.",
            &[
                "Career Development",
                "Leadership",
                "Goal Setting",
                "Performance Optimization",
                "Executive Presence",
            ],
            4.9,
            150,
            "San Francisco, CA",
            120,
            "Available Today",
        ),
        profile(
            "wiz-2",
            "Michael Chen",
            Archetype::Mentor,
            "Tech executive turned mentor, helping emerging leaders navigate their journey.",
            &[
                "Technology",
                "Startups",
                "Leadership",
                "Career Transition",
                "Mentorship",
            ],
            4.8,
            200,
            "New York, NY",
            150,
            "Next Available: Tomorrow",
        ),
        profile(
            "wiz-3",
            "Dr. Emily Rodriguez",
            Archetype::Counselor,
            "Licensed therapist specializing in anxiety, relationships, and personal growth.",
            &[
                "Anxiety",
                "Relationships",
                "Personal Growth",
                "Therapy",
                "Mental Health",
            ],
            5.0,
            300,
            "Austin, TX",
            100,
            "Available This Week",
        ),
        profile(
            "wiz-4",
            "David Kim",
            Archetype::Consultant,
            "Strategy consultant helping businesses solve complex operational challenges.",
            &[
                "Strategy",
                "Operations",
                "Business Development",
                "Consulting",
                "Problem Solving",
            ],
            4.7,
            180,
            "Seattle, WA",
            200,
            "Available Next Week",
        ),
        profile(
            "wiz-5",
            "Lisa Thompson",
            Archetype::Coach,
            "Executive coach focused on women in leadership and work-life integration.",
            &[
                "Executive Coaching",
                "Women in Leadership",
                "Work-Life Balance",
                "Career Development",
                "Leadership Skills",
            ],
            4.9,
            220,
            "Los Angeles, CA",
            140,
            "Available Today",
        ),
        profile(
            "wiz-6",
            "James Wilson",
            Archetype::Mentor,
            "Serial entrepreneur and investor sharing insights from 20+ years in business.",
            &[
                "Entrepreneurship",
                "Investing",
                "Business Strategy",
                "Startup Mentoring",
                "Business Development",
            ],
            4.8,
            175,
            "Boston, MA",
            180,
            "Available Tomorrow",
        ),
        profile(
            "wiz-7",
            "Dr. Amanda Foster",
            Archetype::Counselor,
            "Relationship counselor helping couples and individuals build stronger connections.",
            &[
                "Relationship Counseling",
                "Couples Therapy",
                "Communication Skills",
                "Conflict Resolution",
                "Marriage Counseling",
            ],
            4.9,
            250,
            "Denver, CO",
            110,
            "Available This Week",
        ),
        profile(
            "wiz-8",
            "Robert Martinez",
            Archetype::Consultant,
            "Digital transformation consultant helping companies adapt to modern technology.",
            &[
                "Digital Transformation",
                "Technology Strategy",
                "Change Management",
                "Business Innovation",
                "Process Optimization",
            ],
            4.6,
            140,
            "Chicago, IL",
            175,
            "Available Next Week",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profiles_are_valid() {
        let profiles = default_profiles();
        assert_eq!(profiles.len(), 8);
        assert!(profiles.iter().all(|p| p.approved));
        assert!(profiles.iter().all(|p| !p.specialties.is_empty()));
    }

    #[test]
    fn test_default_profiles_cover_all_archetypes() {
        let profiles = default_profiles();
        for archetype in Archetype::ALL {
            assert!(
                profiles.iter().any(|p| p.archetype == archetype),
                "missing seed profile for {}",
                archetype
            );
        }
    }
}
