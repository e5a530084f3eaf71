//! Search command - one-shot directory search from the terminal

use clap::Args;

use crate::config::AppConfig;
use crate::domain::{Archetype, SearchOptions};
use crate::infrastructure::logging;

#[derive(Args)]
pub struct SearchArgs {
    /// Free-text search query
    pub query: String,

    /// Restrict results to one archetype (coach, mentor, counselor, consultant)
    #[arg(long)]
    pub archetype: Option<Archetype>,

    /// Maximum number of results
    #[arg(long)]
    pub max_results: Option<usize>,
}

pub async fn run(args: SearchArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    let state = crate::create_app_state_with_config(&config).await?;

    let mut options = SearchOptions::new();
    if let Some(archetype) = args.archetype {
        options = options.with_archetype(archetype);
    }
    if let Some(max) = args.max_results {
        options = options.with_max_results(max);
    }

    let results = state.search_service.search(&args.query, &options).await?;
    println!("{}", serde_json::to_string_pretty(&results)?);

    Ok(())
}
