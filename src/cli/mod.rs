//! CLI module
//!
//! Subcommands:
//! - `serve`: run the HTTP API server
//! - `search`: run a one-shot directory search from the terminal

pub mod search;
pub mod serve;

use clap::{Parser, Subcommand};

/// Wizardoo search - LLM-ranked directory search with keyword fallback
#[derive(Parser)]
#[command(name = "wizardoo-search")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,

    /// Run a one-shot search and print the results as JSON
    Search(search::SearchArgs),
}
