//! Configuration loading

pub mod app_config;

pub use app_config::{AppConfig, LogFormat, LoggingConfig, SearchConfig, ServerConfig};
