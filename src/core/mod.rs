//! Core utilities shared across the application:
//! - `config`: explicit scraper configuration with named defaults
//! - `http`: reqwest client construction
//! - `paths`: data-directory resolution

pub mod config;
pub mod http;
pub mod paths;

pub use config::ScraperConfig;
pub use paths::resolve_data_dir;
