//! Understat xG scraper and analysis library
//!
//! Scrapes football shot and expected-goal (xG) data embedded in
//! understat.com match pages, persists one JSON file per match, and
//! re-aggregates those files into match-, league-, and team-level views.
//!
//! ## Pipeline
//!
//! - **Discovery**: sweep the numeric match-id space, keep the ids that
//!   resolve to real matches, and classify them into (league, season)
//!   buckets written to `league_ids.dat`.
//! - **Update**: for every indexed id not already on disk, fetch its shot
//!   data and write `<league>/<season>/<id>.json`. Existing files are
//!   never re-fetched.
//! - **Reports**: read the store back for match, league, and team tables.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use understat_xg::{
//!     core::config::ScraperConfig,
//!     storage::store::MatchStore,
//!     understat::UnderstatClient,
//! };
//!
//! # async fn example() -> understat_xg::Result<()> {
//! let config = ScraperConfig::default();
//! let client = UnderstatClient::new(&config)?;
//! let store = MatchStore::new("./data");
//! # let _ = (client, store);
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod storage;
pub mod sweep;
pub mod understat;

// Re-export commonly used types
pub use cli::types::{League, Season};
pub use error::{Result, UnderstatError};
pub use understat::types::{MatchShots, ShotEvent, ShotResult, Side, Situation};

/// Env var overriding the data directory (`--data-dir` wins over it).
pub const DATA_DIR_ENV_VAR: &str = "UNDERSTAT_XG_DATA_DIR";

/// Earliest season with data available on the remote source.
pub const MIN_SEASON_YEAR: u16 = 2014;
