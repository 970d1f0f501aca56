//! Scraper configuration.
//!
//! Everything the remote-site coupling depends on lives here as an
//! explicit value rather than a module-level constant, so commands pass
//! one config object down instead of reaching for globals.

use std::time::Duration;

/// Base URL of the remote source.
pub const UNDERSTAT_BASE_URL: &str = "https://understat.com";

/// Configuration for fetching and sweeping the remote source.
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    /// Remote origin; match pages live at `<base_url>/match/<id>`.
    pub base_url: String,
    /// Position of the `<script>` tag holding the shots payload. Tied to
    /// the site's current markup; the single most fragile coupling point.
    pub script_index: usize,
    /// First match id the discovery sweep probes (inclusive).
    pub first_id: u32,
    /// One past the last match id the sweep probes (exclusive).
    pub last_id: u32,
    /// Pause between successive bulk-update fetches.
    pub request_delay: Duration,
    /// Per-request client timeout.
    pub timeout: Duration,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: UNDERSTAT_BASE_URL.to_string(),
            script_index: 1,
            first_id: 1,
            last_id: 21_000,
            request_delay: Duration::from_millis(100),
            timeout: Duration::from_secs(30),
        }
    }
}

impl ScraperConfig {
    pub fn match_url(&self, match_id: u32) -> String {
        format!("{}/match/{}", self.base_url, match_id)
    }
}
