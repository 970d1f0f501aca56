//! The on-disk match store.
//!
//! Layout: `<data_dir>/Football_Data/<league>/<season>/<match_id>.json`,
//! one pretty-printed JSON array of shot rows per match. A file's
//! existence is the cache: matches already on disk are never re-fetched,
//! and there is no invalidation short of deleting the file.

use std::path::{Path, PathBuf};

use crate::cli::types::{League, Season};
use crate::understat::types::ShotEvent;
use crate::Result;

/// Name of the store directory under the data dir.
pub const STORE_DIR: &str = "Football_Data";

#[derive(Debug, Clone)]
pub struct MatchStore {
    root: PathBuf,
}

impl MatchStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            root: data_dir.as_ref().join(STORE_DIR),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn season_dir(&self, league: League, season: Season) -> PathBuf {
        self.root.join(league.as_str()).join(season.to_string())
    }

    pub fn match_path(&self, league: League, season: Season, match_id: u32) -> PathBuf {
        self.season_dir(league, season)
            .join(format!("{match_id}.json"))
    }

    /// The idempotency check: a present file means "skip the fetch".
    pub fn contains(&self, league: League, season: Season, match_id: u32) -> bool {
        self.match_path(league, season, match_id).is_file()
    }

    /// Create the season directory if needed, preserving existing files.
    pub fn ensure_season_dir(&self, league: League, season: Season) -> Result<()> {
        std::fs::create_dir_all(self.season_dir(league, season))?;
        Ok(())
    }

    /// Destroy and recreate one (league, season) directory.
    ///
    /// Destructive: every match file already stored for that exact pair is
    /// deleted. Callers must warn the operator before invoking this.
    pub fn init_season_dir(&self, league: League, season: Season) -> Result<()> {
        let dir = self.season_dir(league, season);
        if dir.is_dir() {
            std::fs::remove_dir_all(&dir)?;
        }
        std::fs::create_dir_all(&dir)?;
        Ok(())
    }

    /// Write one match's rows (home side then away side).
    pub fn write_match(
        &self,
        league: League,
        season: Season,
        match_id: u32,
        rows: &[ShotEvent],
    ) -> Result<()> {
        self.ensure_season_dir(league, season)?;
        let contents = serde_json::to_string_pretty(rows)?;
        std::fs::write(self.match_path(league, season, match_id), contents)?;
        Ok(())
    }

    pub fn read_match(&self, league: League, season: Season, match_id: u32) -> Result<Vec<ShotEvent>> {
        let contents = std::fs::read_to_string(self.match_path(league, season, match_id))?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Load every stored match of a season, in filename order.
    pub fn load_season(&self, league: League, season: Season) -> Result<Vec<ShotEvent>> {
        let mut rows = Vec::new();
        for path in self.season_files(league, season)? {
            let contents = std::fs::read_to_string(&path)?;
            let match_rows: Vec<ShotEvent> = serde_json::from_str(&contents)?;
            rows.extend(match_rows);
        }
        Ok(rows)
    }

    /// Find one match in a season directory by its exact team pair.
    pub fn find_match(
        &self,
        league: League,
        season: Season,
        home: &str,
        away: &str,
    ) -> Result<Option<Vec<ShotEvent>>> {
        for path in self.season_files(league, season)? {
            let contents = std::fs::read_to_string(&path)?;
            let match_rows: Vec<ShotEvent> = serde_json::from_str(&contents)?;
            if match_rows
                .first()
                .is_some_and(|r| r.h_team == home && r.a_team == away)
            {
                return Ok(Some(match_rows));
            }
        }
        Ok(None)
    }

    fn season_files(&self, league: League, season: Season) -> Result<Vec<PathBuf>> {
        let dir = self.season_dir(league, season);
        let mut files = Vec::new();
        if !dir.is_dir() {
            return Ok(files);
        }
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}
