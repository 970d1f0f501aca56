//! Shared command plumbing: resolving the data directory, the teams file,
//! and the store they imply.

use std::path::PathBuf;

use crate::cli::DataArgs;
use crate::core::resolve_data_dir;
use crate::storage::{
    index::index_path,
    store::MatchStore,
    teams::{default_teams_path, TeamLeagueMap},
};
use crate::Result;

/// Resolved on-disk locations for one command invocation.
pub struct DataPaths {
    pub data_dir: PathBuf,
    pub teams_file: PathBuf,
}

impl DataPaths {
    pub fn from_args(args: &DataArgs) -> Self {
        let data_dir = resolve_data_dir(args.data_dir.clone());
        let teams_file = args
            .teams_file
            .clone()
            .unwrap_or_else(|| default_teams_path(&data_dir));
        Self {
            data_dir,
            teams_file,
        }
    }

    pub fn store(&self) -> MatchStore {
        MatchStore::new(&self.data_dir)
    }

    pub fn index_path(&self) -> PathBuf {
        index_path(&self.data_dir)
    }

    /// Load the team → league mapping; a missing file fails here, before
    /// any network or store work starts.
    pub fn load_teams(&self) -> Result<TeamLeagueMap> {
        TeamLeagueMap::load(&self.teams_file)
    }
}
