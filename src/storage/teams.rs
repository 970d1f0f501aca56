//! Team → league lookup loaded from `teams_dict.json`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::cli::types::League;
use crate::{Result, UnderstatError};

pub const TEAMS_FILE: &str = "teams_dict.json";

/// Default location of the mapping file, next to the data directory.
pub fn default_teams_path(data_dir: &Path) -> PathBuf {
    data_dir.join(TEAMS_FILE)
}

/// Static mapping from team name to league.
///
/// Every home or away team encountered during classification or per-team
/// loading must resolve here; a lookup miss is a configuration error, not
/// a transient one.
#[derive(Debug, Clone)]
pub struct TeamLeagueMap {
    map: HashMap<String, League>,
}

impl TeamLeagueMap {
    /// Load the mapping file. Absence of the file is fatal.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(UnderstatError::MissingTeamsFile {
                path: path.to_path_buf(),
            });
        }
        let contents = std::fs::read_to_string(path)?;
        let raw: HashMap<String, String> = serde_json::from_str(&contents)?;

        let mut map = HashMap::with_capacity(raw.len());
        for (team, league) in raw {
            map.insert(team, league.parse::<League>()?);
        }
        Ok(Self { map })
    }

    pub fn from_entries<I, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = (T, League)>,
        T: Into<String>,
    {
        Self {
            map: entries.into_iter().map(|(t, l)| (t.into(), l)).collect(),
        }
    }

    /// Resolve a team's league, failing with the offending team name.
    pub fn league_for(&self, team: &str) -> Result<League> {
        self.map
            .get(team)
            .copied()
            .ok_or_else(|| UnderstatError::UnknownTeam {
                team: team.to_string(),
            })
    }

    pub fn contains(&self, team: &str) -> bool {
        self.map.contains_key(team)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn loads_and_resolves() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(TEAMS_FILE);
        std::fs::write(
            &path,
            r#"{"Real Madrid": "LaLiga", "Arsenal": "PremierLeague"}"#,
        )
        .unwrap();

        let teams = TeamLeagueMap::load(&path).unwrap();
        assert_eq!(teams.len(), 2);
        assert_eq!(teams.league_for("Real Madrid").unwrap(), League::LaLiga);
        assert_eq!(
            teams.league_for("Arsenal").unwrap(),
            League::PremierLeague
        );
    }

    #[test]
    fn missing_file_is_fatal_and_names_the_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.json");
        let err = TeamLeagueMap::load(&path).unwrap_err();
        assert!(matches!(err, UnderstatError::MissingTeamsFile { .. }));
        assert!(err.to_string().contains("nope.json"));
    }

    #[test]
    fn unknown_team_is_fatal_and_names_the_team() {
        let teams = TeamLeagueMap::from_entries([("Real Madrid", League::LaLiga)]);
        let err = teams.league_for("Real Sociedad").unwrap_err();
        assert!(err.to_string().contains("Real Sociedad"));
    }

    #[test]
    fn unsupported_league_value_is_fatal() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(TEAMS_FILE);
        std::fs::write(&path, r#"{"Ajax": "Eredivisie"}"#).unwrap();

        let err = TeamLeagueMap::load(&path).unwrap_err();
        assert!(matches!(err, UnderstatError::UnsupportedLeague { .. }));
    }
}
