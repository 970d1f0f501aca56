//! The closed set of supported leagues.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, UnderstatError};

/// One of the five leagues with data on the remote source.
///
/// Extending this set is a code change: the variant name doubles as the
/// on-disk directory name and the `league_ids.dat` record key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum League {
    Ligue1,
    PremierLeague,
    Bundesliga,
    LaLiga,
    SerieA,
}

impl League {
    pub const ALL: [League; 5] = [
        League::Ligue1,
        League::PremierLeague,
        League::Bundesliga,
        League::LaLiga,
        League::SerieA,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            League::Ligue1 => "Ligue1",
            League::PremierLeague => "PremierLeague",
            League::Bundesliga => "Bundesliga",
            League::LaLiga => "LaLiga",
            League::SerieA => "SerieA",
        }
    }

    fn available() -> String {
        Self::ALL
            .iter()
            .map(|l| l.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for League {
    type Err = UnderstatError;

    fn from_str(s: &str) -> Result<Self> {
        League::ALL
            .into_iter()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| UnderstatError::UnsupportedLeague {
                league: s.to_string(),
                available: League::available(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_supported_league() {
        for league in League::ALL {
            let round_trip: League = league.as_str().parse().unwrap();
            assert_eq!(round_trip, league);
        }
    }

    #[test]
    fn rejects_unknown_league_and_names_it() {
        let err = "Eredivisie".parse::<League>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Eredivisie"));
        assert!(msg.contains("PremierLeague"));
    }

    #[test]
    fn rejects_wrong_case() {
        assert!("laliga".parse::<League>().is_err());
    }
}
