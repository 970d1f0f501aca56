//! Typed wire model for the embedded shots payload.
//!
//! The remote source string-encodes every numeric field, so the
//! deserializers below accept either a JSON string or a bare number.
//! Decoding happens once, at the parse boundary; nothing downstream sees
//! raw payloads.

use serde::{de::Error, Deserialize, Deserializer, Serialize};


fn de_f64_lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Str(String),
    }
    match Raw::deserialize(deserializer)? {
        Raw::Num(n) => Ok(n),
        Raw::Str(s) => s.parse().map_err(D::Error::custom),
    }
}

fn de_u32_lenient<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(u32),
        Str(String),
    }
    match Raw::deserialize(deserializer)? {
        Raw::Num(n) => Ok(n),
        Raw::Str(s) => s.parse().map_err(D::Error::custom),
    }
}

/// Which side's attack a shot row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Side {
    #[serde(rename = "h")]
    Home,
    #[serde(rename = "a")]
    Away,
}

impl Side {
    /// The wire form, also used in CSV exports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Home => "h",
            Side::Away => "a",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shot outcome as reported by the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum ShotResult {
    Goal,
    OwnGoal,
    SavedShot,
    MissedShots,
    BlockedShot,
    ShotOnPost,
    /// Unrecognized outcome; kept rather than failing the whole match.
    #[serde(other)]
    Other,
}

impl ShotResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShotResult::Goal => "Goal",
            ShotResult::OwnGoal => "OwnGoal",
            ShotResult::SavedShot => "SavedShot",
            ShotResult::MissedShots => "MissedShots",
            ShotResult::BlockedShot => "BlockedShot",
            ShotResult::ShotOnPost => "ShotOnPost",
            ShotResult::Other => "Other",
        }
    }
}

impl std::fmt::Display for ShotResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Game situation the shot arose from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Situation {
    OpenPlay,
    FromCorner,
    SetPiece,
    DirectFreekick,
    Penalty,
    #[serde(other)]
    Other,
}

impl Situation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Situation::OpenPlay => "OpenPlay",
            Situation::FromCorner => "FromCorner",
            Situation::SetPiece => "SetPiece",
            Situation::DirectFreekick => "DirectFreekick",
            Situation::Penalty => "Penalty",
            Situation::Other => "Other",
        }
    }
}

impl std::fmt::Display for Situation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One shot-event row from a match page. Immutable once written to the store.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ShotEvent {
    /// Shot id, unique within the source.
    #[serde(deserialize_with = "de_u32_lenient")]
    pub id: u32,

    #[serde(deserialize_with = "de_u32_lenient")]
    pub minute: u32,

    pub result: ShotResult,

    /// Normalized pitch coordinates in [0, 1], attacking left to right.
    #[serde(rename = "X", deserialize_with = "de_f64_lenient")]
    pub x: f64,
    #[serde(rename = "Y", deserialize_with = "de_f64_lenient")]
    pub y: f64,

    /// Expected-goal value of the shot.
    #[serde(rename = "xG", deserialize_with = "de_f64_lenient")]
    pub xg: f64,

    pub player: String,

    #[serde(rename = "h_a")]
    pub side: Side,

    pub situation: Situation,

    /// Calendar start year of the season ("2021").
    pub season: String,

    #[serde(rename = "shotType", default)]
    pub shot_type: Option<String>,

    #[serde(deserialize_with = "de_u32_lenient")]
    pub match_id: u32,

    pub h_team: String,
    pub a_team: String,

    #[serde(deserialize_with = "de_u32_lenient")]
    pub h_goals: u32,
    #[serde(deserialize_with = "de_u32_lenient")]
    pub a_goals: u32,

    #[serde(default)]
    pub date: Option<String>,

    #[serde(default)]
    pub player_assisted: Option<String>,
}

impl ShotEvent {
    /// The team that took the shot.
    pub fn shooting_team(&self) -> &str {
        match self.side {
            Side::Home => &self.h_team,
            Side::Away => &self.a_team,
        }
    }

    /// The team the shot was taken against.
    pub fn conceding_team(&self) -> &str {
        match self.side {
            Side::Home => &self.a_team,
            Side::Away => &self.h_team,
        }
    }
}

/// The embedded payload: home-side and away-side shot rows.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MatchShots {
    pub h: Vec<ShotEvent>,
    pub a: Vec<ShotEvent>,
}

impl MatchShots {
    pub fn is_empty(&self) -> bool {
        self.h.is_empty() && self.a.is_empty()
    }

    /// Home rows followed by away rows, the order match files are written in.
    pub fn into_rows(self) -> Vec<ShotEvent> {
        let mut rows = self.h;
        rows.extend(self.a);
        rows
    }

    /// The first shot row of the match, preferring the home side.
    pub fn first_record(&self) -> Option<&ShotEvent> {
        self.h.first().or_else(|| self.a.first())
    }
}
