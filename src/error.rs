//! Error types for the understat xG scraper CLI

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, UnderstatError>;

#[derive(Error, Debug)]
pub enum UnderstatError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid season '{season}': {reason}")]
    InvalidSeason { season: String, reason: String },

    #[error("Unavailable league '{league}'; supported leagues are {available}")]
    UnsupportedLeague { league: String, available: String },

    #[error("Team '{team}' does not exist; please update the teams file")]
    UnknownTeam { team: String },

    #[error("Teams file '{path}' does not exist")]
    MissingTeamsFile { path: PathBuf },

    #[error("No match identifiers in the scanned range resolved to a match")]
    SweepExhausted,

    #[error("Malformed index line '{line}': {reason}")]
    IndexLine { line: String, reason: String },

    #[error("Failed to parse integer: {0}")]
    InvalidInt(#[from] std::num::ParseIntError),

    #[error("No match between '{home}' and '{away}' found in season {season}")]
    MatchNotFound {
        home: String,
        away: String,
        season: String,
    },

    #[error("Teams '{home}' and '{away}' do not play in the same league")]
    LeagueMismatch { home: String, away: String },
}
