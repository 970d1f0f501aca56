//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use types::{League, Season};

/// Arguments locating the on-disk data shared by every command
#[derive(Debug, Args)]
pub struct DataArgs {
    /// Data directory (or set `UNDERSTAT_XG_DATA_DIR` env var).
    #[clap(long)]
    pub data_dir: Option<PathBuf>,

    /// Path to the team-to-league mapping file (default: `<data-dir>/teams_dict.json`).
    #[clap(long)]
    pub teams_file: Option<PathBuf>,
}

#[derive(Debug, Parser)]
#[clap(name = "understat-xg", about = "Understat shot/xG scraping and analysis CLI")]
pub struct UnderstatXg {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sweep the match-id space and rebuild the league/season index file.
    ///
    /// Scans every candidate id, keeps the ones that resolve to a real
    /// match, classifies them by the home team's league, and overwrites
    /// `league_ids.dat`.
    FindIds {
        #[clap(flatten)]
        data: DataArgs,

        /// Fetch candidate ids concurrently (pool sized to the CPU count).
        #[clap(long)]
        parallel: bool,

        /// Print per-league line counts when done.
        #[clap(long)]
        verbose: bool,
    },

    /// Fetch and store shot data for every indexed match not yet on disk.
    Update {
        #[clap(flatten)]
        data: DataArgs,

        /// League to update (repeatable): `-l LaLiga -l SerieA`.
        #[clap(long = "league", short, required = true)]
        leagues: Vec<League>,

        /// Season to update (repeatable): `-s 2021-2022`.
        #[clap(long = "season", short, required = true)]
        seasons: Vec<Season>,

        /// Also write one for/against CSV per (league, season).
        #[clap(long)]
        csv: bool,

        /// Delete and re-fetch each requested (league, season) directory.
        /// Destructive: existing match files for those pairs are lost.
        #[clap(long)]
        fresh: bool,

        /// Print per-match progress.
        #[clap(long)]
        verbose: bool,
    },

    /// Print the shot/xG summary table for one match.
    MatchReport {
        #[clap(flatten)]
        data: DataArgs,

        /// Home team name, exactly as it appears in the teams file.
        #[clap(long)]
        home: String,

        /// Away team name, exactly as it appears in the teams file.
        #[clap(long)]
        away: String,

        /// Season the match was played in.
        #[clap(long, short)]
        season: Season,
    },

    /// Print league tables: per-team xG averages and the player top 20.
    LeagueReport {
        #[clap(flatten)]
        data: DataArgs,

        /// League to analyze.
        #[clap(long, short)]
        league: League,

        /// Season to analyze (repeatable).
        #[clap(long = "season", short, required = true)]
        seasons: Vec<Season>,

        /// Also write one player-statistics CSV per season.
        #[clap(long)]
        players_csv: bool,
    },

    /// Print one team's per-season open-play xG trend table.
    TeamReport {
        #[clap(flatten)]
        data: DataArgs,

        /// Team name, exactly as it appears in the teams file.
        #[clap(long)]
        team: String,

        /// Season to include (repeatable).
        #[clap(long = "season", short, required = true)]
        seasons: Vec<Season>,
    },
}
