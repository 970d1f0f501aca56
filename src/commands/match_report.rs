//! Single-match report: look a stored match up by team pair and print
//! its side-by-side xG table.

use crate::analysis::match_summary::{summarize_match, MatchSummary, TeamMatchSummary};
use crate::cli::{types::Season, DataArgs};
use crate::error::UnderstatError;
use crate::Result;

use super::common::DataPaths;

/// Handle the match-report command.
pub async fn handle_match_report(
    data: DataArgs,
    home: String,
    away: String,
    season: Season,
) -> Result<()> {
    let paths = DataPaths::from_args(&data);
    let teams = paths.load_teams()?;

    let home_league = teams.league_for(&home)?;
    let away_league = teams.league_for(&away)?;
    if home_league != away_league {
        return Err(UnderstatError::LeagueMismatch { home, away });
    }

    let store = paths.store();
    let rows = store
        .find_match(home_league, season, &home, &away)?
        .ok_or_else(|| UnderstatError::MatchNotFound {
            home: home.clone(),
            away: away.clone(),
            season: season.to_string(),
        })?;

    let summary = summarize_match(&rows).ok_or(UnderstatError::MatchNotFound {
        home,
        away,
        season: season.to_string(),
    })?;

    print_match_summary(&summary, season);
    Ok(())
}

fn print_match_summary(summary: &MatchSummary, season: Season) {
    let MatchSummary { home, away } = summary;
    let width = home.team.len().max(away.team.len()).max(12);

    println!(
        "------------ {} vs {} ({}) ------------",
        home.team, away.team, season
    );
    println!(
        "{:<24} {:>width$} {:>width$}",
        "", home.team, away.team,
        width = width
    );
    row("Goals", home.goals.to_string(), away.goals.to_string(), width);
    row("Total xG", format!("{:.3}", home.total_xg), format!("{:.3}", away.total_xg), width);
    row(
        "xG per chance",
        format!("{:.3}", home.xg_per_chance),
        format!("{:.3}", away.xg_per_chance),
        width,
    );
    row_counts("Number of chances", home, away, |s| s.chances, width);
    row_counts("Number of big chances", home, away, |s| s.big_chances, width);
    row_counts("Chances within the box", home, away, |s| s.chances_in_box, width);
}

fn row(label: &str, home: String, away: String, width: usize) {
    println!("{label:<24} {home:>width$} {away:>width$}");
}

fn row_counts(
    label: &str,
    home: &TeamMatchSummary,
    away: &TeamMatchSummary,
    get: impl Fn(&TeamMatchSummary) -> usize,
    width: usize,
) {
    row(label, get(home).to_string(), get(away).to_string(), width);
}
