//! Team report: one open-play trend row per requested season.

use crate::analysis::team_summary::{summarize_team_season, TeamSeasonTrend};
use crate::cli::{types::Season, DataArgs};
use crate::Result;

use super::common::DataPaths;

/// Handle the team-report command. The team's league comes from the
/// teams file, so the team name must match understat's exactly.
pub async fn handle_team_report(data: DataArgs, team: String, seasons: Vec<Season>) -> Result<()> {
    let paths = DataPaths::from_args(&data);
    let teams = paths.load_teams()?;
    let league = teams.league_for(&team)?;
    let store = paths.store();

    println!("------------ {} ({}) ------------", team, league);
    print_header();

    for season in seasons {
        let rows = store.load_season(league, season)?;
        match summarize_team_season(&rows, &team, season) {
            Some(trend) => print_trend(&trend),
            None => println!("⚠ {} has no stored matches in {}", team, season),
        }
    }

    Ok(())
}

fn print_header() {
    println!(
        "{:<11} {:>7} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8}",
        "Season", "Matches", "xG F", "xG A", "BC F", "BC A", "Dist F", "Dist A"
    );
}

fn print_trend(trend: &TeamSeasonTrend) {
    println!(
        "{:<11} {:>7} {:>8.3} {:>8.3} {:>8.3} {:>8.3} {:>8.3} {:>8.3}",
        trend.season.to_string(),
        trend.matches,
        trend.avg_xg_for,
        trend.avg_xg_against,
        trend.big_chances_for_per_match,
        trend.big_chances_against_per_match,
        trend.avg_shot_distance_for,
        trend.avg_shot_distance_against,
    )
}
