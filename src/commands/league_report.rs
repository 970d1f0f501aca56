//! League report: per-team season averages and the player shot table,
//! one block per requested season.

use crate::analysis::export::{players_csv_path, write_players_csv};
use crate::analysis::league_summary::{summarize_league, LeagueSummary};
use crate::cli::{
    types::{League, Season},
    DataArgs,
};
use crate::Result;

use super::common::DataPaths;

/// How many players the printed table shows. The CSV export keeps all.
const PLAYER_TABLE_LEN: usize = 20;

/// Handle the league-report command.
pub async fn handle_league_report(
    data: DataArgs,
    league: League,
    seasons: Vec<Season>,
    players_csv: bool,
) -> Result<()> {
    let paths = DataPaths::from_args(&data);
    let store = paths.store();

    for season in seasons {
        let rows = store.load_season(league, season)?;
        if rows.is_empty() {
            println!("⚠ No stored matches for {}: {}, skipping", league, season);
            continue;
        }

        let summary = summarize_league(&rows);
        print_league_summary(&summary, league, season);

        if players_csv {
            let path = players_csv_path(store.root(), league, season);
            write_players_csv(&path, &summary.players)?;
            println!("✓ Player table written to {}", path.display());
        }
    }

    Ok(())
}

fn print_league_summary(summary: &LeagueSummary, league: League, season: Season) {
    println!("------------ {}: {} ------------", league, season);

    let width = summary
        .teams
        .iter()
        .map(|t| t.team.len())
        .max()
        .unwrap_or(4)
        .max(4);
    println!(
        "{:<width$} {:>7} {:>10} {:>10}",
        "Team",
        "Matches",
        "avg xG F",
        "avg xG A",
        width = width
    );
    for team in &summary.teams {
        println!(
            "{:<width$} {:>7} {:>10.3} {:>10.3}",
            team.team,
            team.matches,
            team.avg_xg_for,
            team.avg_xg_against,
            width = width
        );
    }
    println!(
        "League average xG per match: {:.3} for / {:.3} against",
        summary.league_avg_xg_for, summary.league_avg_xg_against
    );

    println!();
    println!("Top {} players by xG missed:", PLAYER_TABLE_LEN);
    println!(
        "{:<28} {:>8} {:>6} {:>10} {:>10}",
        "Player", "total xG", "goals", "xG scored", "xG missed"
    );
    for player in summary.players.iter().take(PLAYER_TABLE_LEN) {
        println!(
            "{:<28} {:>8.3} {:>6} {:>10.3} {:>10.3}",
            player.player, player.total_xg, player.goals, player.xg_scored, player.xg_missed
        );
    }
}
