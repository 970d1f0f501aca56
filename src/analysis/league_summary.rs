//! League-season descriptive statistics: per-team xG averages and the
//! player shot table.

use std::collections::{BTreeMap, BTreeSet};

use crate::understat::types::{ShotEvent, ShotResult};

use super::{
    perspective::{for_against_view, Perspective},
    round3,
};

/// One team's season averages.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamSeasonXg {
    pub team: String,
    pub matches: usize,
    pub avg_xg_for: f64,
    pub avg_xg_against: f64,
}

/// One player's season shot totals.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerXg {
    pub player: String,
    pub total_xg: f64,
    pub goals: usize,
    /// xG of the shots that went in.
    pub xg_scored: f64,
    /// xG of the shots that did not.
    pub xg_missed: f64,
}

#[derive(Debug, Clone)]
pub struct LeagueSummary {
    /// Sorted by average xG difference, best first.
    pub teams: Vec<TeamSeasonXg>,
    pub league_avg_xg_for: f64,
    pub league_avg_xg_against: f64,
    /// Sorted by xG missed, largest first.
    pub players: Vec<PlayerXg>,
}

/// Summarize one league season's rows.
pub fn summarize_league(rows: &[ShotEvent]) -> LeagueSummary {
    let view = for_against_view(rows);

    // Distinct matches per team, the divisor for per-match averages.
    let mut matches: BTreeMap<&str, BTreeSet<u32>> = BTreeMap::new();
    for row in rows {
        matches.entry(&row.h_team).or_default().insert(row.match_id);
        matches.entry(&row.a_team).or_default().insert(row.match_id);
    }

    let mut xg_for: BTreeMap<&str, f64> = BTreeMap::new();
    let mut xg_against: BTreeMap<&str, f64> = BTreeMap::new();
    for entry in &view {
        let bucket = match entry.perspective {
            Perspective::For => &mut xg_for,
            Perspective::Against => &mut xg_against,
        };
        *bucket.entry(entry.team).or_default() += entry.shot.xg;
    }

    let mut teams: Vec<TeamSeasonXg> = matches
        .iter()
        .map(|(team, ids)| {
            let played = ids.len().max(1) as f64;
            TeamSeasonXg {
                team: team.to_string(),
                matches: ids.len(),
                avg_xg_for: round3(xg_for.get(team).copied().unwrap_or(0.0) / played),
                avg_xg_against: round3(xg_against.get(team).copied().unwrap_or(0.0) / played),
            }
        })
        .collect();
    teams.sort_by(|a, b| {
        let diff_a = a.avg_xg_for - a.avg_xg_against;
        let diff_b = b.avg_xg_for - b.avg_xg_against;
        diff_b.total_cmp(&diff_a)
    });

    let team_count = teams.len().max(1) as f64;
    let league_avg_xg_for = round3(teams.iter().map(|t| t.avg_xg_for).sum::<f64>() / team_count);
    let league_avg_xg_against =
        round3(teams.iter().map(|t| t.avg_xg_against).sum::<f64>() / team_count);

    LeagueSummary {
        teams,
        league_avg_xg_for,
        league_avg_xg_against,
        players: player_table(rows),
    }
}

/// Per-player totals over one season, sorted by xG missed.
pub fn player_table(rows: &[ShotEvent]) -> Vec<PlayerXg> {
    let mut by_player: BTreeMap<&str, PlayerXg> = BTreeMap::new();
    for shot in rows {
        let entry = by_player
            .entry(&shot.player)
            .or_insert_with(|| PlayerXg {
                player: shot.player.clone(),
                total_xg: 0.0,
                goals: 0,
                xg_scored: 0.0,
                xg_missed: 0.0,
            });
        entry.total_xg += shot.xg;
        if shot.result == ShotResult::Goal {
            entry.goals += 1;
            entry.xg_scored += shot.xg;
        } else {
            entry.xg_missed += shot.xg;
        }
    }

    let mut players: Vec<PlayerXg> = by_player
        .into_values()
        .map(|mut p| {
            p.total_xg = round3(p.total_xg);
            p.xg_scored = round3(p.xg_scored);
            p.xg_missed = round3(p.xg_missed);
            p
        })
        .collect();
    players.sort_by(|a, b| b.xg_missed.total_cmp(&a.xg_missed));
    players
}
