//! Per-team season trends: open-play xG averages, big chances, and shot
//! distances, one row per season.

use std::collections::BTreeSet;

use crate::cli::types::Season;
use crate::understat::types::{ShotEvent, Situation};

use super::round3;

/// xG at or above which a shot counts as a big chance in team trends.
pub const TEAM_BIG_CHANCE_XG: f64 = 0.4;

// Goal coordinates in the source's own pitch units, used for distances.
const GOAL_X: f64 = 122.0;
const GOAL_Y: f64 = 40.0;

/// One season of a team's open-play numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamSeasonTrend {
    pub season: Season,
    pub matches: usize,
    pub avg_xg_for: f64,
    pub avg_xg_against: f64,
    pub big_chances_for_per_match: f64,
    pub big_chances_against_per_match: f64,
    pub avg_shot_distance_for: f64,
    pub avg_shot_distance_against: f64,
}

/// Summarize one team's season from that season's stored rows.
///
/// Only open-play shots count. `None` when the team appears in no row.
pub fn summarize_team_season(
    rows: &[ShotEvent],
    team: &str,
    season: Season,
) -> Option<TeamSeasonTrend> {
    let involved: BTreeSet<u32> = rows
        .iter()
        .filter(|s| s.h_team == team || s.a_team == team)
        .map(|s| s.match_id)
        .collect();
    if involved.is_empty() {
        return None;
    }
    let played = involved.len() as f64;

    let open_play = |s: &&ShotEvent| s.situation == Situation::OpenPlay;
    let for_shots: Vec<&ShotEvent> = rows
        .iter()
        .filter(|s| s.shooting_team() == team)
        .filter(open_play)
        .collect();
    let against_shots: Vec<&ShotEvent> = rows
        .iter()
        .filter(|s| s.conceding_team() == team)
        .filter(open_play)
        .collect();

    Some(TeamSeasonTrend {
        season,
        matches: involved.len(),
        avg_xg_for: round3(total_xg(&for_shots) / played),
        avg_xg_against: round3(total_xg(&against_shots) / played),
        big_chances_for_per_match: round3(big_chances(&for_shots) as f64 / played),
        big_chances_against_per_match: round3(big_chances(&against_shots) as f64 / played),
        avg_shot_distance_for: round3(mean_distance(&for_shots)),
        avg_shot_distance_against: round3(mean_distance(&against_shots)),
    })
}

fn total_xg(shots: &[&ShotEvent]) -> f64 {
    shots.iter().map(|s| s.xg).sum()
}

fn big_chances(shots: &[&ShotEvent]) -> usize {
    shots.iter().filter(|s| s.xg >= TEAM_BIG_CHANCE_XG).count()
}

/// Mean distance to goal; coordinates are shooter-relative so the same
/// formula serves both perspectives.
fn mean_distance(shots: &[&ShotEvent]) -> f64 {
    if shots.is_empty() {
        return 0.0;
    }
    let sum: f64 = shots
        .iter()
        .map(|s| {
            let dx = GOAL_X - s.x * GOAL_X;
            let dy = GOAL_Y - s.y * GOAL_Y;
            (dx * dx + dy * dy).sqrt()
        })
        .sum();
    sum / shots.len() as f64
}
