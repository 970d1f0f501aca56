//! Single-match descriptive statistics.

use crate::understat::types::{ShotEvent, ShotResult, Side};

use super::{round3, PITCH_X, PITCH_Y};

/// xG above which a shot counts as a big chance in match tables.
pub const BIG_CHANCE_XG: f64 = 0.3;

const BOX_DEPTH: f64 = 16.5;
const BOX_Y_MIN: f64 = 15.0;
const BOX_Y_MAX: f64 = 55.0;

/// One side's totals for a match.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamMatchSummary {
    pub team: String,
    pub goals: u32,
    pub total_xg: f64,
    pub xg_per_chance: f64,
    pub chances: usize,
    pub big_chances: usize,
    pub chances_in_box: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchSummary {
    pub home: TeamMatchSummary,
    pub away: TeamMatchSummary,
}

/// Summarize one match's rows. `None` when the row set is empty.
pub fn summarize_match(rows: &[ShotEvent]) -> Option<MatchSummary> {
    let first = rows.first()?;
    let (h_team, a_team) = (first.h_team.clone(), first.a_team.clone());
    let (h_goals, a_goals) = (first.h_goals, first.a_goals);

    Some(MatchSummary {
        home: side_summary(rows, Side::Home, h_team, h_goals),
        away: side_summary(rows, Side::Away, a_team, a_goals),
    })
}

fn side_summary(rows: &[ShotEvent], side: Side, team: String, goals: u32) -> TeamMatchSummary {
    let shots: Vec<&ShotEvent> = rows.iter().filter(|s| s.side == side).collect();
    let chances = shots.len();
    let total_xg: f64 = shots.iter().map(|s| s.xg).sum();
    let big_chances = shots.iter().filter(|s| s.xg > BIG_CHANCE_XG).count();
    let chances_in_box = shots.iter().filter(|s| in_box(s)).count();

    TeamMatchSummary {
        team,
        goals,
        total_xg: round3(total_xg),
        xg_per_chance: if chances == 0 {
            0.0
        } else {
            round3(total_xg / chances as f64)
        },
        chances,
        big_chances,
        chances_in_box,
    }
}

/// Whether a shot was taken inside the opposition box. Away coordinates
/// are mirrored onto the away team's attacking end.
fn in_box(shot: &ShotEvent) -> bool {
    let (x, y) = match shot.side {
        Side::Home => (shot.x * PITCH_X, shot.y * PITCH_Y),
        Side::Away => ((1.0 - shot.x) * PITCH_X, (1.0 - shot.y) * PITCH_Y),
    };
    let depth_ok = match shot.side {
        Side::Home => x >= PITCH_X - BOX_DEPTH,
        Side::Away => x <= BOX_DEPTH,
    };
    depth_ok && (BOX_Y_MIN..=BOX_Y_MAX).contains(&y)
}

/// True when the shot scored, for goal tallies in reports.
pub fn is_goal(shot: &ShotEvent) -> bool {
    shot.result == ShotResult::Goal
}
