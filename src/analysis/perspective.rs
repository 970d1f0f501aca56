//! For/against reshaping.
//!
//! Every shot is an event *for* the team that took it and *against* the
//! team that conceded it. The doubled view lets league and team summaries
//! filter one flat list by (team, perspective) instead of special-casing
//! home and away columns.

use std::fmt;

use crate::understat::types::ShotEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Perspective {
    For,
    Against,
}

impl Perspective {
    pub fn as_str(&self) -> &'static str {
        match self {
            Perspective::For => "For",
            Perspective::Against => "Against",
        }
    }
}

impl fmt::Display for Perspective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One shot attributed to one team, from one perspective.
#[derive(Debug, Clone)]
pub struct PerspectiveShot<'a> {
    pub shot: &'a ShotEvent,
    /// The team this row is attributed to.
    pub team: &'a str,
    pub perspective: Perspective,
}

/// Double the rows: one `For` entry per shooter, one `Against` per conceder.
pub fn for_against_view(rows: &[ShotEvent]) -> Vec<PerspectiveShot<'_>> {
    let mut view = Vec::with_capacity(rows.len() * 2);
    for shot in rows {
        view.push(PerspectiveShot {
            shot,
            team: shot.shooting_team(),
            perspective: Perspective::For,
        });
        view.push(PerspectiveShot {
            shot,
            team: shot.conceding_team(),
            perspective: Perspective::Against,
        });
    }
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::understat::types::{ShotResult, Side, Situation};

    fn shot(side: Side) -> ShotEvent {
        ShotEvent {
            id: 1,
            minute: 10,
            result: ShotResult::Goal,
            x: 0.9,
            y: 0.5,
            xg: 0.4,
            player: "P".to_string(),
            side,
            situation: Situation::OpenPlay,
            season: "2021".to_string(),
            shot_type: None,
            match_id: 5,
            h_team: "Home FC".to_string(),
            a_team: "Away FC".to_string(),
            h_goals: 1,
            a_goals: 0,
            date: None,
            player_assisted: None,
        }
    }

    #[test]
    fn doubles_every_row() {
        let rows = vec![shot(Side::Home), shot(Side::Away)];
        let view = for_against_view(&rows);
        assert_eq!(view.len(), 4);
    }

    #[test]
    fn attributes_both_perspectives() {
        let rows = vec![shot(Side::Home)];
        let view = for_against_view(&rows);

        assert_eq!(view[0].team, "Home FC");
        assert_eq!(view[0].perspective, Perspective::For);
        assert_eq!(view[1].team, "Away FC");
        assert_eq!(view[1].perspective, Perspective::Against);
    }

    #[test]
    fn away_shots_flip_the_attribution() {
        let rows = vec![shot(Side::Away)];
        let view = for_against_view(&rows);

        assert_eq!(view[0].team, "Away FC");
        assert_eq!(view[0].perspective, Perspective::For);
        assert_eq!(view[1].team, "Home FC");
        assert_eq!(view[1].perspective, Perspective::Against);
    }
}
