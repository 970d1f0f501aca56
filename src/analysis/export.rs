//! CSV projections of the store: the season for/against export and the
//! league player table.

use std::path::Path;

use crate::cli::types::{League, Season};
use crate::understat::types::{ShotEvent, Side};
use crate::Result;

use super::{
    league_summary::PlayerXg,
    perspective::{for_against_view, PerspectiveShot},
    PITCH_X, PITCH_Y,
};

const SEASON_HEADER: [&str; 16] = [
    "result",
    "Xmod",
    "Ymod",
    "xG",
    "player",
    "h_a",
    "situation",
    "season",
    "match_id",
    "h_team",
    "a_team",
    "h_goals",
    "a_goals",
    "important_team",
    "league",
    "F/A",
];

/// Write the flat for/against season export, one row per shot and
/// perspective. Coordinates are projected to pitch meters, with away-side
/// shots mirrored so every shot points at the goal it was aimed at.
pub fn write_season_csv(path: &Path, league: League, rows: &[ShotEvent]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(SEASON_HEADER)?;

    for entry in for_against_view(rows) {
        writer.write_record(season_record(&entry, league))?;
    }
    writer.flush()?;
    Ok(())
}

/// Default location of a season export: `<store root>/<league>_<season>.csv`.
pub fn season_csv_path(store_root: &Path, league: League, season: Season) -> std::path::PathBuf {
    store_root.join(format!("{}_{}.csv", league, season))
}

/// Default location of a players export: `<store root>/players_<league>_<season>.csv`.
pub fn players_csv_path(store_root: &Path, league: League, season: Season) -> std::path::PathBuf {
    store_root.join(format!("players_{}_{}.csv", league, season))
}

fn season_record(entry: &PerspectiveShot<'_>, league: League) -> Vec<String> {
    let shot = entry.shot;
    let (xmod, ymod) = match shot.side {
        Side::Home => (shot.x * PITCH_X, shot.y * PITCH_Y),
        Side::Away => ((1.0 - shot.x) * PITCH_X, (1.0 - shot.y) * PITCH_Y),
    };
    vec![
        shot.result.to_string(),
        xmod.to_string(),
        ymod.to_string(),
        shot.xg.to_string(),
        shot.player.clone(),
        shot.side.to_string(),
        shot.situation.to_string(),
        shot.season.clone(),
        shot.match_id.to_string(),
        shot.h_team.clone(),
        shot.a_team.clone(),
        shot.h_goals.to_string(),
        shot.a_goals.to_string(),
        entry.team.to_string(),
        league.to_string(),
        entry.perspective.to_string(),
    ]
}

/// Write the per-player season table for a league report.
pub fn write_players_csv(path: &Path, players: &[PlayerXg]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["player", "total_xG", "goals", "xG_scored", "xG_missed"])?;
    for p in players {
        writer.write_record([
            p.player.clone(),
            p.total_xg.to_string(),
            p.goals.to_string(),
            p.xg_scored.to_string(),
            p.xg_missed.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::understat::types::{ShotResult, Situation};
    use tempfile::tempdir;

    fn shot(side: Side, x: f64, y: f64) -> ShotEvent {
        ShotEvent {
            id: 0,
            minute: 10,
            result: ShotResult::Goal,
            x,
            y,
            xg: 0.5,
            player: "Scorer".to_string(),
            side,
            situation: Situation::OpenPlay,
            season: "2021".to_string(),
            shot_type: None,
            match_id: 101,
            h_team: "Real Madrid".to_string(),
            a_team: "Celta Vigo".to_string(),
            h_goals: 1,
            a_goals: 0,
            date: None,
            player_assisted: None,
        }
    }

    fn la_liga_2021() -> Season {
        "2021-2022".parse().unwrap()
    }

    #[test]
    fn season_csv_has_header_and_doubled_rows() {
        let dir = tempdir().unwrap();
        let path = season_csv_path(dir.path(), League::LaLiga, la_liga_2021());
        let rows = vec![shot(Side::Home, 0.5, 0.5), shot(Side::Away, 0.5, 0.5)];

        write_season_csv(&path, League::LaLiga, &rows).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 5); // header + 2 shots x 2 perspectives
        assert_eq!(
            lines[0],
            "result,Xmod,Ymod,xG,player,h_a,situation,season,match_id,\
             h_team,a_team,h_goals,a_goals,important_team,league,F/A"
        );
        assert!(lines[1].contains("For"));
        assert!(lines[2].contains("Against"));
        assert!(lines[1].contains("LaLiga"));
    }

    #[test]
    fn coordinates_are_projected_and_mirrored() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        // Home at x = 0.8 projects to 76.52; away at x = 0.8 mirrors to 19.13.
        let rows = vec![shot(Side::Home, 0.8, 0.25), shot(Side::Away, 0.8, 0.25)];

        write_season_csv(&path, League::LaLiga, &rows).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();

        let home_x: f64 = lines[1].split(',').nth(1).unwrap().parse().unwrap();
        let away_x: f64 = lines[3].split(',').nth(1).unwrap().parse().unwrap();
        assert!((home_x - 0.8 * PITCH_X).abs() < 1e-9);
        assert!((away_x - 0.2 * PITCH_X).abs() < 1e-6);

        let home_y: f64 = lines[1].split(',').nth(2).unwrap().parse().unwrap();
        assert!((home_y - 0.25 * PITCH_Y).abs() < 1e-9);
    }

    #[test]
    fn players_csv_round_trips() {
        let dir = tempdir().unwrap();
        let path = players_csv_path(dir.path(), League::SerieA, la_liga_2021());
        let players = vec![PlayerXg {
            player: "Scorer".to_string(),
            total_xg: 1.5,
            goals: 2,
            xg_scored: 1.1,
            xg_missed: 0.4,
        }];

        write_players_csv(&path, &players).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("player,total_xG,goals,xG_scored,xG_missed"));
        assert!(contents.contains("Scorer,1.5,2,1.1,0.4"));
    }

    #[test]
    fn default_paths_name_league_and_season() {
        let path = season_csv_path(Path::new("/root"), League::Bundesliga, la_liga_2021());
        assert_eq!(path, Path::new("/root/Bundesliga_2021-2022.csv"));
        let path = players_csv_path(Path::new("/root"), League::Bundesliga, la_liga_2021());
        assert_eq!(path, Path::new("/root/players_Bundesliga_2021-2022.csv"));
    }
}
