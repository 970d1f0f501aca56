//! Integration tests for command handlers

use std::path::Path;

use tempfile::tempdir;
use understat_xg::{
    cli::DataArgs,
    commands::{
        league_report::handle_league_report, match_report::handle_match_report,
        team_report::handle_team_report,
    },
    storage::store::MatchStore,
    League, Season, ShotEvent, ShotResult, Side, Situation, UnderstatError,
};

fn data_args(dir: &Path) -> DataArgs {
    DataArgs {
        data_dir: Some(dir.to_path_buf()),
        teams_file: None,
    }
}

fn write_teams_file(dir: &Path) {
    std::fs::write(
        dir.join("teams_dict.json"),
        r#"{
            "Real Madrid": "LaLiga",
            "Celta Vigo": "LaLiga",
            "Arsenal": "PremierLeague"
        }"#,
    )
    .unwrap();
}

fn shot(match_id: u32, side: Side, xg: f64, result: ShotResult) -> ShotEvent {
    ShotEvent {
        id: match_id * 100,
        minute: 55,
        result,
        x: 0.88,
        y: 0.48,
        xg,
        player: "Karim Benzema".to_string(),
        side,
        situation: Situation::OpenPlay,
        season: "2021".to_string(),
        shot_type: None,
        match_id,
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

fn seed_store(dir: &Path) {
    let store = MatchStore::new(dir);
    store
        .write_match(
            League::LaLiga,
            la_liga_2021(),
            101,
            &[
                shot(101, Side::Home, 0.6, ShotResult::Goal),
                shot(101, Side::Away, 0.2, ShotResult::SavedShot),
            ],
        )
        .unwrap();
}

#[tokio::test]
async fn match_report_finds_the_stored_match() {
    let dir = tempdir().unwrap();
    write_teams_file(dir.path());
    seed_store(dir.path());

    let result = handle_match_report(
        data_args(dir.path()),
        "Real Madrid".to_string(),
        "Celta Vigo".to_string(),
        la_liga_2021(),
    )
    .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn match_report_fails_without_teams_file() {
    let dir = tempdir().unwrap();

    let err = handle_match_report(
        data_args(dir.path()),
        "Real Madrid".to_string(),
        "Celta Vigo".to_string(),
        la_liga_2021(),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, UnderstatError::MissingTeamsFile { .. }));
}

#[tokio::test]
async fn match_report_rejects_unknown_team() {
    let dir = tempdir().unwrap();
    write_teams_file(dir.path());

    let err = handle_match_report(
        data_args(dir.path()),
        "Sporting Gijon".to_string(),
        "Celta Vigo".to_string(),
        la_liga_2021(),
    )
    .await
    .unwrap_err();
    match err {
        UnderstatError::UnknownTeam { team } => assert_eq!(team, "Sporting Gijon"),
        other => panic!("expected UnknownTeam, got {other}"),
    }
}

#[tokio::test]
async fn match_report_rejects_cross_league_pairs() {
    let dir = tempdir().unwrap();
    write_teams_file(dir.path());

    let err = handle_match_report(
        data_args(dir.path()),
        "Real Madrid".to_string(),
        "Arsenal".to_string(),
        la_liga_2021(),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, UnderstatError::LeagueMismatch { .. }));
}

#[tokio::test]
async fn match_report_reports_missing_matches() {
    let dir = tempdir().unwrap();
    write_teams_file(dir.path());
    seed_store(dir.path());

    // Stored as Real Madrid (home) vs Celta Vigo; the reverse fixture is
    // a different match and must not be found.
    let err = handle_match_report(
        data_args(dir.path()),
        "Celta Vigo".to_string(),
        "Real Madrid".to_string(),
        la_liga_2021(),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, UnderstatError::MatchNotFound { .. }));
}

#[tokio::test]
async fn league_report_runs_over_the_stored_season() {
    let dir = tempdir().unwrap();
    write_teams_file(dir.path());
    seed_store(dir.path());

    let result = handle_league_report(
        data_args(dir.path()),
        League::LaLiga,
        vec![la_liga_2021()],
        true,
    )
    .await;
    assert!(result.is_ok());

    let store = MatchStore::new(dir.path());
    let players_csv = store.root().join("players_LaLiga_2021-2022.csv");
    assert!(players_csv.is_file());
    let contents = std::fs::read_to_string(&players_csv).unwrap();
    assert!(contents.contains("Karim Benzema"));
}

#[tokio::test]
async fn league_report_skips_empty_seasons() {
    let dir = tempdir().unwrap();
    write_teams_file(dir.path());

    // Nothing stored: the handler warns and moves on rather than failing.
    let result = handle_league_report(
        data_args(dir.path()),
        League::LaLiga,
        vec![la_liga_2021()],
        false,
    )
    .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn team_report_resolves_the_league_from_the_teams_file() {
    let dir = tempdir().unwrap();
    write_teams_file(dir.path());
    seed_store(dir.path());

    let result = handle_team_report(
        data_args(dir.path()),
        "Real Madrid".to_string(),
        vec![la_liga_2021()],
    )
    .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn team_report_rejects_unmapped_teams() {
    let dir = tempdir().unwrap();
    write_teams_file(dir.path());

    let err = handle_team_report(
        data_args(dir.path()),
        "Ajax".to_string(),
        vec![la_liga_2021()],
    )
    .await
    .unwrap_err();
    assert!(matches!(err, UnderstatError::UnknownTeam { .. }));
}
