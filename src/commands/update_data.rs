//! Bulk update command: fetch and store every indexed match not yet on
//! disk, one (league, season) pair at a time.

use std::collections::BTreeSet;
use std::time::Duration;

use crate::analysis::export::{season_csv_path, write_season_csv};
use crate::cli::{
    types::{League, Season},
    DataArgs,
};
use crate::core::config::ScraperConfig;
use crate::storage::{index::read_index, store::MatchStore};
use crate::understat::{ShotSource, UnderstatClient};
use crate::{Result, ShotEvent};

use super::common::DataPaths;

pub struct UpdateParams {
    pub leagues: Vec<League>,
    pub seasons: Vec<Season>,
    pub csv: bool,
    pub fresh: bool,
    pub verbose: bool,
}

/// Counters for one (league, season) pass.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// Matches fetched, parsed, and written.
    pub fetched: usize,
    /// Matches skipped because their file already exists.
    pub skipped: usize,
    /// Ids that fetched or parsed to nothing, or failed to write.
    pub failed: usize,
}

/// Handle the update command.
pub async fn handle_update(data: DataArgs, params: UpdateParams) -> Result<()> {
    let paths = DataPaths::from_args(&data);
    let store = paths.store();

    let leagues: BTreeSet<League> = params.leagues.iter().copied().collect();
    let seasons: BTreeSet<Season> = params.seasons.iter().copied().collect();
    let index = read_index(&paths.index_path(), &leagues, &seasons)?;

    let config = ScraperConfig::default();
    let client = UnderstatClient::new(&config)?;

    for league in &leagues {
        for season in &seasons {
            let Some(ids) = index.get(&(*league, *season)) else {
                println!("⚠ {}: {}: not in the index, skipping", league, season);
                continue;
            };

            if params.fresh {
                println!(
                    "⚠ Deleting all stored matches for {}/{} before re-fetching",
                    league, season
                );
                store.init_season_dir(*league, *season)?;
            }

            println!("Updating {}: {} ({} indexed matches)...", league, season, ids.len());
            let (outcome, aggregate) = update_league_season(
                &client,
                &store,
                *league,
                *season,
                ids,
                config.request_delay,
                params.verbose,
            )
            .await?;
            println!(
                "✓ {}: {}: {} fetched, {} cached, {} unavailable",
                league, season, outcome.fetched, outcome.skipped, outcome.failed
            );

            if params.csv {
                let path = season_csv_path(store.root(), *league, *season);
                write_season_csv(&path, *league, &aggregate)?;
                println!("✓ Season CSV written to {}", path.display());
            }
        }
    }

    Ok(())
}

/// Update one (league, season) pair from any shot source.
///
/// Per id: an already-stored match skips without touching the network; a
/// fetch or parse miss contributes nothing and the pass continues; a write
/// failure is fatal for that file only. Fetches are spaced by `delay`.
pub async fn update_league_season<S: ShotSource>(
    source: &S,
    store: &MatchStore,
    league: League,
    season: Season,
    ids: &BTreeSet<u32>,
    delay: Duration,
    verbose: bool,
) -> Result<(UpdateOutcome, Vec<ShotEvent>)> {
    let mut outcome = UpdateOutcome::default();
    let mut aggregate: Vec<ShotEvent> = Vec::new();

    for &match_id in ids {
        if store.contains(league, season, match_id) {
            outcome.skipped += 1;
            if verbose {
                println!("  {} already stored", match_id);
            }
            continue;
        }

        let shots = source.fetch_match_shots(match_id).await;
        tokio::time::sleep(delay).await;

        let Some(shots) = shots else {
            outcome.failed += 1;
            if verbose {
                println!("  ⚠ {} returned no data", match_id);
            }
            continue;
        };

        let rows = shots.into_rows();
        match store.write_match(league, season, match_id, &rows) {
            Ok(()) => {
                outcome.fetched += 1;
                if verbose {
                    println!("  ✓ {} stored ({} shots)", match_id, rows.len());
                }
                aggregate.extend(rows);
            }
            Err(e) => {
                outcome.failed += 1;
                eprintln!("  ⚠ failed to write match {}: {}", match_id, e);
            }
        }
    }

    Ok((outcome, aggregate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::understat::types::{MatchShots, ShotResult, Side, Situation};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tempfile::tempdir;

    #[derive(Clone)]
    struct CountingSource {
        live: Vec<u32>,
        calls: Arc<AtomicUsize>,
    }

    impl CountingSource {
        fn new(live: Vec<u32>) -> Self {
            Self {
                live,
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    fn stub_shots(match_id: u32) -> MatchShots {
        let shot = ShotEvent {
            id: match_id,
            minute: 1,
            result: ShotResult::Goal,
            x: 0.9,
            y: 0.5,
            xg: 0.6,
            player: "P".to_string(),
            side: Side::Home,
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
        };
        MatchShots {
            h: vec![shot],
            a: vec![],
        }
    }

    impl ShotSource for CountingSource {
        async fn fetch_match_shots(&self, match_id: u32) -> Option<MatchShots> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.live.contains(&match_id).then(|| stub_shots(match_id))
        }
    }

    fn season() -> Season {
        "2021-2022".parse().unwrap()
    }

    #[tokio::test]
    async fn fetches_misses_and_writes_files() {
        let dir = tempdir().unwrap();
        let store = MatchStore::new(dir.path());
        let source = CountingSource::new(vec![101, 103]);
        let ids = BTreeSet::from([101, 102, 103]);

        let (outcome, aggregate) = update_league_season(
            &source,
            &store,
            League::LaLiga,
            season(),
            &ids,
            Duration::ZERO,
            false,
        )
        .await
        .unwrap();

        assert_eq!(outcome.fetched, 2);
        assert_eq!(outcome.failed, 1);
        assert_eq!(outcome.skipped, 0);
        assert_eq!(source.calls(), 3);
        assert_eq!(aggregate.len(), 2);

        assert!(store.contains(League::LaLiga, season(), 101));
        assert!(store.contains(League::LaLiga, season(), 103));
        assert!(!store.contains(League::LaLiga, season(), 102));
    }

    #[tokio::test]
    async fn cached_matches_cause_zero_fetches_and_identical_bytes() {
        let dir = tempdir().unwrap();
        let store = MatchStore::new(dir.path());
        let ids = BTreeSet::from([101]);

        // First pass populates the store.
        let source = CountingSource::new(vec![101]);
        update_league_season(
            &source,
            &store,
            League::LaLiga,
            season(),
            &ids,
            Duration::ZERO,
            false,
        )
        .await
        .unwrap();
        assert_eq!(source.calls(), 1);

        let path = store.match_path(League::LaLiga, season(), 101);
        let before = std::fs::read(&path).unwrap();

        // Second pass must not fetch and must not touch the file.
        let source = CountingSource::new(vec![101]);
        let (outcome, aggregate) = update_league_season(
            &source,
            &store,
            League::LaLiga,
            season(),
            &ids,
            Duration::ZERO,
            false,
        )
        .await
        .unwrap();

        assert_eq!(source.calls(), 0);
        assert_eq!(outcome.skipped, 1);
        assert_eq!(outcome.fetched, 0);
        assert!(aggregate.is_empty());
        assert_eq!(std::fs::read(&path).unwrap(), before);
    }

    #[tokio::test]
    async fn all_failures_do_not_abort_the_pass() {
        let dir = tempdir().unwrap();
        let store = MatchStore::new(dir.path());
        let source = CountingSource::new(vec![]);
        let ids = BTreeSet::from([1, 2, 3]);

        let (outcome, aggregate) = update_league_season(
            &source,
            &store,
            League::SerieA,
            season(),
            &ids,
            Duration::ZERO,
            false,
        )
        .await
        .unwrap();

        assert_eq!(outcome.failed, 3);
        assert_eq!(outcome.fetched, 0);
        assert!(aggregate.is_empty());
    }
}
