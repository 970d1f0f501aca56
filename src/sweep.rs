//! ID discovery sweep.
//!
//! Probes every candidate match id in the configured range and keeps the
//! ones that resolve to a real match. Ids that fail to fetch or parse are
//! recorded as misses and never abort the sweep; only a sweep where every
//! id misses is an error.

use std::sync::Arc;

use tokio::{sync::Semaphore, task::JoinSet};

use crate::core::config::ScraperConfig;
use crate::understat::{types::MatchShots, ShotSource};
use crate::{Result, UnderstatError};

/// One id that resolved to a real match during the sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredMatch {
    pub match_id: u32,
    /// Calendar start year of the season ("2021"), as reported by the source.
    pub season: String,
    pub h_team: String,
    pub a_team: String,
}

impl DiscoveredMatch {
    fn from_shots(shots: &MatchShots) -> Option<Self> {
        let first = shots.first_record()?;
        Some(Self {
            match_id: first.match_id,
            season: first.season.clone(),
            h_team: first.h_team.clone(),
            a_team: first.a_team.clone(),
        })
    }
}

/// Sweep the configured id range.
///
/// In parallel mode all ids are fetched through a pool bounded to the
/// available hardware concurrency; completions are collected unordered.
/// There is no early exit: the whole range is always probed.
pub async fn discover_matches<S>(
    source: &S,
    config: &ScraperConfig,
    parallel: bool,
) -> Result<Vec<DiscoveredMatch>>
where
    S: ShotSource + Clone + 'static,
{
    let hits = if parallel {
        discover_parallel(source, config).await
    } else {
        discover_sequential(source, config).await
    };

    if hits.is_empty() {
        return Err(UnderstatError::SweepExhausted);
    }
    Ok(hits)
}

async fn discover_sequential<S: ShotSource>(
    source: &S,
    config: &ScraperConfig,
) -> Vec<DiscoveredMatch> {
    let mut hits = Vec::new();
    for match_id in config.first_id..config.last_id {
        if let Some(hit) = probe(source, match_id).await {
            hits.push(hit);
        }
    }
    hits
}

async fn discover_parallel<S>(source: &S, config: &ScraperConfig) -> Vec<DiscoveredMatch>
where
    S: ShotSource + Clone + 'static,
{
    let workers = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4);
    let semaphore = Arc::new(Semaphore::new(workers));
    let mut tasks = JoinSet::new();

    for match_id in config.first_id..config.last_id {
        let source = source.clone();
        let semaphore = Arc::clone(&semaphore);
        tasks.spawn(async move {
            // Holds a permit for the duration of one fetch; the semaphore
            // is never closed while tasks are running.
            let _permit = semaphore.acquire_owned().await.ok()?;
            probe(&source, match_id).await
        });
    }

    let mut hits = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        if let Ok(Some(hit)) = joined {
            hits.push(hit);
        }
    }
    hits
}

async fn probe<S: ShotSource>(source: &S, match_id: u32) -> Option<DiscoveredMatch> {
    let shots = source.fetch_match_shots(match_id).await?;
    DiscoveredMatch::from_shots(&shots)
}
