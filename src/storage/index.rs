//! League/season classifier and the `league_ids.dat` index file.
//!
//! Line format: `<League>: <startYear>-<endYear>: <id-or-range>*`.
//! An id token containing a hyphen is an inclusive range; the reader
//! treats `5-8` and `5 6 7 8` as the same input. The file is the sole
//! durable record connecting leagues and seasons to match ids, and it is
//! fully rewritten on every discovery sweep.

use std::collections::{BTreeMap, BTreeSet};
use std::io::{BufRead, BufReader, Write};
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use crate::cli::types::{League, Season};
use crate::storage::teams::TeamLeagueMap;
use crate::sweep::DiscoveredMatch;
use crate::{Result, UnderstatError};

pub const INDEX_FILE: &str = "league_ids.dat";

pub type IndexGroups = BTreeMap<(League, Season), BTreeSet<u32>>;

pub fn index_path(data_dir: &Path) -> PathBuf {
    data_dir.join(INDEX_FILE)
}

/// Group discovered matches by (home team's league, season).
///
/// Every (league, year) pair in the window gets a group, empty or not, so
/// the written index always carries the full grid. Discoveries outside
/// the year window are dropped; an unresolvable home team is fatal.
pub fn classify(
    discoveries: &[DiscoveredMatch],
    teams: &TeamLeagueMap,
    years: RangeInclusive<u16>,
) -> Result<IndexGroups> {
    let mut groups: IndexGroups = BTreeMap::new();
    for league in League::ALL {
        for year in years.clone() {
            groups.insert((league, Season::from_start_year(year)), BTreeSet::new());
        }
    }

    for discovery in discoveries {
        let league = teams.league_for(&discovery.h_team)?;
        let Ok(year) = discovery.season.parse::<u16>() else {
            continue;
        };
        if let Some(ids) = groups.get_mut(&(league, Season::from_start_year(year))) {
            ids.insert(discovery.match_id);
        }
    }

    Ok(groups)
}

/// Overwrite the index file with the given grouping.
pub fn write_index(path: &Path, groups: &IndexGroups) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = std::fs::File::create(path)?;
    for ((league, season), ids) in groups {
        writeln!(file, "{}: {}: {}", league, season, compress_ids(ids))?;
    }
    Ok(())
}

/// Read the index back, keeping only the requested leagues and seasons.
pub fn read_index(
    path: &Path,
    leagues: &BTreeSet<League>,
    seasons: &BTreeSet<Season>,
) -> Result<IndexGroups> {
    let file = std::fs::File::open(path)?;
    let reader = BufReader::new(file);

    let mut groups = IndexGroups::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let mut parts = line.splitn(3, ':');
        let (Some(league_str), Some(season_str), Some(ids_str)) =
            (parts.next(), parts.next(), parts.next())
        else {
            return Err(UnderstatError::IndexLine {
                line,
                reason: "expected '<league>: <season>: <ids>'".to_string(),
            });
        };

        // Match by string first so foreign league names in a hand-edited
        // file are skipped rather than rejected.
        let league = match league_str.trim().parse::<League>() {
            Ok(l) if leagues.contains(&l) => l,
            _ => continue,
        };
        let season = match season_str.trim().parse::<Season>() {
            Ok(s) if seasons.contains(&s) => s,
            _ => continue,
        };

        let ids = expand_tokens(ids_str)?;
        groups.entry((league, season)).or_default().extend(ids);
    }
    Ok(groups)
}

/// Expand a whitespace-separated id list; hyphen tokens are inclusive ranges.
pub fn expand_tokens(ids_str: &str) -> Result<BTreeSet<u32>> {
    let mut ids = BTreeSet::new();
    for token in ids_str.split_whitespace() {
        match token.split_once('-') {
            Some((start, end)) => {
                let start: u32 = start.parse()?;
                let end: u32 = end.parse()?;
                if start > end {
                    return Err(UnderstatError::IndexLine {
                        line: token.to_string(),
                        reason: "range start exceeds range end".to_string(),
                    });
                }
                ids.extend(start..=end);
            }
            None => {
                ids.insert(token.parse()?);
            }
        }
    }
    Ok(ids)
}

/// Render a sorted id set, compressing contiguous runs to `start-end`.
pub fn compress_ids(ids: &BTreeSet<u32>) -> String {
    let mut tokens: Vec<String> = Vec::new();
    let mut iter = ids.iter().copied();

    let Some(mut run_start) = iter.next() else {
        return String::new();
    };
    let mut run_end = run_start;

    for id in iter {
        if id == run_end + 1 {
            run_end = id;
            continue;
        }
        tokens.push(render_run(run_start, run_end));
        run_start = id;
        run_end = id;
    }
    tokens.push(render_run(run_start, run_end));
    tokens.join(" ")
}

fn render_run(start: u32, end: u32) -> String {
    if start == end {
        start.to_string()
    } else {
        format!("{}-{}", start, end)
    }
}
