//! Discovery command: sweep the id space and rebuild the index file.

use crate::cli::{types::Season, DataArgs};
use crate::core::config::ScraperConfig;
use crate::storage::index::{classify, write_index};
use crate::sweep::discover_matches;
use crate::understat::UnderstatClient;
use crate::{Result, MIN_SEASON_YEAR};

use super::common::DataPaths;

/// Handle the find-ids command.
///
/// The teams file is loaded up front so a missing mapping fails before
/// the (long) sweep starts rather than after it.
pub async fn handle_find_ids(data: DataArgs, parallel: bool, verbose: bool) -> Result<()> {
    let paths = DataPaths::from_args(&data);
    let teams = paths.load_teams()?;

    let config = ScraperConfig::default();
    let client = UnderstatClient::new(&config)?;

    println!(
        "Sweeping match ids {}..{} ({})...",
        config.first_id,
        config.last_id,
        if parallel { "parallel" } else { "sequential" }
    );
    let discoveries = discover_matches(&client, &config, parallel).await?;
    println!("✓ {} ids resolved to matches", discoveries.len());

    let window = MIN_SEASON_YEAR..=Season::current().start_year();
    let groups = classify(&discoveries, &teams, window)?;

    let index_path = paths.index_path();
    write_index(&index_path, &groups)?;
    println!("✓ Index rewritten at {}", index_path.display());

    if verbose {
        for ((league, season), ids) in &groups {
            if !ids.is_empty() {
                println!("  {}: {}: {} matches", league, season, ids.len());
            }
        }
    }

    Ok(())
}
