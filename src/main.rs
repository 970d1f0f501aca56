//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use understat_xg::{
    cli::{Commands, UnderstatXg},
    commands::{
        find_ids::handle_find_ids,
        league_report::handle_league_report,
        match_report::handle_match_report,
        team_report::handle_team_report,
        update_data::{handle_update, UpdateParams},
    },
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = UnderstatXg::parse();

    match app.command {
        Commands::FindIds {
            data,
            parallel,
            verbose,
        } => handle_find_ids(data, parallel, verbose).await?,

        Commands::Update {
            data,
            leagues,
            seasons,
            csv,
            fresh,
            verbose,
        } => {
            handle_update(
                data,
                UpdateParams {
                    leagues,
                    seasons,
                    csv,
                    fresh,
                    verbose,
                },
            )
            .await?
        }

        Commands::MatchReport {
            data,
            home,
            away,
            season,
        } => handle_match_report(data, home, away, season).await?,

        Commands::LeagueReport {
            data,
            league,
            seasons,
            players_csv,
        } => handle_league_report(data, league, seasons, players_csv).await?,

        Commands::TeamReport {
            data,
            team,
            seasons,
        } => handle_team_report(data, team, seasons).await?,
    }

    Ok(())
}
