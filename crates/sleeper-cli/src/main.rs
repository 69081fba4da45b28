//! Sleeper CLI - view a Sleeper fantasy football league from the terminal.
//!
//! League data is read through a local disk cache; a stale cache is
//! refreshed once at startup before the requested view is printed.

mod cli;

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use clap::Parser;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sleeper_core::cache::{CacheKey, CacheManager};
use sleeper_core::models::LeagueId;
use sleeper_core::report::{league_table, users_table, MatchupReportBuilder, RosterJoinEngine, Table};
use sleeper_core::{
    refresh_all, refresh_if_stale, ApiClient, Config, Discovery, LeagueClient, LeagueDirectory,
    SEASON_WEEKS,
};

use cli::{ambiguous_search_hint, Cli, Command};

/// Initialize the tracing subscriber for logging.
/// Use RUST_LOG to control the level (e.g., RUST_LOG=debug).
fn init_tracing(log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let Some(path) = log_file else {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr))
            .with(filter)
            .init();
        return Ok(None);
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("Invalid log file path: {}", path.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .with(filter)
        .init();
    Ok(Some(guard))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let _log_guard = init_tracing(cli.log_file.as_deref())?;
    info!("Sleeper CLI starting");

    let mut config = Config::load().unwrap_or_else(|e| {
        warn!(error = %e, "Ignoring unreadable config");
        Config::default()
    });

    let api = ApiClient::with_base_url(&cli.base_url).context("Failed to create HTTP client")?;
    let cache_dir = config.cache_dir(cli.cache_dir.as_deref());
    let cache = CacheManager::new(cache_dir.clone())
        .with_context(|| format!("Failed to create cache directory {}", cache_dir.display()))?;
    let season = cli.season.unwrap_or_else(|| Local::now().year());

    let Some(league_id) = select_league(&cli, &api, &config, season).await? else {
        return Ok(());
    };

    let client = LeagueClient::for_league(api, cache, league_id);
    let command = cli.command.clone().unwrap_or(Command::League);

    if command.refreshes_stale_cache() {
        if let Some(summary) = refresh_if_stale(&client)
            .await
            .context("Failed to refresh stale cache")?
        {
            eprintln!("{}", summary.status_message());
        }
    }

    run_command(&client, &command, cli.force).await?;

    config.remember_league(client.league_id().as_str(), cli.username.as_deref());
    if let Err(e) = config.save() {
        warn!(error = %e, "Failed to save config");
    }

    info!("Sleeper CLI done");
    Ok(())
}

/// Decide which league to open: `--id`, discovery via `--user`, or the
/// league remembered from the previous run.
async fn select_league(
    cli: &Cli,
    api: &ApiClient,
    config: &Config,
    season: i32,
) -> Result<Option<LeagueId>> {
    if let Some(ref league_id) = cli.league_id {
        return Ok(Some(league_id.clone()));
    }

    if let Some(ref username) = cli.username {
        let query = cli.league_name.as_deref().unwrap_or_default();
        let directory = LeagueDirectory::new(api.clone());
        let outcome = directory
            .search(username, query, season)
            .await
            .context("League search failed")?;

        let matches = match outcome {
            Discovery::Matches(matches) => matches,
            other => {
                println!("{}", other.status_message().unwrap_or_default());
                return Ok(None);
            }
        };

        let mut table = Table::new(["League Name", "League ID", "Season"]);
        for league in &matches {
            table.push_row(vec![league.name.clone(), league.league_id.clone(), league.season.clone()]);
        }
        println!("{}", table.render());
        if let Some(hint) = ambiguous_search_hint(matches.len(), cli.command.as_ref()) {
            println!("{hint}");
        }

        return match (matches.as_slice(), &cli.command) {
            ([only], Some(_)) => {
                println!();
                Ok(Some(only.league_id.parse()?))
            }
            _ => Ok(None),
        };
    }

    match config.last_league_id {
        Some(ref league_id) => Ok(Some(league_id.parse()?)),
        None => anyhow::bail!("No league selected: pass --id <LEAGUE_ID> or --user <USERNAME>"),
    }
}

async fn run_command(client: &LeagueClient, command: &Command, force: bool) -> Result<()> {
    match command {
        Command::League => {
            let league = client.league(force).await?;
            println!("{}", league_table(&league).render());
        }
        Command::Users => {
            let users = client.users(force).await?;
            println!("{}", users_table(&users).render());
        }
        Command::Rosters => {
            let rosters = client.rosters(force).await?;
            let users = client.users(false).await?;
            let players = client.players().await?;
            let engine = RosterJoinEngine::new(&users, &players);
            println!("{}", engine.roster_table(&rosters).render());
        }
        Command::Matchups { week, by_team } => {
            let matchups = client.matchups(*week, force).await?;
            let league = client.league(false).await?;
            let rosters = client.rosters(false).await?;
            let users = client.users(false).await?;
            let players = client.players().await?;

            let builder = MatchupReportBuilder::new(Some(&league), &rosters, &users, &players);
            if *by_team {
                println!("{}", builder.team_table(&matchups).render());
            } else {
                println!("{}", builder.render(*week, &matchups));
            }
        }
        Command::Lineup { owner } => {
            let rosters = client.rosters(force).await?;
            let users = client.users(false).await?;
            let players = client.players().await?;
            let engine = RosterJoinEngine::new(&users, &players);

            match engine.find_roster(&rosters, owner) {
                Some(roster) => println!("{}", engine.lineup_table(roster).render()),
                None => println!("No roster found for owner '{}'", owner),
            }
        }
        Command::Refresh => {
            let summary = refresh_all(client).await?;
            println!("{}", summary.status_message());
        }
        Command::Status => {
            println!("{}", status_table(client).render());
        }
    }
    Ok(())
}

/// Age of every cached resource of the league.
fn status_table(client: &LeagueClient) -> Table {
    let cache = client.cache();
    let id = client.league_id();

    let mut keys: Vec<CacheKey<'_>> = client.core_keys().to_vec();
    keys.push(CacheKey::Players);
    keys.extend(SEASON_WEEKS.map(|week| CacheKey::Matchups(id, week)));

    let mut table = Table::new(["Resource", "Updated", "Stale"]);
    for key in keys {
        let name = key.to_string();
        let Some(age) = cache.age_display(&name) else {
            // Unfetched weeks are not worth a row
            if matches!(key, CacheKey::Matchups(..)) {
                continue;
            }
            table.push_row(vec![name, "never".to_string(), "yes".to_string()]);
            continue;
        };
        let stale = if cache.is_stale(&name) { "yes" } else { "no" };
        table.push_row(vec![name, age, stale.to_string()]);
    }
    table
}
