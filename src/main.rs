use clap::{Parser, Subcommand};
use indicatif::ProgressBar;
use std::sync::Arc;
use std::time::Duration;

use summsync::api::client::SummSyncClient;
use summsync::config::Config;
use summsync::display::cards;
use summsync::display::output::{display_error, display_info, display_success, display_warn};
use summsync::error::AppError;
use summsync::orchestrator::{ResultsOrchestrator, TEAM_INSIGHT_LABEL};
use summsync::riot_id::{RiotId, Roster};
use summsync::storage::SessionStore;

#[derive(Parser, Debug)]
#[command(name = "SummSync")]
#[command(about = "League of Legends team stats, mastery and AI insights", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a session for up to 5 Riot IDs and show their results
    Search {
        /// Riot IDs in Name#TAG form (1-5, unique)
        riot_ids: Vec<String>,

        /// How many top masteries the server should compute per player
        #[arg(long)]
        mastery_count: Option<u32>,

        /// Bypass the server-side player cache
        #[arg(long)]
        refresh: bool,
    },

    /// Re-render the results view for a saved or given session
    Results {
        /// Session id (defaults to the last one created by `search`)
        #[arg(short, long)]
        session: Option<String>,
    },

    /// Show only the team-level AI insight for a session
    Team {
        /// Session id (defaults to the last one created by `search`)
        #[arg(short, long)]
        session: Option<String>,
    },
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let config = Config::from_env()?;
    let client = Arc::new(SummSyncClient::new(config));
    let store = SessionStore::open();

    match args.command {
        Command::Search {
            riot_ids,
            mastery_count,
            refresh,
        } => search(&client, &store, &riot_ids, mastery_count, refresh),
        Command::Results { session } => results(&client, &store, session),
        Command::Team { session } => team(&client, &store, session),
    }
}

fn search(
    client: &Arc<SummSyncClient>,
    store: &SessionStore,
    riot_ids: &[String],
    mastery_count: Option<u32>,
    refresh: bool,
) -> Result<(), AppError> {
    if riot_ids.is_empty() {
        return Err(AppError::EmptyRoster);
    }

    // Validation happens before anything touches the network.
    let mut roster = Roster::new();
    for raw in riot_ids {
        roster.add(RiotId::parse(raw)?)?;
    }

    display_info(&format!(
        "Creating session for {} player(s)...",
        roster.len()
    ));

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Contacting SummSync API");
    spinner.enable_steady_tick(Duration::from_millis(120));

    let created = client.create_session(roster.players(), mastery_count, refresh);
    spinner.finish_and_clear();

    let (session_id, create_results) = created?;
    display_success(&format!("Session created: {}", session_id));

    for result in &create_results {
        let who = result.display_name();
        match result.error_message() {
            Some(err) => display_warn(&format!("{}: {}", who, err)),
            None if result.from_cache => {
                display_success(&format!("{}: loaded from server cache", who))
            }
            None if result.stored => display_success(&format!("{}: stats computed", who)),
            None => {}
        }
    }

    store.save(roster.players(), &session_id)?;

    // Navigation analog: hand off straight into the results view.
    let orchestrator = ResultsOrchestrator::new(Arc::clone(client));
    orchestrator.run(&session_id, roster.players())?;
    Ok(())
}

fn results(
    client: &Arc<SummSyncClient>,
    store: &SessionStore,
    session: Option<String>,
) -> Result<(), AppError> {
    let saved = store.load()?;

    let session_id = resolve_session(session, saved.as_ref().and_then(|s| s.session_id.clone()))?;
    let players = saved.map(|s| s.players).unwrap_or_default();
    if players.is_empty() {
        return Err(AppError::NoPlayers);
    }

    let orchestrator = ResultsOrchestrator::new(Arc::clone(client));
    orchestrator.run(&session_id, &players)?;
    Ok(())
}

fn team(
    client: &Arc<SummSyncClient>,
    store: &SessionStore,
    session: Option<String>,
) -> Result<(), AppError> {
    let saved = store.load()?;
    let session_id = resolve_session(session, saved.and_then(|s| s.session_id))?;

    println!("{}", cards::render_team_card_pending());
    let text = client.group_insight(&session_id);
    println!("{}", cards::render_insight(TEAM_INSIGHT_LABEL, &text));
    Ok(())
}

fn resolve_session(arg: Option<String>, saved: Option<String>) -> Result<String, AppError> {
    arg.or(saved)
        .filter(|s| !s.is_empty())
        .ok_or(AppError::MissingSession)
}
