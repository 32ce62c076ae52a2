use crate::api::client::SummSyncClient;
use crate::api::models::{MasteryEntry, PlayerStats};
use crate::display::cards;
use crate::display::output::display_info;
use crate::error::AppError;
use crate::riot_id::RiotId;
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;

pub const TEAM_INSIGHT_LABEL: &str = "Team AI Insight";

/// What one player's card attempt produced. Exactly one outcome per player,
/// independent of every other player's.
#[derive(Debug)]
pub enum CardOutcome {
    Data {
        stats: PlayerStats,
        mastery: Vec<MasteryEntry>,
    },
    Failed {
        reason: String,
    },
}

#[derive(Debug)]
pub struct RunSummary {
    /// Per-player outcomes, in roster order.
    pub outcomes: Vec<(RiotId, CardOutcome)>,
    /// Resolved insights (solo and team), in completion order.
    pub insights: Vec<(String, String)>,
}

/// Drives the results view. The main pipeline runs at concurrency 1: player
/// N+1's fetches start only after player N's card is rendered. AI-insight
/// fetches are handed to background threads the moment a card renders and
/// are drained after the loop, so they resolve in whatever order the server
/// answers, racing each other and the main loop.
pub struct ResultsOrchestrator {
    client: Arc<SummSyncClient>,
}

impl ResultsOrchestrator {
    pub fn new(client: Arc<SummSyncClient>) -> Self {
        ResultsOrchestrator { client }
    }

    pub fn run(&self, session_id: &str, players: &[RiotId]) -> Result<RunSummary, AppError> {
        if session_id.is_empty() {
            return Err(AppError::MissingSession);
        }
        if players.is_empty() {
            return Err(AppError::NoPlayers);
        }

        let (tx, rx) = mpsc::channel::<(String, String)>();
        let mut outcomes = Vec::with_capacity(players.len());

        for (idx, player) in players.iter().enumerate() {
            display_info(&format!(
                "Fetching data for player {}/{}: {}",
                idx + 1,
                players.len(),
                player
            ));

            match self.fetch_player_data(session_id, player) {
                Ok((stats, mastery)) => {
                    println!("{}", cards::render_player_card(player, &stats, &mastery));
                    self.spawn_solo_insight(session_id, player, tx.clone());
                    outcomes.push((player.clone(), CardOutcome::Data { stats, mastery }));
                }
                Err(err) => {
                    let reason = err.to_string();
                    println!("{}", cards::render_error_card(player, &reason));
                    outcomes.push((player.clone(), CardOutcome::Failed { reason }));
                }
            }
        }

        println!("{}", cards::render_team_card_pending());
        self.spawn_team_insight(session_id, tx.clone());

        // The loop's sender is dropped here, so the channel closes once the
        // last background fetch reports in.
        drop(tx);

        let mut insights = Vec::new();
        for (label, text) in rx {
            println!("{}", cards::render_insight(&label, &text));
            insights.push((label, text));
        }

        Ok(RunSummary { outcomes, insights })
    }

    /// Stats, then mastery. A failure in either marks the whole player as
    /// failed; mastery is never requested after a stats failure.
    fn fetch_player_data(
        &self,
        session_id: &str,
        player: &RiotId,
    ) -> Result<(PlayerStats, Vec<MasteryEntry>), AppError> {
        let stats = self.client.player_stats(session_id, player)?;
        let mastery = self.client.player_mastery(session_id, player)?;
        Ok((stats, mastery))
    }

    fn spawn_solo_insight(
        &self,
        session_id: &str,
        player: &RiotId,
        tx: mpsc::Sender<(String, String)>,
    ) {
        let client = Arc::clone(&self.client);
        let session_id = session_id.to_string();
        let player = player.clone();
        thread::spawn(move || {
            let text = client.solo_insight(&session_id, &player);
            // A closed receiver means the view is gone; nothing to patch.
            let _ = tx.send((format!("AI Insight for {}", player), text));
        });
    }

    fn spawn_team_insight(&self, session_id: &str, tx: mpsc::Sender<(String, String)>) {
        let client = Arc::clone(&self.client);
        let session_id = session_id.to_string();
        thread::spawn(move || {
            let text = client.group_insight(&session_id);
            let _ = tx.send((TEAM_INSIGHT_LABEL.to_string(), text));
        });
    }
}
