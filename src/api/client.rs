use crate::config::Config;
use crate::error::AppError;
use crate::riot_id::RiotId;
use serde_json::{json, Value};
use std::time::Duration;

use super::endpoints;
use super::insight::InsightPayload;
use super::models::*;

/// Blocking client for the SummSync API. Shareable across threads, so the
/// orchestrator can issue AI-insight calls from background workers while the
/// main pipeline keeps the same agent.
pub struct SummSyncClient {
    config: Config,
    agent: ureq::Agent,
}

impl SummSyncClient {
    pub fn new(config: Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("summsync/0.1.0")
            .build();
        SummSyncClient { config, agent }
    }

    fn post(&self, path: &'static str, body: Value) -> Result<ureq::Response, AppError> {
        let url = format!("{}{}", self.config.api_base, path);
        self.agent
            .post(&url)
            .set("Content-Type", "application/json")
            .send_json(body)
            .map_err(|e| match e {
                ureq::Error::Status(status, resp) => AppError::ApiStatus {
                    endpoint: path,
                    status,
                    body: resp.into_string().unwrap_or_default(),
                },
                other => AppError::Connection(other.to_string()),
            })
    }

    fn player_body(session_id: &str, id: &RiotId) -> Value {
        json!({
            "sessionId": session_id,
            "playerName": id.player_name,
            "gameTag": id.game_tag,
        })
    }

    /// Creates a session for the given players. Returns the session id plus
    /// the server's per-player processing report.
    pub fn create_session(
        &self,
        players: &[RiotId],
        mastery_count: Option<u32>,
        force_refresh: bool,
    ) -> Result<(String, Vec<CreateResult>), AppError> {
        let players_json: Vec<Value> = players
            .iter()
            .map(|p| json!({"playerName": p.player_name, "gameTag": p.game_tag}))
            .collect();

        let mut body = json!({ "players": players_json });
        if let Some(count) = mastery_count {
            body["masteryCount"] = json!(count);
        }
        if force_refresh {
            body["forceRefresh"] = json!(true);
        }

        let resp = self.post(endpoints::CREATE, body).map_err(|e| match e {
            AppError::ApiStatus { status, body, .. } => {
                AppError::SessionCreate(format!("server returned HTTP {}: {}", status, body))
            }
            other => other,
        })?;

        let parsed: CreateSessionResponse = resp
            .into_json()
            .map_err(|e| AppError::JsonError(e.to_string()))?;

        let session_id = parsed
            .session_id
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                AppError::SessionCreate("response did not contain a session id".to_string())
            })?;

        Ok((session_id, parsed.results))
    }

    pub fn player_stats(&self, session_id: &str, id: &RiotId) -> Result<PlayerStats, AppError> {
        let resp = self.post(endpoints::STATS, Self::player_body(session_id, id))?;
        let parsed: StatsResponse = resp
            .into_json()
            .map_err(|e| AppError::JsonError(e.to_string()))?;
        Ok(parsed.stats)
    }

    pub fn player_mastery(
        &self,
        session_id: &str,
        id: &RiotId,
    ) -> Result<Vec<MasteryEntry>, AppError> {
        let resp = self.post(endpoints::MASTERY, Self::player_body(session_id, id))?;
        let parsed: MasteryResponse = resp
            .into_json()
            .map_err(|e| AppError::JsonError(e.to_string()))?;
        Ok(parsed.mastery)
    }

    /// Per-player AI insight. Informational only: every failure folds into
    /// fallback text instead of an error.
    pub fn solo_insight(&self, session_id: &str, id: &RiotId) -> String {
        let fetched = self
            .post(endpoints::SOLO_INSIGHT, Self::player_body(session_id, id))
            .and_then(|resp| {
                resp.into_json::<Value>()
                    .map_err(|e| AppError::JsonError(e.to_string()))
            });

        match fetched {
            Ok(body) => InsightPayload::decode(&body).into_text(),
            Err(e) => format!("Unable to generate AI insight: {}", e),
        }
    }

    /// Team-level AI insight, with friendlier text for the two failure modes
    /// the server signals deliberately (too few players, overload).
    pub fn group_insight(&self, session_id: &str) -> String {
        let fetched = self
            .post(endpoints::GROUP_INSIGHT, json!({ "sessionId": session_id }))
            .and_then(|resp| {
                resp.into_json::<Value>()
                    .map_err(|e| AppError::JsonError(e.to_string()))
            });

        match fetched {
            Ok(body) => InsightPayload::decode(&body).into_text(),
            Err(AppError::ApiStatus {
                status: 400, body, ..
            }) if body.contains("At least 2 players") => {
                "Unable to generate team AI insight at this time. At least 2 players are required for this insight"
                    .to_string()
            }
            Err(AppError::ApiStatus { status: 503, .. }) => {
                "Unable to generate team AI insight at this time. Too many requests are being done right now, please try again later."
                    .to_string()
            }
            Err(e) => format!(
                "Unable to generate team AI insight at this time. Error: {}",
                e
            ),
        }
    }
}
