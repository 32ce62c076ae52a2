use crate::error::AppError;
use crate::riot_id::RiotId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Handoff state between the search and results views: the roster that was
/// submitted and the session id the server issued for it.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedSession {
    pub players: Vec<RiotId>,
    #[serde(default)]
    pub session_id: Option<String>,
    pub saved_at: DateTime<Utc>,
}

pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn open() -> Self {
        let dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".summsync");

        let _ = fs::create_dir_all(&dir);

        SessionStore {
            path: dir.join("players.json"),
        }
    }

    pub fn at(path: PathBuf) -> Self {
        SessionStore { path }
    }

    /// Returns the saved state, or `None` when nothing was saved yet.
    pub fn load(&self) -> Result<Option<SavedSession>, AppError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => serde_json::from_str(&content).map(Some).map_err(|e| {
                AppError::StorageError(format!("Failed to parse saved session: {}", e))
            }),
            Err(_) => Ok(None),
        }
    }

    pub fn save(&self, players: &[RiotId], session_id: &str) -> Result<(), AppError> {
        let state = SavedSession {
            players: players.to_vec(),
            session_id: Some(session_id.to_string()),
            saved_at: Utc::now(),
        };

        let json = serde_json::to_string_pretty(&state)
            .map_err(|e| AppError::StorageError(format!("Failed to serialize session: {}", e)))?;

        fs::write(&self.path, json).map_err(|e| {
            AppError::StorageError(format!("Failed to write {}: {}", self.path.display(), e))
        })?;

        Ok(())
    }
}
