use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MAX_PLAYERS: usize = 5;

const MAX_TAG_LEN: usize = 5;

/// A Riot account identifier in `Name#TAG` form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiotId {
    pub player_name: String,
    pub game_tag: String,
}

impl RiotId {
    /// Parses `Name#TAG`: the name is everything before the first `#`
    /// (trimmed, non-empty), the tag is 1-5 ASCII alphanumerics.
    pub fn parse(input: &str) -> Result<Self, AppError> {
        let (name, tag) = input
            .trim()
            .split_once('#')
            .ok_or_else(|| AppError::InvalidRiotId(input.to_string()))?;

        let name = name.trim();
        let tag_ok = !tag.is_empty()
            && tag.len() <= MAX_TAG_LEN
            && tag.chars().all(|c| c.is_ascii_alphanumeric());

        if name.is_empty() || !tag_ok {
            return Err(AppError::InvalidRiotId(input.to_string()));
        }

        Ok(RiotId {
            player_name: name.to_string(),
            game_tag: tag.to_string(),
        })
    }

    fn dedup_key(&self) -> String {
        self.to_string().to_lowercase()
    }
}

impl fmt::Display for RiotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.player_name, self.game_tag)
    }
}

/// The batch of players for one session. Capped at [`MAX_PLAYERS`], unique
/// case-insensitively.
#[derive(Debug, Default)]
pub struct Roster {
    players: Vec<RiotId>,
}

impl Roster {
    pub fn new() -> Self {
        Roster::default()
    }

    pub fn add(&mut self, id: RiotId) -> Result<(), AppError> {
        if self.is_full() {
            return Err(AppError::RosterFull);
        }
        let key = id.dedup_key();
        if self.players.iter().any(|p| p.dedup_key() == key) {
            return Err(AppError::DuplicatePlayer(id.to_string()));
        }
        self.players.push(id);
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.players.len() >= MAX_PLAYERS
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn players(&self) -> &[RiotId] {
        &self.players
    }
}
