use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid Riot ID '{0}'. Use format: Name#TAG (tag is 1-5 letters or digits)")]
    InvalidRiotId(String),

    #[error("Duplicate Riot ID: {0}")]
    DuplicatePlayer(String),

    #[error("A session holds at most 5 players")]
    RosterFull,

    #[error("No players given. Pass 1-5 Riot IDs in Name#TAG form")]
    EmptyRoster,

    #[error("Could not create session: {0}")]
    SessionCreate(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("{endpoint} API returned {status}: {body}")]
    ApiStatus {
        endpoint: &'static str,
        status: u16,
        body: String,
    },

    #[error("No session id found. Run `summsync search` first or pass --session")]
    MissingSession,

    #[error("No saved players found. Run `summsync search` first")]
    NoPlayers,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),

    #[error("Storage error: {0}")]
    StorageError(String),
}
