use crate::error::AppError;
use std::env;

pub const DEFAULT_API_BASE: &str =
    "https://6s6bu9zrxe.execute-api.us-west-1.amazonaws.com/summsync";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base: String,
    pub timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let api_base = env::var("SUMMSYNC_API_BASE")
            .unwrap_or_else(|_| DEFAULT_API_BASE.to_string())
            .trim_end_matches('/')
            .to_string();

        let timeout_secs = match env::var("SUMMSYNC_TIMEOUT_SECS") {
            Ok(raw) => raw.parse().map_err(|_| {
                AppError::ConfigError(format!(
                    "SUMMSYNC_TIMEOUT_SECS must be a number, got '{}'",
                    raw
                ))
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Config {
            api_base,
            timeout_secs,
        })
    }
}
