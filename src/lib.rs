pub mod api;
pub mod config;
pub mod display;
pub mod error;
pub mod orchestrator;
pub mod riot_id;
pub mod storage;
