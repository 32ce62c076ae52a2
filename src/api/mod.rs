pub mod client;
pub mod endpoints;
pub mod insight;
pub mod models;
