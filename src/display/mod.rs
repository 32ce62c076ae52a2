pub mod cards;
pub mod markdown;
pub mod output;
