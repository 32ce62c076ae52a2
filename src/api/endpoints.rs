// SummSync API paths, all POST with JSON bodies, relative to the configured
// base URL.

pub const CREATE: &str = "/player/create";
pub const STATS: &str = "/player/stats";
pub const MASTERY: &str = "/player/mastery";
pub const SOLO_INSIGHT: &str = "/ai-insight/solo/player";
pub const GROUP_INSIGHT: &str = "/ai-insight/group";
