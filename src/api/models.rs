use serde::Deserialize;
use serde_json::Value;

// /player/create response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionResponse {
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub results: Vec<CreateResult>,
}

/// Per-player outcome reported by the create endpoint. `error` is either a
/// bare string or a `{code, message}` object depending on where the server
/// failed.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateResult {
    #[serde(default)]
    pub player_name: Option<String>,
    #[serde(default)]
    pub game_tag: Option<String>,
    #[serde(default)]
    pub stored: bool,
    #[serde(default)]
    pub from_cache: bool,
    #[serde(default)]
    pub error: Option<Value>,
}

impl CreateResult {
    pub fn display_name(&self) -> String {
        match (&self.player_name, &self.game_tag) {
            (Some(name), Some(tag)) => format!("{}#{}", name, tag),
            (Some(name), None) => name.clone(),
            _ => "unknown player".to_string(),
        }
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(|err| match err {
            Value::String(s) => s.clone(),
            Value::Object(obj) => obj
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| err.to_string()),
            other => other.to_string(),
        })
    }
}

// /player/stats response: the aggregate sits under a `stats` key next to
// echo fields we do not need.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    #[serde(default)]
    pub stats: PlayerStats,
}

/// Recent-match averages for one player. Every field is optional: the server
/// aggregate has grown over time and older sessions may miss newer fields,
/// so absence renders as "N/A" rather than failing the decode.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    #[serde(default)]
    pub kda: Option<f64>,
    #[serde(default)]
    pub kp: Option<f64>,
    #[serde(default)]
    pub gold_per_min: Option<f64>,
    #[serde(default)]
    pub cs: Option<f64>,
    #[serde(default)]
    pub cs_per_min: Option<f64>,
    #[serde(default)]
    pub vision_score: Option<f64>,
    #[serde(default)]
    pub vision_per_min: Option<f64>,
    #[serde(default)]
    pub wards_placed: Option<f64>,
    #[serde(default)]
    pub wards_killed: Option<f64>,
    #[serde(default)]
    pub obj_damage: Option<f64>,
    #[serde(default)]
    pub most_played_role: Option<String>,
    #[serde(default)]
    pub ranked_solo: Option<RankedEntry>,
    #[serde(default)]
    pub ranked_flex: Option<RankedEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedEntry {
    pub tier: String,
    pub rank: String,
}

// /player/mastery response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasteryResponse {
    #[serde(default)]
    pub mastery: Vec<MasteryEntry>,
}

/// One champion-mastery record, server-ordered descending by points.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasteryEntry {
    #[serde(default)]
    pub champion_name: Option<String>,
    #[serde(default)]
    pub champion_level: Option<u32>,
    #[serde(default)]
    pub champion_points: Option<u64>,
}
