use crate::api::models::{MasteryEntry, PlayerStats, RankedEntry};
use crate::riot_id::RiotId;
use colored::*;
use tabled::{settings::Style, Table, Tabled};

use super::markdown;

const NOT_AVAILABLE: &str = "N/A";
const TOP_MASTERY_COUNT: usize = 3;
const CARD_WIDTH: usize = 60;

#[derive(Tabled)]
struct StatRow {
    #[tabled(rename = "Stat")]
    name: String,
    #[tabled(rename = "Average")]
    value: String,
}

#[derive(Tabled)]
struct MasteryRow {
    #[tabled(rename = "Champion")]
    champion: String,
    #[tabled(rename = "Level")]
    level: String,
    #[tabled(rename = "Points")]
    points: String,
}

/// Role code to terminal glyph. Unknown or missing roles get a generic
/// placeholder, matching how the server reports roles it could not classify.
pub fn lane_icon(role: Option<&str>) -> &'static str {
    match role {
        Some("TOP") => "⬆ Top",
        Some("JUNGLE") => "❈ Jungle",
        Some("MIDDLE") | Some("MID") => "◆ Mid",
        Some("BOTTOM") => "⬇ Bot",
        Some("UTILITY") | Some("SUPPORT") => "✚ Support",
        _ => "? Unknown",
    }
}

fn fmt_f64(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{:.*}", decimals, v),
        None => NOT_AVAILABLE.to_string(),
    }
}

fn fmt_percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}%", v * 100.0),
        None => NOT_AVAILABLE.to_string(),
    }
}

fn fmt_thousands(value: Option<f64>) -> String {
    let whole = match value {
        Some(v) => v.round() as i64,
        None => return NOT_AVAILABLE.to_string(),
    };

    let digits = whole.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if whole < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

fn rank_display(entry: Option<&RankedEntry>) -> String {
    match entry {
        Some(r) => format!("{} {}", r.tier, r.rank),
        None => "Unranked".to_string(),
    }
}

pub fn render_player_card(player: &RiotId, stats: &PlayerStats, mastery: &[MasteryEntry]) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "\n{}\n",
        format!("🎮 {}", player).bold().cyan()
    ));
    out.push_str(&format!("{}\n", "=".repeat(CARD_WIDTH).cyan()));

    out.push_str(&format!(
        "  Solo: {}   Flex: {}\n",
        rank_display(stats.ranked_solo.as_ref()).yellow(),
        rank_display(stats.ranked_flex.as_ref()).yellow(),
    ));
    out.push_str(&format!(
        "  Most played role: {}\n",
        lane_icon(stats.most_played_role.as_deref())
    ));

    out.push_str(&format!("\n{}\n", "Stats".bold()));
    let stat_rows = vec![
        StatRow {
            name: "KDA".to_string(),
            value: fmt_f64(stats.kda, 2),
        },
        StatRow {
            name: "Kill participation".to_string(),
            value: fmt_percent(stats.kp),
        },
        StatRow {
            name: "Gold/min".to_string(),
            value: fmt_f64(stats.gold_per_min, 1),
        },
        StatRow {
            name: "CS per game".to_string(),
            value: fmt_f64(stats.cs, 1),
        },
        StatRow {
            name: "CS/min".to_string(),
            value: fmt_f64(stats.cs_per_min, 2),
        },
        StatRow {
            name: "Vision score".to_string(),
            value: fmt_f64(stats.vision_score, 1),
        },
        StatRow {
            name: "Vision/min".to_string(),
            value: fmt_f64(stats.vision_per_min, 2),
        },
        StatRow {
            name: "Wards placed".to_string(),
            value: fmt_f64(stats.wards_placed, 1),
        },
        StatRow {
            name: "Wards killed".to_string(),
            value: fmt_f64(stats.wards_killed, 1),
        },
        StatRow {
            name: "Objective damage".to_string(),
            value: fmt_thousands(stats.obj_damage),
        },
    ];
    let mut table = Table::new(stat_rows);
    table.with(Style::rounded());
    out.push_str(&format!("{}\n", table));

    out.push_str(&format!("\n{}\n", "Top 3 Mastery".bold()));
    if mastery.is_empty() {
        out.push_str("No mastery data available.\n");
    } else {
        let mastery_rows: Vec<MasteryRow> = mastery
            .iter()
            .take(TOP_MASTERY_COUNT)
            .map(|m| MasteryRow {
                champion: m
                    .champion_name
                    .clone()
                    .unwrap_or_else(|| "Unknown".to_string()),
                level: m
                    .champion_level
                    .map(|l| format!("Lvl {}", l))
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                points: m
                    .champion_points
                    .map(|p| fmt_thousands(Some(p as f64)))
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            })
            .collect();
        let mut table = Table::new(mastery_rows);
        table.with(Style::rounded());
        out.push_str(&format!("{}\n", table));
    }

    out.push_str(&format!(
        "\n{} {}\n",
        "AI Insight:".bold(),
        "pending, will appear below once generated...".dimmed()
    ));

    out
}

/// Shown in place of a data card when the player's stats or mastery fetch
/// failed. The remaining players are unaffected.
pub fn render_error_card(player: &RiotId, reason: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n{}\n", format!("🎮 {}", player).bold().cyan()));
    out.push_str(&format!("{}\n", "=".repeat(CARD_WIDTH).cyan()));
    out.push_str(&format!(
        "  {}\n",
        "Failed to load data for this player.".yellow()
    ));
    out.push_str("  Please check if you entered the right summoner name and tag.\n");
    out.push_str(&format!("  {} {}\n", "Error:".red(), reason));
    out
}

pub fn render_team_card_pending() -> String {
    let mut out = String::new();
    out.push_str(&format!("\n{}\n", "🛡️ Team AI Insight".bold().magenta()));
    out.push_str(&format!("{}\n", "=".repeat(CARD_WIDTH).magenta()));
    out.push_str(&format!(
        "  {}\n",
        "pending, will appear below once generated...".dimmed()
    ));
    out
}

/// One resolved insight, labelled, with its markdown rendered for the
/// terminal.
pub fn render_insight(label: &str, text: &str) -> String {
    format!(
        "\n{}\n{}\n{}\n",
        label.bold().magenta(),
        "-".repeat(CARD_WIDTH).magenta(),
        markdown::render(text)
    )
}
