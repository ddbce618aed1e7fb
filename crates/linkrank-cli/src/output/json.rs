//! JSON output formatter

use super::{LinksReport, RankReport};

pub fn format_rank(report: &RankReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string()) + "\n"
}

pub fn format_links(report: &LinksReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string()) + "\n"
}
