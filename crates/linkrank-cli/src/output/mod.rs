//! Output formatters

pub mod csv;
pub mod json;
pub mod terminal;

use crate::app::OutputFormat;
use serde::Serialize;

/// Ranking report for a corpus, one section per estimator run
#[derive(Debug, Serialize)]
pub struct RankReport {
    pub corpus: String,
    pub sections: Vec<RankSection>,
}

#[derive(Debug, Serialize)]
pub struct RankSection {
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples: Option<usize>,
    pub rows: Vec<RankRow>,
}

#[derive(Debug, Serialize)]
pub struct RankRow {
    pub page: String,
    pub rank: f64,
}

/// Normalized link graph listing
#[derive(Debug, Serialize)]
pub struct LinksReport {
    pub entries: Vec<LinkEntry>,
}

#[derive(Debug, Serialize)]
pub struct LinkEntry {
    pub page: String,
    pub links: Vec<String>,
}

/// Format a ranking report
pub fn format_rank_report(report: &RankReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_rank(report),
        OutputFormat::Csv => csv::format_rank(report),
        OutputFormat::Cli => terminal::format_rank(report),
    }
}

/// Format a link graph listing
pub fn format_links_report(report: &LinksReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_links(report),
        OutputFormat::Csv => csv::format_links(report),
        OutputFormat::Cli => terminal::format_links(report),
    }
}
