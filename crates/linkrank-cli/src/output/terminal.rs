//! Terminal output formatter

use super::{LinksReport, RankReport};

pub fn format_rank(report: &RankReport) -> String {
    let mut output = String::new();

    for section in &report.sections {
        match section.samples {
            Some(n) => output.push_str(&format!("PageRank Results from Sampling (n = {n})\n")),
            None => output.push_str("PageRank Results from Iteration\n"),
        }
        for row in &section.rows {
            output.push_str(&format!("  {}: {:.4}\n", row.page, row.rank));
        }
    }

    output
}

pub fn format_links(report: &LinksReport) -> String {
    let mut output = String::new();

    for entry in &report.entries {
        output.push_str(&format!("{} ({} outbound)\n", entry.page, entry.links.len()));
        for target in &entry.links {
            output.push_str(&format!("  {target}\n"));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{LinkEntry, RankRow, RankSection};

    #[test]
    fn test_rank_sections_are_labeled() {
        let report = RankReport {
            corpus: "corpus".to_string(),
            sections: vec![
                RankSection {
                    method: "sample".to_string(),
                    samples: Some(10_000),
                    rows: vec![RankRow {
                        page: "1.html".to_string(),
                        rank: 0.5,
                    }],
                },
                RankSection {
                    method: "iterate".to_string(),
                    samples: None,
                    rows: vec![RankRow {
                        page: "1.html".to_string(),
                        rank: 0.5,
                    }],
                },
            ],
        };

        let output = format_rank(&report);

        assert!(output.contains("Sampling (n = 10000)"));
        assert!(output.contains("Iteration"));
        assert!(output.contains("  1.html: 0.5000"));
    }

    #[test]
    fn test_links_lists_targets_indented() {
        let report = LinksReport {
            entries: vec![LinkEntry {
                page: "1.html".to_string(),
                links: vec!["2.html".to_string(), "3.html".to_string()],
            }],
        };

        let output = format_links(&report);

        assert!(output.contains("1.html (2 outbound)"));
        assert!(output.contains("  2.html\n"));
    }
}
