//! CSV output formatter

use super::{LinksReport, RankReport};

pub fn format_rank(report: &RankReport) -> String {
    let mut output = String::from("method,page,rank\n");

    for section in &report.sections {
        for row in &section.rows {
            output.push_str(&format!(
                "{},{},{}\n",
                section.method,
                escape_csv(&row.page),
                row.rank
            ));
        }
    }

    output
}

pub fn format_links(report: &LinksReport) -> String {
    let mut output = String::from("page,target\n");

    for entry in &report.entries {
        if entry.links.is_empty() {
            // sink pages stay visible with an empty target column
            output.push_str(&format!("{},\n", escape_csv(&entry.page)));
            continue;
        }
        for target in &entry.links {
            output.push_str(&format!(
                "{},{}\n",
                escape_csv(&entry.page),
                escape_csv(target)
            ));
        }
    }

    output
}

fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
