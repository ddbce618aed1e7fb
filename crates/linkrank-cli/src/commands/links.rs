//! Links command

use crate::app::{LinksArgs, OutputFormat};
use crate::output::{format_links_report, LinkEntry, LinksReport};
use linkrank_core::{crawl, LinkGraph, Result};

pub fn run(args: LinksArgs, format: OutputFormat) -> Result<()> {
    let graph = LinkGraph::from_raw(crawl(&args.corpus)?);

    let mut entries: Vec<LinkEntry> = graph
        .pages()
        .map(|page| {
            let mut links: Vec<String> = graph
                .links(page)
                .map(|targets| targets.iter().cloned().collect())
                .unwrap_or_default();
            links.sort();
            LinkEntry {
                page: page.to_string(),
                links,
            }
        })
        .collect();
    entries.sort_by(|a, b| a.page.cmp(&b.page));

    print!(
        "{}",
        format_links_report(&LinksReport { entries }, format)
    );
    Ok(())
}
