//! Rank command

use crate::app::{OutputFormat, RankArgs, RankMethod};
use crate::output::{format_rank_report, RankReport, RankRow, RankSection};
use linkrank_core::{
    crawl, iterate_pagerank, sample_pagerank, LinkGraph, RankConfig, RankScores, Result,
};
use std::cmp::Ordering;
use tracing::info;

pub fn run(args: RankArgs, format: OutputFormat) -> Result<()> {
    let mut config = RankConfig::default();
    if let Some(damping) = args.damping {
        config.damping = damping;
    }
    if let Some(samples) = args.samples {
        config.samples = samples;
    }
    if let Some(tolerance) = args.tolerance {
        config.tolerance = tolerance;
    }
    if let Some(max_iterations) = args.max_iterations {
        config.max_iterations = max_iterations;
    }

    let graph = LinkGraph::from_raw(crawl(&args.corpus)?);
    info!(pages = graph.len(), "corpus crawled");

    let mut sections = Vec::new();
    if matches!(args.method, RankMethod::Both | RankMethod::Sample) {
        let ranks = sample_pagerank(&graph, &config)?;
        sections.push(section("sample", Some(config.samples), ranks));
    }
    if matches!(args.method, RankMethod::Both | RankMethod::Iterate) {
        let ranks = iterate_pagerank(&graph, &config)?;
        sections.push(section("iterate", None, ranks));
    }

    let report = RankReport {
        corpus: args.corpus.display().to_string(),
        sections,
    };

    print!("{}", format_rank_report(&report, format));
    Ok(())
}

/// Turn an estimator's scores into rows sorted by descending rank
fn section(method: &str, samples: Option<usize>, ranks: RankScores) -> RankSection {
    let mut rows: Vec<RankRow> = ranks
        .into_iter()
        .map(|(page, rank)| RankRow { page, rank })
        .collect();
    rows.sort_by(|a, b| match b.rank.total_cmp(&a.rank) {
        Ordering::Equal => a.page.cmp(&b.page),
        ordering => ordering,
    });

    RankSection {
        method: method.to_string(),
        samples,
        rows,
    }
}
