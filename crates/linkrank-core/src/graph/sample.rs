//! Sampling rank estimator (random surfer)

use super::{transition_model, LinkGraph, RankScores};
use crate::config::RankConfig;
use crate::error::{LinkRankError, Result};
use anyhow::anyhow;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use std::collections::HashMap;
use tracing::debug;

/// Estimate ranks by a long random walk over the corpus
///
/// The walk starts on a page chosen uniformly at random, then repeatedly
/// draws the next page by weighted choice over the transition model of the
/// current page. A page's rank is its visitation frequency, so the result
/// sums to exactly 1 for any sample count. Pages the walk never reached get
/// an explicit zero entry; callers can rely on one key per corpus page.
///
/// Accuracy improves with the sample count; there is no convergence
/// guarantee for small counts. Randomness is process-local and unseeded, so
/// two runs generally differ.
pub fn sample_pagerank(graph: &LinkGraph, config: &RankConfig) -> Result<RankScores> {
    config.validate()?;
    if graph.is_empty() {
        return Err(LinkRankError::InvalidInput(
            "cannot sample an empty corpus: no page to start from".to_string(),
        ));
    }

    let mut rng = rand::thread_rng();

    // Fixed page order so weighted draws map back to identifiers
    let pages: Vec<&str> = graph.pages().collect();
    let mut tally: HashMap<&str, usize> = pages.iter().map(|p| (*p, 0usize)).collect();

    let mut current = pages[rng.gen_range(0..pages.len())];
    debug!(start = %current, samples = config.samples, "starting random walk");
    if let Some(count) = tally.get_mut(current) {
        *count += 1;
    }

    for _ in 1..config.samples {
        let dist = transition_model(graph, current, config.damping);
        let weights: Vec<f64> = pages
            .iter()
            .map(|p| dist.get(*p).copied().unwrap_or(0.0))
            .collect();
        let choice = WeightedIndex::new(&weights)
            .map_err(|e| LinkRankError::Other(anyhow!("weighted draw failed: {e}")))?;
        current = pages[choice.sample(&mut rng)];
        if let Some(count) = tally.get_mut(current) {
            *count += 1;
        }
    }

    let total = config.samples as f64;
    Ok(tally
        .into_iter()
        .map(|(page, count)| (page.to_string(), count as f64 / total))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn raw(entries: &[(&str, &[&str])]) -> HashMap<String, HashSet<String>> {
        entries
            .iter()
            .map(|(page, targets)| {
                (
                    page.to_string(),
                    targets.iter().map(|t| t.to_string()).collect(),
                )
            })
            .collect()
    }

    fn three_page_graph() -> LinkGraph {
        LinkGraph::from_raw(raw(&[
            ("a.html", &["b.html"]),
            ("b.html", &["a.html", "c.html"]),
            ("c.html", &["a.html"]),
        ]))
    }

    #[test]
    fn test_empty_graph_is_invalid_input() {
        let graph = LinkGraph::from_raw(HashMap::new());
        let result = sample_pagerank(&graph, &RankConfig::default());

        assert!(matches!(result, Err(LinkRankError::InvalidInput(_))));
    }

    #[test]
    fn test_invalid_damping_is_rejected() {
        let config = RankConfig {
            damping: 1.5,
            ..RankConfig::default()
        };
        let result = sample_pagerank(&three_page_graph(), &config);

        assert!(matches!(result, Err(LinkRankError::InvalidInput(_))));
    }

    #[test]
    fn test_ranks_sum_to_one_and_cover_all_pages() {
        let config = RankConfig {
            samples: 2_000,
            ..RankConfig::default()
        };
        let ranks = sample_pagerank(&three_page_graph(), &config).unwrap();

        assert_eq!(ranks.len(), 3);
        let total: f64 = ranks.values().sum();
        assert!((total - 1.0).abs() < 1e-12, "sum={total}");
    }

    #[test]
    fn test_single_sample() {
        let ranks = sample_pagerank(
            &three_page_graph(),
            &RankConfig {
                samples: 1,
                ..RankConfig::default()
            },
        )
        .unwrap();

        // one page has rank 1, the rest have explicit zeros
        assert_eq!(ranks.len(), 3);
        let total: f64 = ranks.values().sum();
        assert!((total - 1.0).abs() < 1e-12);
        assert_eq!(ranks.values().filter(|r| **r > 0.0).count(), 1);
    }

    #[test]
    fn test_isolated_page_gets_zero_entry() {
        // d.html is unreachable in a short walk that starts elsewhere only
        // probabilistically, but its key must be present regardless
        let graph = LinkGraph::from_raw(raw(&[
            ("a.html", &["b.html"]),
            ("b.html", &["a.html"]),
            ("d.html", &["a.html"]),
        ]));
        let ranks = sample_pagerank(
            &graph,
            &RankConfig {
                samples: 50,
                ..RankConfig::default()
            },
        )
        .unwrap();

        assert!(ranks.contains_key("d.html"));
    }

    #[test]
    fn test_heavily_linked_page_ranks_above_weakly_linked() {
        // a.html (linked from b and c) vs c.html (linked only from b, and
        // only half the time): the gap is wide enough for a statistical
        // assertion to be safe
        let config = RankConfig {
            samples: 20_000,
            ..RankConfig::default()
        };
        let ranks = sample_pagerank(&three_page_graph(), &config).unwrap();

        assert!(ranks["a.html"] > ranks["c.html"]);
    }
}
