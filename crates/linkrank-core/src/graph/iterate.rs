//! Iterative rank estimator (fixed-point recurrence)

use super::{LinkGraph, RankScores};
use crate::config::RankConfig;
use crate::error::{LinkRankError, Result};
use tracing::debug;

/// Estimate ranks by iterating the PageRank recurrence to a fixed point
///
/// Starts from the uniform distribution and sweeps until no page moves by
/// `config.tolerance` or more. Each sweep is computed entirely from the
/// previous sweep's ranks. Sink pages redistribute their whole mass
/// uniformly across the corpus, mirroring the transition model's sink rule,
/// so total mass is preserved and the result sums to 1.
///
/// Deterministic: the same graph and configuration always produce the same
/// result. `config.max_iterations` bounds the loop; exhausting it is an
/// error rather than a partial result.
pub fn iterate_pagerank(graph: &LinkGraph, config: &RankConfig) -> Result<RankScores> {
    config.validate()?;
    if graph.is_empty() {
        return Err(LinkRankError::InvalidInput(
            "cannot rank an empty corpus".to_string(),
        ));
    }

    let n = graph.len() as f64;
    let mut ranks: RankScores = graph.pages().map(|p| (p.to_string(), 1.0 / n)).collect();

    for sweep in 1..=config.max_iterations {
        let next = next_ranks(graph, &ranks, config.damping);

        let converged = next.iter().all(|(page, new_rank)| {
            let old_rank = ranks.get(page).copied().unwrap_or(0.0);
            (new_rank - old_rank).abs() < config.tolerance
        });

        ranks = next;

        if converged {
            debug!(sweeps = sweep, "iterative estimator converged");
            return Ok(ranks);
        }
    }

    Err(LinkRankError::Iteration(format!(
        "no convergence after {} sweeps (tolerance {})",
        config.max_iterations, config.tolerance
    )))
}

/// One full sweep of the recurrence, read entirely from `ranks`
fn next_ranks(graph: &LinkGraph, ranks: &RankScores, damping: f64) -> RankScores {
    let n = graph.len() as f64;
    let baseline = (1.0 - damping) / n;

    let sink_mass: f64 = graph
        .pages()
        .filter(|p| graph.is_sink(p))
        .map(|p| ranks.get(p).copied().unwrap_or(0.0))
        .sum();
    let sink_share = damping * sink_mass / n;

    let mut next: RankScores = graph
        .pages()
        .map(|p| (p.to_string(), baseline + sink_share))
        .collect();

    for page in graph.pages() {
        if let Some(links) = graph.links(page) {
            if !links.is_empty() {
                let rank = ranks.get(page).copied().unwrap_or(0.0);
                let share = damping * rank / links.len() as f64;
                for target in links {
                    if let Some(value) = next.get_mut(target.as_str()) {
                        *value += share;
                    }
                }
            }
        }
    }

    next
}
