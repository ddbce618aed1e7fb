//! One-step transition model for the random surfer

use super::{LinkGraph, RankScores};

/// Probability distribution over the next page visited from `page`
///
/// Every page of the corpus receives the teleport baseline
/// `(1 - damping) / N`. If `page` has outbound links, the damping mass is
/// split evenly across them; if it has none, or is not a corpus member at
/// all, the damping mass is spread uniformly over the whole corpus so no
/// rank is ever trapped in a sink.
///
/// The returned values sum to 1 on every branch. Total for any non-empty
/// graph; the estimators reject empty graphs before calling this.
pub fn transition_model(graph: &LinkGraph, page: &str, damping: f64) -> RankScores {
    let n = graph.len() as f64;
    let baseline = (1.0 - damping) / n;

    let mut dist: RankScores = graph.pages().map(|p| (p.to_string(), baseline)).collect();

    match graph.links(page) {
        Some(links) if !links.is_empty() => {
            let share = damping / links.len() as f64;
            for target in links {
                if let Some(value) = dist.get_mut(target.as_str()) {
                    *value += share;
                }
            }
        }
        // Sink or unknown page: uniform teleport over the whole corpus
        _ => {
            let share = damping / n;
            for value in dist.values_mut() {
                *value += share;
            }
        }
    }

    dist
}
