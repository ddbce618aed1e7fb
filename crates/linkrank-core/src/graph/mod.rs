//! Link graph model and rank estimators

mod iterate;
mod link_graph;
mod sample;
mod transition;

pub use iterate::iterate_pagerank;
pub use link_graph::LinkGraph;
pub use sample::sample_pagerank;
pub use transition::transition_model;

use std::collections::HashMap;

/// Estimated rank per page, summing to 1 across the corpus
pub type RankScores = HashMap<String, f64>;
