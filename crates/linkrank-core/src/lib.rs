//! LinkRank Core Library
//!
//! Core functionality for the linkrank corpus ranking engine.
//!
//! # Features
//! - Corpus ingestion: directory crawling and anchor-tag link extraction
//! - Immutable link graph with self-link and external-target normalization
//! - Random-surfer transition model with damping and sink teleportation
//! - Sampling rank estimator (random walk visitation frequencies)
//! - Iterative rank estimator (fixed-point recurrence to convergence)

pub mod config;
pub mod corpus;
pub mod error;
pub mod graph;

pub use config::RankConfig;
pub use corpus::{crawl, extract_links, scan_files, ScanOptions, ScanResult};
pub use error::{Error, LinkRankError, Result};
pub use graph::{
    iterate_pagerank, sample_pagerank, transition_model, LinkGraph, RankScores,
};

/// Default damping factor for the random surfer
pub const DEFAULT_DAMPING: f64 = 0.85;

/// Default sample count for the sampling estimator
pub const DEFAULT_SAMPLES: usize = 10_000;
