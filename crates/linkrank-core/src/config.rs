//! Ranking configuration

use crate::error::{LinkRankError, Result};
use serde::{Deserialize, Serialize};

/// Configuration shared by both rank estimators
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankConfig {
    /// Probability of following an outbound link instead of teleporting
    #[serde(default = "default_damping")]
    pub damping: f64,

    /// Number of random-walk samples drawn by the sampling estimator
    #[serde(default = "default_samples")]
    pub samples: usize,

    /// Absolute per-page convergence tolerance for the iterative estimator
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Safety bound on iterative sweeps
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: std::env::var("LINKRANK_DAMPING")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_else(default_damping),
            samples: std::env::var("LINKRANK_SAMPLES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_else(default_samples),
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
        }
    }
}

fn default_damping() -> f64 {
    crate::DEFAULT_DAMPING
}

fn default_samples() -> usize {
    crate::DEFAULT_SAMPLES
}

fn default_tolerance() -> f64 {
    0.001
}

fn default_max_iterations() -> usize {
    1_000
}

impl RankConfig {
    /// Check all preconditions before a ranking run
    ///
    /// Estimators call this at entry so bad configuration is rejected
    /// immediately, never discovered mid-computation.
    pub fn validate(&self) -> Result<()> {
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(LinkRankError::InvalidInput(format!(
                "damping factor must be in (0, 1), got {}",
                self.damping
            )));
        }
        if self.samples == 0 {
            return Err(LinkRankError::InvalidInput(
                "sample count must be at least 1".to_string(),
            ));
        }
        if self.tolerance <= 0.0 {
            return Err(LinkRankError::InvalidInput(format!(
                "convergence tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(LinkRankError::InvalidInput(
                "max iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
