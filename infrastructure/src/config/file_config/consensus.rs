//! Consensus configuration from TOML (`[consensus]` section)
//!
//! Example configuration:
//!
//! ```toml
//! [consensus]
//! threshold = 80
//! max_iterations = 2
//! agent_timeout_secs = 90
//! quality_evaluators = 3
//! ```

use council_application::ConsensusParams;
use council_domain::agent::{MAX_QUALITY_EVALUATORS, MIN_QUALITY_EVALUATORS};
use council_domain::orchestration::{DEFAULT_QUALITY_THRESHOLD, MAX_PASSES};
use council_domain::{ConfigIssue, ConfigIssueCode, RefinementPolicy};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 90;

/// Consensus run configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConsensusConfig {
    /// Consensus score a first pass must reach to skip refinement (0-100)
    pub threshold: u32,
    /// Passes per run; 1 disables refinement, anything above 2 is clamped
    pub max_iterations: u32,
    /// Per-agent call timeout in seconds
    pub agent_timeout_secs: u64,
    /// Quality evaluators in the fan-out (1-3)
    pub quality_evaluators: usize,
}

impl Default for FileConsensusConfig {
    fn default() -> Self {
        Self {
            threshold: u32::from(DEFAULT_QUALITY_THRESHOLD),
            max_iterations: u32::from(MAX_PASSES),
            agent_timeout_secs: DEFAULT_TIMEOUT_SECS,
            quality_evaluators: MAX_QUALITY_EVALUATORS,
        }
    }
}

impl FileConsensusConfig {
    /// Convert to [`ConsensusParams`], substituting defaults for invalid values.
    pub fn to_params(&self) -> (ConsensusParams, Vec<ConfigIssue>) {
        let mut issues = Vec::new();

        let threshold = match u8::try_from(self.threshold) {
            Ok(t) if t <= 100 => t,
            _ => {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::ThresholdOutOfRange,
                    format!(
                        "consensus.threshold: {} is above 100, using {}",
                        self.threshold, DEFAULT_QUALITY_THRESHOLD
                    ),
                ));
                DEFAULT_QUALITY_THRESHOLD
            }
        };

        if self.max_iterations == 0 || self.max_iterations > u32::from(MAX_PASSES) {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::IterationsOutOfRange,
                format!(
                    "consensus.max_iterations: {} is outside 1..={}, clamping",
                    self.max_iterations, MAX_PASSES
                ),
            ));
        }
        let max_iterations = self.max_iterations.clamp(1, u32::from(MAX_PASSES)) as u8;

        let timeout_secs = if self.agent_timeout_secs == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::ZeroTimeout,
                format!(
                    "consensus.agent_timeout_secs: 0 would fail every call, using {}",
                    DEFAULT_TIMEOUT_SECS
                ),
            ));
            DEFAULT_TIMEOUT_SECS
        } else {
            self.agent_timeout_secs
        };

        let range = MIN_QUALITY_EVALUATORS..=MAX_QUALITY_EVALUATORS;
        if !range.contains(&self.quality_evaluators) {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::EvaluatorCountOutOfRange,
                format!(
                    "consensus.quality_evaluators: {} is outside {}..={}, clamping",
                    self.quality_evaluators, MIN_QUALITY_EVALUATORS, MAX_QUALITY_EVALUATORS
                ),
            ));
        }
        let quality_evaluators = self
            .quality_evaluators
            .clamp(MIN_QUALITY_EVALUATORS, MAX_QUALITY_EVALUATORS);

        let params = ConsensusParams::default()
            .with_quality_evaluators(quality_evaluators)
            .with_agent_timeout(Duration::from_secs(timeout_secs))
            .with_policy(RefinementPolicy::new(threshold, max_iterations));

        (params, issues)
    }
}
