//! Consensus parameters for the run consensus use case.
//!
//! [`ConsensusParams`] groups the static parameters that control a
//! [`RunConsensusUseCase`](crate::use_cases::run_consensus::RunConsensusUseCase)
//! run: panel size, per-call timeout and the refinement policy.

use council_domain::agent::{DEFAULT_QUALITY_EVALUATORS, evaluator_panel};
use council_domain::{AgentRole, RefinementPolicy};
use std::time::Duration;

/// Default per-agent call timeout
pub const DEFAULT_AGENT_TIMEOUT: Duration = Duration::from_secs(90);

/// Consensus run parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsensusParams {
    /// Number of quality evaluators in the fan-out (1..=3).
    pub quality_evaluators: usize,
    /// Upper bound on every single agent call.
    pub agent_timeout: Duration,
    /// Threshold and pass limit.
    pub policy: RefinementPolicy,
}

impl Default for ConsensusParams {
    fn default() -> Self {
        Self {
            quality_evaluators: DEFAULT_QUALITY_EVALUATORS,
            agent_timeout: DEFAULT_AGENT_TIMEOUT,
            policy: RefinementPolicy::default(),
        }
    }
}

impl ConsensusParams {
    // ==================== Builder Methods ====================

    pub fn with_quality_evaluators(mut self, count: usize) -> Self {
        self.quality_evaluators = count;
        self
    }

    pub fn with_agent_timeout(mut self, timeout: Duration) -> Self {
        self.agent_timeout = timeout;
        self
    }

    pub fn with_policy(mut self, policy: RefinementPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn without_refinement(mut self) -> Self {
        self.policy = RefinementPolicy::new(self.policy.threshold(), 1);
        self
    }

    /// Evaluators dispatched by the fan-out, in declaration order
    pub fn evaluator_panel(&self) -> Vec<AgentRole> {
        evaluator_panel(self.quality_evaluators)
    }
}
