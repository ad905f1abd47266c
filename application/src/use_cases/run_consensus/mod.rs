//! Run Consensus use case
//!
//! Orchestrates a full consensus analysis of one page:
//!
//! ```text
//! Analyzer → Designer → {Fan-Out} → Consensus + Merge
//!                ↑                         │
//!                └── feedback (once) ──────┘ below threshold
//! ```
//!
//! The run never fails: every agent failure is replaced by a deterministic
//! fallback and the result is always fully populated.

mod fan_out;
pub mod invoker;

pub use fan_out::{FanOutOutcome, evaluate_candidate};
pub use invoker::{InvocationError, Invocation, invoke_raw, invoke_with_fallback};

use crate::config::ConsensusParams;
use crate::ports::agent_gateway::AgentRegistry;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::run_tracker::{NoRunTracker, RunEvent, RunTracker};
use council_domain::agent::fallback::{fallback_layout, fallback_structure};
use council_domain::agent::parsing::{parse_layout, parse_structure};
use council_domain::{
    AgentRequest, AgentRole, ConsensusResult, ContentModel, FeedbackSummary, LayoutCandidate,
    PassOutcome, RefinementState, RunStatus, Stage, StructuralSummary,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info};

/// Use case for running a consensus analysis
pub struct RunConsensusUseCase {
    registry: Arc<AgentRegistry>,
    params: ConsensusParams,
    tracker: Arc<dyn RunTracker>,
}

impl RunConsensusUseCase {
    pub fn new(registry: Arc<AgentRegistry>, params: ConsensusParams) -> Self {
        Self {
            registry,
            params,
            tracker: Arc::new(NoRunTracker),
        }
    }

    pub fn with_tracker(mut self, tracker: Arc<dyn RunTracker>) -> Self {
        self.tracker = tracker;
        self
    }

    pub fn params(&self) -> &ConsensusParams {
        &self.params
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, url: &str, content: &ContentModel) -> ConsensusResult {
        self.execute_with_progress(url, content, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        url: &str,
        content: &ContentModel,
        progress: &dyn ProgressNotifier,
    ) -> ConsensusResult {
        let url: Arc<str> = Arc::from(url);
        let content = Arc::new(content.clone());
        let panel = self.params.evaluator_panel();
        let policy = self.params.policy;

        info!(
            "Starting consensus analysis of {} with {} evaluators",
            url,
            panel.len()
        );
        self.tracker.record(RunEvent::new(
            "run_started",
            json!({
                "url": &*url,
                "evaluators": panel.iter().map(AgentRole::id).collect::<Vec<_>>(),
                "threshold": policy.threshold(),
                "max_iterations": policy.max_iterations(),
            }),
        ));

        let (structure, analyzer_degraded) = self.analyze(&url, &content, progress).await;
        let upstream_degraded: Vec<String> = if analyzer_degraded {
            vec![AgentRole::Analyzer.id()]
        } else {
            Vec::new()
        };

        let first = self
            .run_pass(1, &url, &content, &structure, None, &panel, &upstream_degraded, progress)
            .await;
        let first_score = first.consensus_score();

        let (best, passes_run) = match RefinementState::FirstPass.next(&policy, first_score) {
            RefinementState::SecondPass => {
                info!(
                    "Consensus {} below threshold {}, refining once",
                    first_score,
                    policy.threshold()
                );
                progress.on_refinement(first_score, policy.threshold());
                self.tracker.record(RunEvent::status(RunStatus::Refining, 2));

                let feedback = FeedbackSummary::from_evaluations(&first.evaluations);
                debug!("Refinement feedback: {}", feedback);
                let refined = self
                    .run_pass(
                        2,
                        &url,
                        &content,
                        &structure,
                        Some(&feedback),
                        &panel,
                        &upstream_degraded,
                        progress,
                    )
                    .await;
                (policy.select_best(first, refined), 2)
            }
            _ => (first, 1),
        };

        let result = ConsensusResult::from_pass(best, passes_run);
        info!(
            "Consensus analysis complete: score {} (pass {} of {})",
            result.consensus_score, result.winning_pass, result.passes_run
        );
        self.tracker.record(RunEvent::status(RunStatus::Completed, passes_run));
        self.tracker.record(RunEvent::new(
            "run_completed",
            json!({
                "consensus_score": result.consensus_score,
                "accessibility_score": result.accessibility_score,
                "performance_score": result.performance_score,
                "passes_run": result.passes_run,
                "winning_pass": result.winning_pass,
                "suggestions": result.suggestions.len(),
                "degraded_agents": &result.degraded_agents,
            }),
        ));
        result
    }

    /// Structure Analyzer stage; returns the summary and whether it fell back.
    async fn analyze(
        &self,
        url: &str,
        content: &ContentModel,
        progress: &dyn ProgressNotifier,
    ) -> (StructuralSummary, bool) {
        info!("Stage: {}", Stage::Analysis);
        self.tracker.record(RunEvent::status(RunStatus::Analyzing, 1));
        progress.on_stage_start(&Stage::Analysis, 1, 1);

        let role = AgentRole::Analyzer;
        let payload = AgentRequest::AnalyzeStructure { url, content }.to_payload();
        let invocation = invoke_with_fallback(
            role,
            self.registry.get(&role),
            payload,
            self.params.agent_timeout,
            parse_structure,
            || fallback_structure(content),
        )
        .await;

        progress.on_agent_complete(&Stage::Analysis, &role, invocation.degraded);
        progress.on_stage_complete(&Stage::Analysis);
        (invocation.value, invocation.degraded)
    }

    /// Layout Designer stage; returns the candidate and whether it fell back.
    async fn design(
        &self,
        pass: u8,
        url: &str,
        content: &ContentModel,
        structure: &StructuralSummary,
        feedback: Option<&FeedbackSummary>,
        progress: &dyn ProgressNotifier,
    ) -> (LayoutCandidate, bool) {
        info!("Stage: {} (pass {})", Stage::Design, pass);
        self.tracker.record(RunEvent::status(RunStatus::Designing, pass));
        progress.on_stage_start(&Stage::Design, pass, 1);

        let role = AgentRole::Designer;
        let defaults = fallback_layout(url, content);
        let payload = AgentRequest::DesignLayout {
            url,
            content,
            structure,
            feedback,
        }
        .to_payload();
        let invocation = invoke_with_fallback(
            role,
            self.registry.get(&role),
            payload,
            self.params.agent_timeout,
            |response| parse_layout(response, &defaults),
            || defaults.clone(),
        )
        .await;

        progress.on_agent_complete(&Stage::Design, &role, invocation.degraded);
        progress.on_stage_complete(&Stage::Design);
        (invocation.value, invocation.degraded)
    }

    /// One Designer → Fan-Out → Consensus pass
    #[allow(clippy::too_many_arguments)]
    async fn run_pass(
        &self,
        pass: u8,
        url: &Arc<str>,
        content: &Arc<ContentModel>,
        structure: &StructuralSummary,
        feedback: Option<&FeedbackSummary>,
        panel: &[AgentRole],
        upstream_degraded: &[String],
        progress: &dyn ProgressNotifier,
    ) -> PassOutcome {
        let (layout, designer_degraded) = self
            .design(pass, url, content, structure, feedback, progress)
            .await;

        info!("Stage: {} (pass {})", Stage::Evaluation, pass);
        self.tracker.record(RunEvent::status(RunStatus::Evaluating, pass));
        progress.on_stage_start(&Stage::Evaluation, pass, panel.len());

        let layout = Arc::new(layout);
        let fan_out = evaluate_candidate(
            &self.registry,
            panel,
            Arc::clone(url),
            Arc::clone(content),
            Arc::clone(&layout),
            self.params.agent_timeout,
            progress,
        )
        .await;
        progress.on_stage_complete(&Stage::Evaluation);

        let mut degraded = upstream_degraded.to_vec();
        if designer_degraded {
            degraded.push(AgentRole::Designer.id());
        }
        degraded.extend(fan_out.degraded);

        let layout = Arc::try_unwrap(layout).unwrap_or_else(|shared| (*shared).clone());
        let outcome = PassOutcome::evaluate(pass, layout, fan_out.evaluations, degraded);

        info!(
            "Pass {} consensus {} (responsive {}, readability {})",
            pass, outcome.scores.consensus, outcome.scores.responsive, outcome.scores.readability
        );
        self.tracker.record(RunEvent::new(
            "pass_completed",
            json!({
                "pass": pass,
                "consensus_score": outcome.scores.consensus,
                "degraded_agents": &outcome.degraded_agents,
            }),
        ));
        outcome
    }
}

#[cfg(test)]
mod tests;
