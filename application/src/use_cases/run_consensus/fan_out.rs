//! Evaluator fan-out.
//!
//! Every evaluator of the panel runs on its own task against the same
//! candidate. Results land in declaration order; a failed, timed out or
//! panicked evaluator contributes its fallback evaluation.

use super::invoker::{Invocation, invoke_with_fallback};
use crate::ports::agent_gateway::{AgentCapability, AgentRegistry};
use crate::ports::progress::ProgressNotifier;
use council_domain::agent::fallback::{
    accessibility_fallback, accessibility_fallback_report, performance_fallback,
    performance_fallback_report, quality_fallback,
};
use council_domain::agent::parsing::{
    parse_accessibility_report, parse_performance_report, parse_quality_evaluation,
};
use council_domain::{
    AgentEvaluation, AgentRequest, AgentRole, ContentModel, EvaluatorKind, LayoutCandidate, Stage,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;
use tracing::{info, warn};

/// Evaluations of one fan-out, one per panel slot
#[derive(Debug, Clone)]
pub struct FanOutOutcome {
    pub evaluations: Vec<AgentEvaluation>,
    /// Ids of the evaluators that fell back, in panel order
    pub degraded: Vec<String>,
}

/// Fallback evaluation for an evaluator role
fn evaluator_fallback(role: AgentRole) -> AgentEvaluation {
    match role.evaluator_kind() {
        Some(EvaluatorKind::Accessibility) => accessibility_fallback(role.id()),
        Some(EvaluatorKind::Performance) => performance_fallback(role.id()),
        Some(EvaluatorKind::Quality) | None => quality_fallback(role.id()),
    }
}

async fn evaluate_one(
    role: AgentRole,
    capability: Option<Arc<dyn AgentCapability>>,
    url: &str,
    content: &ContentModel,
    layout: &LayoutCandidate,
    timeout: Duration,
) -> Invocation<AgentEvaluation> {
    let Some(request) = AgentRequest::for_evaluator(role, url, content, layout) else {
        warn!("{} is not an evaluator role", role);
        return Invocation::fallback(evaluator_fallback(role));
    };
    let payload = request.to_payload();
    let id = role.id();

    match role.evaluator_kind() {
        Some(EvaluatorKind::Accessibility) => invoke_with_fallback(
            role,
            capability,
            payload,
            timeout,
            parse_accessibility_report,
            accessibility_fallback_report,
        )
        .await
        .map(|report| report.into_evaluation(id)),
        Some(EvaluatorKind::Performance) => invoke_with_fallback(
            role,
            capability,
            payload,
            timeout,
            parse_performance_report,
            performance_fallback_report,
        )
        .await
        .map(|report| report.into_evaluation(id)),
        Some(EvaluatorKind::Quality) | None => {
            invoke_with_fallback(
                role,
                capability,
                payload,
                timeout,
                |response| parse_quality_evaluation(&id, response),
                || quality_fallback(id.clone()),
            )
            .await
        }
    }
}

/// Run every evaluator of `panel` concurrently and join on all of them.
pub async fn evaluate_candidate(
    registry: &AgentRegistry,
    panel: &[AgentRole],
    url: Arc<str>,
    content: Arc<ContentModel>,
    layout: Arc<LayoutCandidate>,
    timeout: Duration,
    progress: &dyn ProgressNotifier,
) -> FanOutOutcome {
    let mut slots: Vec<Option<Invocation<AgentEvaluation>>> = panel.iter().map(|_| None).collect();
    let mut join_set = JoinSet::new();

    for (slot, role) in panel.iter().copied().enumerate() {
        let capability = registry.get(&role);
        let url = Arc::clone(&url);
        let content = Arc::clone(&content);
        let layout = Arc::clone(&layout);

        join_set.spawn(async move {
            let invocation = evaluate_one(role, capability, &url, &content, &layout, timeout).await;
            (slot, invocation)
        });
    }

    while let Some(joined) = join_set.join_next().await {
        match joined {
            Ok((slot, invocation)) => {
                info!(
                    "Evaluator {} finished (score {}{})",
                    panel[slot],
                    invocation.value.overall_score,
                    if invocation.degraded { ", fallback" } else { "" }
                );
                progress.on_agent_complete(&Stage::Evaluation, &panel[slot], invocation.degraded);
                slots[slot] = Some(invocation);
            }
            Err(e) => {
                warn!("Evaluator task join error: {}", e);
            }
        }
    }

    let mut evaluations = Vec::with_capacity(panel.len());
    let mut degraded = Vec::new();
    for (role, slot) in panel.iter().zip(slots) {
        let invocation = slot.unwrap_or_else(|| {
            warn!("Evaluator {} produced no result, using fallback", role);
            progress.on_agent_complete(&Stage::Evaluation, role, true);
            Invocation::fallback(evaluator_fallback(*role))
        });
        if invocation.degraded {
            degraded.push(role.id());
        }
        evaluations.push(invocation.value);
    }

    FanOutOutcome {
        evaluations,
        degraded,
    }
}
