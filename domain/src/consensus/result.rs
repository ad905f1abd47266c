//! Consensus result types - the outcome of one pass and of a whole run.

use super::calculator::{ConsensusScores, calculate_consensus};
use super::merge::merge_evaluation_suggestions;
use crate::agent::fallback::{ACCESSIBILITY_FALLBACK_SCORE, PERFORMANCE_FALLBACK_SCORE};
use crate::evaluation::{AgentEvaluation, EvaluatorKind, Suggestion};
use crate::layout::{ColorPalette, LayoutCandidate, Typography};
use serde::{Deserialize, Serialize};

/// Everything one Designer → Fan-Out → Consensus pass produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassOutcome {
    /// 1 for the first pass, 2 for the refinement pass
    pub pass: u8,
    pub layout: LayoutCandidate,
    pub evaluations: Vec<AgentEvaluation>,
    pub scores: ConsensusScores,
    pub accessibility_score: u8,
    pub performance_score: u8,
    pub suggestions: Vec<Suggestion>,
    /// Agents whose fallback value was used in this pass
    pub degraded_agents: Vec<String>,
}

fn audit_score(evaluations: &[AgentEvaluation], kind: EvaluatorKind, default: u8) -> u8 {
    evaluations
        .iter()
        .find(|e| e.kind == kind)
        .map(|e| e.overall_score)
        .unwrap_or(default)
}

impl PassOutcome {
    /// Aggregate the evaluations of a pass.
    pub fn evaluate(
        pass: u8,
        layout: LayoutCandidate,
        evaluations: Vec<AgentEvaluation>,
        degraded_agents: Vec<String>,
    ) -> Self {
        let scores = calculate_consensus(&evaluations);
        let suggestions = merge_evaluation_suggestions(&evaluations);
        let accessibility_score = audit_score(
            &evaluations,
            EvaluatorKind::Accessibility,
            ACCESSIBILITY_FALLBACK_SCORE,
        );
        let performance_score = audit_score(
            &evaluations,
            EvaluatorKind::Performance,
            PERFORMANCE_FALLBACK_SCORE,
        );

        Self {
            pass,
            layout,
            evaluations,
            scores,
            accessibility_score,
            performance_score,
            suggestions,
            degraded_agents,
        }
    }

    pub fn consensus_score(&self) -> u8 {
        self.scores.consensus
    }

    pub fn quality_evaluations(&self) -> impl Iterator<Item = &AgentEvaluation> {
        self.evaluations
            .iter()
            .filter(|e| e.kind == EvaluatorKind::Quality)
    }
}

/// Final artifact of a consensus analysis run
///
/// Always fully populated, even when every backend failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsensusResult {
    pub consensus_score: u8,
    pub responsive_score: u8,
    pub readability_score: u8,
    pub accessibility_score: u8,
    pub performance_score: u8,
    /// One entry per dispatched evaluator, in declaration order
    pub evaluations: Vec<AgentEvaluation>,
    pub mobile_layout: LayoutCandidate,
    pub suggestions: Vec<Suggestion>,
    pub palette: ColorPalette,
    pub typography: Typography,
    /// Passes executed (1 or 2)
    pub passes_run: u8,
    /// Pass whose outcome was kept
    pub winning_pass: u8,
    /// Agents that fell back in the winning pass
    pub degraded_agents: Vec<String>,
}

impl ConsensusResult {
    /// Build the final result from the kept pass.
    pub fn from_pass(outcome: PassOutcome, passes_run: u8) -> Self {
        let palette = outcome.layout.palette.clone();
        let typography = outcome.layout.typography.clone();
        Self {
            consensus_score: outcome.scores.consensus,
            responsive_score: outcome.scores.responsive,
            readability_score: outcome.scores.readability,
            accessibility_score: outcome.accessibility_score,
            performance_score: outcome.performance_score,
            evaluations: outcome.evaluations,
            mobile_layout: outcome.layout,
            suggestions: outcome.suggestions,
            palette,
            typography,
            passes_run,
            winning_pass: outcome.pass,
            degraded_agents: outcome.degraded_agents,
        }
    }

    /// Whether any agent of the winning pass fell back
    pub fn is_degraded(&self) -> bool {
        !self.degraded_agents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::fallback::{accessibility_fallback, fallback_layout, performance_fallback};
    use crate::content::ContentModel;
    use crate::evaluation::{Priority, SuggestionCategory};

    fn layout() -> LayoutCandidate {
        fallback_layout("https://acme.test", &ContentModel::new("Acme"))
    }

    #[test]
    fn test_pass_outcome_aggregates() {
        let evaluations = vec![
            AgentEvaluation::quality("design-critic", 70, 90, 80, "ok").with_suggestions(vec![
                Suggestion::new(SuggestionCategory::Style, Priority::Low, "Softer shadows", ""),
            ]),
            AgentEvaluation::quality("evaluator-2", 90, 70, 80, "ok"),
            accessibility_fallback("accessibility-auditor"),
            AgentEvaluation::audit("performance-auditor", EvaluatorKind::Performance, 64, ""),
        ];
        let outcome = PassOutcome::evaluate(
            1,
            layout(),
            evaluations,
            vec!["accessibility-auditor".to_string()],
        );

        assert_eq!(outcome.consensus_score(), 90);
        assert_eq!(outcome.scores.responsive, 80);
        assert_eq!(outcome.accessibility_score, 70);
        assert_eq!(outcome.performance_score, 64);
        assert_eq!(outcome.quality_evaluations().count(), 2);
        // accessibility fallback issue (medium) sorts ahead of the low style suggestion
        assert_eq!(outcome.suggestions.len(), 2);
        assert_eq!(outcome.suggestions[0].category, SuggestionCategory::Accessibility);
    }

    #[test]
    fn test_result_from_pass() {
        let outcome = PassOutcome::evaluate(
            2,
            layout(),
            vec![
                AgentEvaluation::quality("design-critic", 80, 80, 80, ""),
                accessibility_fallback("accessibility-auditor"),
                performance_fallback("performance-auditor"),
            ],
            vec![],
        );
        let result = ConsensusResult::from_pass(outcome, 2);

        assert_eq!(result.consensus_score, 90);
        assert_eq!(result.winning_pass, 2);
        assert_eq!(result.passes_run, 2);
        assert_eq!(result.palette, result.mobile_layout.palette);
        assert_eq!(result.evaluations.len(), 3);
        assert!(!result.is_degraded());
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let outcome = PassOutcome::evaluate(1, layout(), vec![], vec![]);
        let json = serde_json::to_value(ConsensusResult::from_pass(outcome, 1)).unwrap();
        assert_eq!(json["consensusScore"], 75);
        assert!(json.get("mobileLayout").is_some());
        assert_eq!(json["accessibilityScore"], 70);
    }
}
