//! Consensus score calculation
//!
//! Aggregates the quality evaluations of one pass into a single score using
//! the mean-plus-agreement-bonus rule:
//!
//! ```text
//! valid      = quality evaluations with overall > 0
//! overall    = round(mean(valid.overall))
//! bonus      = max(0, 10 - population_std_dev(valid.overall))
//! consensus  = min(100, overall + bonus)
//! ```
//!
//! Audit evaluations never enter the calculation.

use crate::evaluation::{AgentEvaluation, EvaluatorKind, clamp_score};
use serde::{Deserialize, Serialize};

/// Score reported when no quality evaluation is valid
pub const BASELINE_SCORE: u8 = 75;
/// Largest bonus granted for perfect agreement
pub const MAX_AGREEMENT_BONUS: f64 = 10.0;

/// Aggregated scores of one pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsensusScores {
    pub consensus: u8,
    pub responsive: u8,
    pub readability: u8,
}

impl ConsensusScores {
    /// The fully degraded result: every score at the baseline.
    pub fn baseline() -> Self {
        Self {
            consensus: BASELINE_SCORE,
            responsive: BASELINE_SCORE,
            readability: BASELINE_SCORE,
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divides by `n`). Empty input yields 0.
pub fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Bonus for tight agreement, shrinking to zero as the spread reaches 10.
pub fn agreement_bonus(std_dev: f64) -> f64 {
    (MAX_AGREEMENT_BONUS - std_dev).max(0.0)
}

/// Calculate the consensus of the quality evaluations in `evaluations`.
///
/// # Example
///
/// ```
/// use council_domain::consensus::calculate_consensus;
/// use council_domain::evaluation::AgentEvaluation;
///
/// let evals = vec![
///     AgentEvaluation::quality("design-critic", 80, 80, 80, ""),
///     AgentEvaluation::quality("evaluator-2", 80, 80, 80, ""),
///     AgentEvaluation::quality("evaluator-3", 80, 80, 80, ""),
/// ];
/// assert_eq!(calculate_consensus(&evals).consensus, 90);
/// ```
pub fn calculate_consensus(evaluations: &[AgentEvaluation]) -> ConsensusScores {
    let valid: Vec<&AgentEvaluation> = evaluations
        .iter()
        .filter(|e| e.kind == EvaluatorKind::Quality && e.is_valid())
        .collect();

    if valid.is_empty() {
        return ConsensusScores::baseline();
    }

    let scores = |f: fn(&AgentEvaluation) -> u8| -> Vec<f64> {
        valid.iter().map(|e| f64::from(f(e))).collect()
    };
    let responsive = scores(|e| e.responsive_score);
    let readability = scores(|e| e.readability_score);
    let overall = scores(|e| e.overall_score);

    let overall_mean = mean(&overall).round();
    let bonus = agreement_bonus(population_std_dev(&overall));

    ConsensusScores {
        consensus: clamp_score((overall_mean + bonus).min(100.0)),
        responsive: clamp_score(mean(&responsive)),
        readability: clamp_score(mean(&readability)),
    }
}
