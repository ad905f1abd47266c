//! Evaluation domain
//!
//! Each evaluator agent reports an [`AgentEvaluation`]. Quality evaluators
//! feed the consensus score; the accessibility and performance auditors
//! report [`AccessibilityReport`] / [`PerformanceReport`] which are folded
//! into evaluations of their own kind.

pub mod entities;

pub use entities::{
    AccessibilityIssue, AccessibilityReport, AgentEvaluation, EvaluatorKind, IssueSeverity,
    MAX_SCORE, PerformanceReport, Priority, Suggestion, SuggestionCategory, clamp_score,
};
