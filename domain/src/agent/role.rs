//! Agent roles and the evaluator panel

use crate::core::error::DomainError;
use crate::evaluation::EvaluatorKind;
use serde::{Deserialize, Serialize};

/// Fewest quality evaluators a panel may hold
pub const MIN_QUALITY_EVALUATORS: usize = 1;
/// Most quality evaluators a panel may hold (design critic + two general evaluators)
pub const MAX_QUALITY_EVALUATORS: usize = 3;
/// Default quality evaluator count
pub const DEFAULT_QUALITY_EVALUATORS: usize = 3;

/// Logical role of an agent in the pipeline
///
/// The agent registry maps each role to a callable capability.
///
/// # Example
///
/// ```
/// use council_domain::AgentRole;
///
/// let role: AgentRole = "evaluator-2".parse().unwrap();
/// assert_eq!(role, AgentRole::Evaluator(2));
/// assert_eq!(role.to_string(), "evaluator-2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AgentRole {
    /// Produces the structural summary
    Analyzer,
    /// Produces the layout candidate
    Designer,
    /// Primary quality evaluator
    DesignCritic,
    /// Additional general quality evaluator (numbered from 2)
    Evaluator(u8),
    /// WCAG auditor
    AccessibilityAuditor,
    /// Mobile performance auditor
    PerformanceAuditor,
}

impl AgentRole {
    /// Stable identifier used in evaluations, config keys and logs
    pub fn id(&self) -> String {
        match self {
            AgentRole::Analyzer => "analyzer".to_string(),
            AgentRole::Designer => "designer".to_string(),
            AgentRole::DesignCritic => "design-critic".to_string(),
            AgentRole::Evaluator(n) => format!("evaluator-{}", n),
            AgentRole::AccessibilityAuditor => "accessibility-auditor".to_string(),
            AgentRole::PerformanceAuditor => "performance-auditor".to_string(),
        }
    }

    /// Evaluator family, or `None` for the sequential stages
    pub fn evaluator_kind(&self) -> Option<EvaluatorKind> {
        match self {
            AgentRole::Analyzer | AgentRole::Designer => None,
            AgentRole::DesignCritic | AgentRole::Evaluator(_) => Some(EvaluatorKind::Quality),
            AgentRole::AccessibilityAuditor => Some(EvaluatorKind::Accessibility),
            AgentRole::PerformanceAuditor => Some(EvaluatorKind::Performance),
        }
    }

    pub fn is_evaluator(&self) -> bool {
        self.evaluator_kind().is_some()
    }

    /// Every role a registry may need for a panel of `quality_evaluators`.
    pub fn all(quality_evaluators: usize) -> Vec<AgentRole> {
        let mut roles = vec![AgentRole::Analyzer, AgentRole::Designer];
        roles.extend(evaluator_panel(quality_evaluators));
        roles
    }
}

impl std::fmt::Display for AgentRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl std::str::FromStr for AgentRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        match normalized.as_str() {
            "analyzer" => Ok(AgentRole::Analyzer),
            "designer" => Ok(AgentRole::Designer),
            "design-critic" | "critic" => Ok(AgentRole::DesignCritic),
            "accessibility-auditor" | "accessibility" => Ok(AgentRole::AccessibilityAuditor),
            "performance-auditor" | "performance" => Ok(AgentRole::PerformanceAuditor),
            other => other
                .strip_prefix("evaluator-")
                .and_then(|n| n.parse::<u8>().ok())
                .filter(|n| *n >= 2)
                .map(AgentRole::Evaluator)
                .ok_or_else(|| DomainError::InvalidRole(s.to_string())),
        }
    }
}

impl TryFrom<String> for AgentRole {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AgentRole> for String {
    fn from(role: AgentRole) -> Self {
        role.id()
    }
}

/// Quality evaluators in declaration order
///
/// The count is clamped to `1..=3`.
pub fn quality_panel(count: usize) -> Vec<AgentRole> {
    let count = count.clamp(MIN_QUALITY_EVALUATORS, MAX_QUALITY_EVALUATORS);
    let mut panel = vec![AgentRole::DesignCritic];
    panel.extend((2..=count as u8).map(AgentRole::Evaluator));
    panel
}

/// Full fan-out panel: quality evaluators followed by both auditors
pub fn evaluator_panel(quality_evaluators: usize) -> Vec<AgentRole> {
    let mut panel = quality_panel(quality_evaluators);
    panel.push(AgentRole::AccessibilityAuditor);
    panel.push(AgentRole::PerformanceAuditor);
    panel
}
