//! Structured request payloads sent to agent backends.
//!
//! Each request serializes to a JSON object tagged with a `task` field. The
//! wording of any prompt built from it belongs to the backend.

use super::role::AgentRole;
use crate::content::ContentModel;
use crate::layout::{FeedbackSummary, LayoutCandidate, StructuralSummary};
use serde::Serialize;
use serde_json::Value;

/// Payload for one agent invocation
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "task", rename_all = "snake_case")]
pub enum AgentRequest<'a> {
    AnalyzeStructure {
        url: &'a str,
        content: &'a ContentModel,
    },
    DesignLayout {
        url: &'a str,
        content: &'a ContentModel,
        structure: &'a StructuralSummary,
        #[serde(skip_serializing_if = "Option::is_none")]
        feedback: Option<&'a FeedbackSummary>,
    },
    EvaluateLayout {
        evaluator: AgentRole,
        url: &'a str,
        content: &'a ContentModel,
        layout: &'a LayoutCandidate,
    },
    AuditAccessibility {
        url: &'a str,
        content: &'a ContentModel,
        layout: &'a LayoutCandidate,
    },
    AuditPerformance {
        url: &'a str,
        content: &'a ContentModel,
        layout: &'a LayoutCandidate,
    },
}

impl<'a> AgentRequest<'a> {
    /// Build the evaluation request matching an evaluator role.
    ///
    /// Returns `None` for the sequential roles (analyzer, designer).
    pub fn for_evaluator(
        role: AgentRole,
        url: &'a str,
        content: &'a ContentModel,
        layout: &'a LayoutCandidate,
    ) -> Option<Self> {
        match role {
            AgentRole::Analyzer | AgentRole::Designer => None,
            AgentRole::DesignCritic | AgentRole::Evaluator(_) => Some(AgentRequest::EvaluateLayout {
                evaluator: role,
                url,
                content,
                layout,
            }),
            AgentRole::AccessibilityAuditor => Some(AgentRequest::AuditAccessibility {
                url,
                content,
                layout,
            }),
            AgentRole::PerformanceAuditor => Some(AgentRequest::AuditPerformance {
                url,
                content,
                layout,
            }),
        }
    }

    pub fn task_name(&self) -> &'static str {
        match self {
            AgentRequest::AnalyzeStructure { .. } => "analyze_structure",
            AgentRequest::DesignLayout { .. } => "design_layout",
            AgentRequest::EvaluateLayout { .. } => "evaluate_layout",
            AgentRequest::AuditAccessibility { .. } => "audit_accessibility",
            AgentRequest::AuditPerformance { .. } => "audit_performance",
        }
    }

    /// Owned JSON payload, detached from the borrowed inputs.
    pub fn to_payload(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|e| {
            serde_json::json!({ "task": self.task_name(), "error": e.to_string() })
        })
    }
}
