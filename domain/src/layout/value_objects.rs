//! Layout value objects - palette, typography and the stage hand-off types.

use crate::evaluation::{AgentEvaluation, EvaluatorKind};
use serde::{Deserialize, Serialize};

/// Five-entry color palette proposed for the mobile layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPalette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
}

impl ColorPalette {
    /// Neutral palette built around a given primary color.
    pub fn from_primary(primary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: "#64748b".to_string(),
            accent: "#f59e0b".to_string(),
            background: "#ffffff".to_string(),
            text: "#1f2937".to_string(),
        }
    }

    pub fn entries(&self) -> [&str; 5] {
        [
            &self.primary,
            &self.secondary,
            &self.accent,
            &self.background,
            &self.text,
        ]
    }
}

/// Check for a `#rgb` or `#rrggbb` hex color.
pub fn is_hex_color(value: &str) -> bool {
    let Some(hex) = value.strip_prefix('#') else {
        return false;
    };
    matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
}

/// Heading/body font pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Typography {
    pub heading_font: String,
    pub body_font: String,
}

impl Typography {
    pub fn new(heading_font: impl Into<String>, body_font: impl Into<String>) -> Self {
        Self {
            heading_font: heading_font.into(),
            body_font: body_font.into(),
        }
    }

    /// Pick a pair from the fonts detected on the page.
    pub fn from_detected(fonts: &[String]) -> Self {
        let heading = fonts.first().map(String::as_str).unwrap_or("system-ui");
        let body = fonts.get(1).map(String::as_str).unwrap_or(heading);
        Self::new(heading, body)
    }
}

/// Structural summary produced by the analyzer and consumed by the designer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuralSummary {
    pub description: String,
    pub key_elements: Vec<String>,
}

impl StructuralSummary {
    pub fn new(description: impl Into<String>, key_elements: Vec<String>) -> Self {
        Self {
            description: description.into(),
            key_elements,
        }
    }
}

/// Corrective feedback handed to the designer on the refinement pass
///
/// Built from the quality evaluators of the previous pass as
/// `id: feedback | id: feedback | ...`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackSummary(String);

impl FeedbackSummary {
    pub fn from_evaluations(evaluations: &[AgentEvaluation]) -> Self {
        let text = evaluations
            .iter()
            .filter(|e| e.kind == EvaluatorKind::Quality)
            .map(|e| format!("{}: {}", e.agent_id, e.feedback))
            .collect::<Vec<_>>()
            .join(" | ");
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for FeedbackSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
