//! Response parsing for agent backends.
//!
//! Backends answer with loosely structured text that should contain a JSON
//! object. These functions locate that object and turn it into strictly
//! validated domain types: scores are rounded and clamped, unknown enum
//! values are mapped to documented defaults, and entries that cannot be
//! repaired are dropped. Pure domain logic, no I/O.
//!
//! | Function | Role | Required fields |
//! |----------|------|-----------------|
//! | [`parse_structure`] | analyzer | `description` |
//! | [`parse_layout`] | designer | non-empty `sections` |
//! | [`parse_quality_evaluation`] | quality evaluators | at least one score |
//! | [`parse_accessibility_report`] | accessibility auditor | `wcagScore` |
//! | [`parse_performance_report`] | performance auditor | `score` |

use crate::agent::fallback::QUALITY_FALLBACK_SCORE;
use crate::evaluation::{
    AccessibilityIssue, AccessibilityReport, AgentEvaluation, IssueSeverity, PerformanceReport,
    Priority, Suggestion, SuggestionCategory, clamp_score,
};
use crate::layout::{
    ColorPalette, LayoutCandidate, LayoutSection, SectionKind, StructuralSummary, Typography,
    is_hex_color,
};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use thiserror::Error;

/// Why a response could not be turned into a domain value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResponseParseError {
    #[error("No JSON object found in response")]
    NoJson,

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

type Object = Map<String, Value>;

/// Locate and parse the JSON object embedded in a response.
///
/// Takes the span from the first `{` to the last `}`, which also covers
/// objects wrapped in markdown code fences.
pub fn extract_json_object(response: &str) -> Result<Object, ResponseParseError> {
    let start = response.find('{').ok_or(ResponseParseError::NoJson)?;
    let end = response[start..]
        .rfind('}')
        .ok_or(ResponseParseError::NoJson)?;
    let json_str = &response[start..start + end + 1];

    match serde_json::from_str::<Value>(json_str) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(ResponseParseError::NoJson),
        Err(e) => Err(ResponseParseError::InvalidJson(e.to_string())),
    }
}

// ==================== Field helpers ====================

fn field<'a>(obj: &'a Object, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|k| obj.get(*k)).filter(|v| !v.is_null())
}

fn string_field(obj: &Object, keys: &[&str]) -> Option<String> {
    match field(obj, keys)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Accepts integers, floats and numeric strings.
fn score_field(obj: &Object, keys: &[&str]) -> Option<u8> {
    let raw = match field(obj, keys)? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().trim_end_matches('%').parse::<f64>().ok()?,
        _ => return None,
    };
    raw.is_finite().then(|| clamp_score(raw))
}

fn string_list(obj: &Object, keys: &[&str]) -> Vec<String> {
    match field(obj, keys) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|v| v.as_str())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

fn style_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

// ==================== Analyzer ====================

/// Parse the analyzer response into a [`StructuralSummary`].
pub fn parse_structure(response: &str) -> Result<StructuralSummary, ResponseParseError> {
    let obj = extract_json_object(response)?;
    let description = string_field(&obj, &["description", "summary", "structure"])
        .ok_or(ResponseParseError::MissingField("description"))?;
    let key_elements = string_list(&obj, &["keyElements", "key_elements", "elements"]);
    Ok(StructuralSummary::new(description, key_elements))
}

// ==================== Designer ====================

fn parse_section(index: usize, value: &Value) -> Option<LayoutSection> {
    let obj = value.as_object()?;
    let kind = string_field(obj, &["type", "kind"])
        .and_then(|k| k.parse::<SectionKind>().ok())
        .unwrap_or(SectionKind::Content);
    let id = string_field(obj, &["id"]).unwrap_or_else(|| format!("section-{}", index + 1));
    let title = string_field(obj, &["title", "heading"]).unwrap_or_default();
    let body = string_field(obj, &["content", "body", "html"]).unwrap_or_default();
    let styles: BTreeMap<String, String> = match field(obj, &["styles", "style"]) {
        Some(Value::Object(map)) => map
            .iter()
            .filter_map(|(k, v)| style_value(v).map(|v| (k.clone(), v)))
            .collect(),
        _ => BTreeMap::new(),
    };

    Some(LayoutSection {
        id,
        kind,
        title,
        body,
        styles,
    })
}

fn parse_palette(obj: &Object, defaults: &ColorPalette) -> ColorPalette {
    let pick = |value: Option<&Value>, default: &str| -> String {
        value
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|c| is_hex_color(c))
            .map(str::to_string)
            .unwrap_or_else(|| default.to_string())
    };

    match field(obj, &["palette", "colorPalette", "color_palette", "colors"]) {
        Some(Value::Object(p)) => ColorPalette {
            primary: pick(p.get("primary"), &defaults.primary),
            secondary: pick(p.get("secondary"), &defaults.secondary),
            accent: pick(p.get("accent"), &defaults.accent),
            background: pick(p.get("background"), &defaults.background),
            text: pick(p.get("text"), &defaults.text),
        },
        Some(Value::Array(items)) => ColorPalette {
            primary: pick(items.first(), &defaults.primary),
            secondary: pick(items.get(1), &defaults.secondary),
            accent: pick(items.get(2), &defaults.accent),
            background: pick(items.get(3), &defaults.background),
            text: pick(items.get(4), &defaults.text),
        },
        _ => defaults.clone(),
    }
}

fn parse_typography(obj: &Object, defaults: &Typography) -> Typography {
    match field(obj, &["typography", "fonts"]) {
        Some(Value::Object(t)) => Typography {
            heading_font: string_field(t, &["heading", "headingFont", "heading_font"])
                .unwrap_or_else(|| defaults.heading_font.clone()),
            body_font: string_field(t, &["body", "bodyFont", "body_font"])
                .unwrap_or_else(|| defaults.body_font.clone()),
        },
        _ => defaults.clone(),
    }
}

/// Parse the designer response into a [`LayoutCandidate`].
///
/// `defaults` supplies palette and typography entries the response omits or
/// gets wrong (non-hex colors). An empty section list is an error.
pub fn parse_layout(
    response: &str,
    defaults: &LayoutCandidate,
) -> Result<LayoutCandidate, ResponseParseError> {
    let obj = extract_json_object(response)?;
    let sections: Vec<LayoutSection> = match field(&obj, &["sections", "mobileLayout", "layout"]) {
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .filter_map(|(i, v)| parse_section(i, v))
            .collect(),
        _ => Vec::new(),
    };
    if sections.is_empty() {
        return Err(ResponseParseError::MissingField("sections"));
    }

    Ok(LayoutCandidate::new(
        sections,
        parse_palette(&obj, &defaults.palette),
        parse_typography(&obj, &defaults.typography),
    ))
}

// ==================== Evaluators ====================

fn parse_suggestion(value: &Value) -> Option<Suggestion> {
    match value {
        Value::String(title) if !title.trim().is_empty() => Some(Suggestion::new(
            SuggestionCategory::Layout,
            Priority::Medium,
            title.trim(),
            "",
        )),
        Value::Object(obj) => {
            let title = string_field(obj, &["title", "name"])?;
            let category = string_field(obj, &["category", "type"])
                .map(|c| SuggestionCategory::parse_lenient(&c))
                .unwrap_or(SuggestionCategory::Layout);
            let priority = string_field(obj, &["priority"])
                .map(|p| Priority::parse_lenient(&p))
                .unwrap_or(Priority::Medium);
            let description = string_field(obj, &["description", "details"]).unwrap_or_default();
            Some(Suggestion::new(category, priority, title, description))
        }
        _ => None,
    }
}

fn suggestions(obj: &Object) -> Vec<Suggestion> {
    match field(obj, &["suggestions", "recommendations"]) {
        Some(Value::Array(items)) => items.iter().filter_map(parse_suggestion).collect(),
        _ => Vec::new(),
    }
}

/// Parse a quality evaluator response.
///
/// Missing individual scores take the evaluator fallback value; a response
/// without any score is rejected.
pub fn parse_quality_evaluation(
    agent_id: &str,
    response: &str,
) -> Result<AgentEvaluation, ResponseParseError> {
    let obj = extract_json_object(response)?;
    let responsive = score_field(&obj, &["responsiveScore", "responsive_score", "responsive"]);
    let readability = score_field(&obj, &["readabilityScore", "readability_score", "readability"]);
    let overall = score_field(&obj, &["overallScore", "overall_score", "overall", "score"]);

    if responsive.is_none() && readability.is_none() && overall.is_none() {
        return Err(ResponseParseError::MissingField("overallScore"));
    }

    let feedback = string_field(&obj, &["feedback", "summary"]).unwrap_or_default();
    Ok(AgentEvaluation::quality(
        agent_id,
        responsive.unwrap_or(QUALITY_FALLBACK_SCORE),
        readability.unwrap_or(QUALITY_FALLBACK_SCORE),
        overall.unwrap_or(QUALITY_FALLBACK_SCORE),
        feedback,
    )
    .with_suggestions(suggestions(&obj)))
}

fn parse_issue(value: &Value) -> Option<AccessibilityIssue> {
    match value {
        Value::String(text) if !text.trim().is_empty() => Some(AccessibilityIssue::new(
            IssueSeverity::Moderate,
            text.trim(),
            "",
        )),
        Value::Object(obj) => {
            let description = string_field(obj, &["description", "issue", "title"])?;
            let severity = string_field(obj, &["severity", "impact"])
                .map(|s| IssueSeverity::parse_lenient(&s))
                .unwrap_or(IssueSeverity::Moderate);
            let recommendation =
                string_field(obj, &["recommendation", "fix", "suggestion"]).unwrap_or_default();
            Some(AccessibilityIssue::new(severity, description, recommendation))
        }
        _ => None,
    }
}

/// Parse the accessibility auditor response.
pub fn parse_accessibility_report(response: &str) -> Result<AccessibilityReport, ResponseParseError> {
    let obj = extract_json_object(response)?;
    let wcag_score = score_field(&obj, &["wcagScore", "wcag_score", "score"])
        .ok_or(ResponseParseError::MissingField("wcagScore"))?;
    let issues = match field(&obj, &["issues", "violations"]) {
        Some(Value::Array(items)) => items.iter().filter_map(parse_issue).collect(),
        _ => Vec::new(),
    };
    Ok(AccessibilityReport { wcag_score, issues })
}

/// Parse the performance auditor response.
pub fn parse_performance_report(response: &str) -> Result<PerformanceReport, ResponseParseError> {
    let obj = extract_json_object(response)?;
    let score = score_field(&obj, &["score", "performanceScore", "performance_score"])
        .ok_or(ResponseParseError::MissingField("score"))?;
    Ok(PerformanceReport {
        score,
        suggestions: suggestions(&obj),
    })
}
