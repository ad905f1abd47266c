//! Evaluation entities - what each evaluator agent reports back.

use serde::{Deserialize, Serialize};

/// Highest score an agent may report
pub const MAX_SCORE: u8 = 100;

/// Round a raw score and clamp it into `0..=100`.
///
/// Non-finite values clamp to 0.
pub fn clamp_score(raw: f64) -> u8 {
    if !raw.is_finite() {
        return 0;
    }
    raw.round().clamp(0.0, MAX_SCORE as f64) as u8
}

/// Which family of evaluator produced an evaluation
///
/// Only `Quality` evaluations take part in the consensus score; the audit
/// scores are reported separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvaluatorKind {
    Quality,
    Accessibility,
    Performance,
}

/// Category of an actionable suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionCategory {
    Style,
    Layout,
    Content,
    Accessibility,
}

impl SuggestionCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SuggestionCategory::Style => "style",
            SuggestionCategory::Layout => "layout",
            SuggestionCategory::Content => "content",
            SuggestionCategory::Accessibility => "accessibility",
        }
    }

    /// Lenient parse; unknown categories map to `Layout`.
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "style" | "styling" | "visual" => SuggestionCategory::Style,
            "content" | "copy" => SuggestionCategory::Content,
            "accessibility" | "a11y" => SuggestionCategory::Accessibility,
            _ => SuggestionCategory::Layout,
        }
    }
}

impl std::fmt::Display for SuggestionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Priority of a suggestion; `High` sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Sort rank: high=0, medium=1, low=2
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }

    /// Lenient parse; unknown priorities map to `Medium`.
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "high" | "critical" => Priority::High,
            "low" => Priority::Low,
            _ => Priority::Medium,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An actionable recommendation from an evaluator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub category: SuggestionCategory,
    pub priority: Priority,
    pub title: String,
    pub description: String,
}

impl Suggestion {
    pub fn new(
        category: SuggestionCategory,
        priority: Priority,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            category,
            priority,
            title: title.into(),
            description: description.into(),
        }
    }

    /// Deduplication identity: `lowercase(category + "-" + title)`
    pub fn dedup_key(&self) -> String {
        format!("{}-{}", self.category.as_str(), self.title).to_lowercase()
    }
}

/// One evaluator's verdict on a layout candidate
///
/// # Example
///
/// ```
/// use council_domain::evaluation::{AgentEvaluation, EvaluatorKind};
///
/// let eval = AgentEvaluation::quality("design-critic", 82, 90, 85, "Clean hierarchy");
/// assert_eq!(eval.kind, EvaluatorKind::Quality);
/// assert_eq!(eval.overall_score, 85);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentEvaluation {
    pub agent_id: String,
    pub kind: EvaluatorKind,
    pub responsive_score: u8,
    pub readability_score: u8,
    pub overall_score: u8,
    pub feedback: String,
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
}

impl AgentEvaluation {
    /// Create a quality evaluation. Scores above 100 are clamped.
    pub fn quality(
        agent_id: impl Into<String>,
        responsive: u8,
        readability: u8,
        overall: u8,
        feedback: impl Into<String>,
    ) -> Self {
        Self {
            agent_id: agent_id.into(),
            kind: EvaluatorKind::Quality,
            responsive_score: responsive.min(MAX_SCORE),
            readability_score: readability.min(MAX_SCORE),
            overall_score: overall.min(MAX_SCORE),
            feedback: feedback.into(),
            suggestions: Vec::new(),
        }
    }

    /// Create an auditor evaluation; the audit score fills all three score slots.
    pub fn audit(
        agent_id: impl Into<String>,
        kind: EvaluatorKind,
        score: u8,
        feedback: impl Into<String>,
    ) -> Self {
        let score = score.min(MAX_SCORE);
        Self {
            agent_id: agent_id.into(),
            kind,
            responsive_score: score,
            readability_score: score,
            overall_score: score,
            feedback: feedback.into(),
            suggestions: Vec::new(),
        }
    }

    pub fn with_suggestions(mut self, suggestions: Vec<Suggestion>) -> Self {
        self.suggestions = suggestions;
        self
    }

    /// A quality evaluation with a non-zero overall score counts toward consensus.
    pub fn is_valid(&self) -> bool {
        self.overall_score > 0
    }
}

/// Severity of an accessibility finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Critical,
    Serious,
    Moderate,
    Minor,
}

impl IssueSeverity {
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "critical" => IssueSeverity::Critical,
            "serious" | "high" => IssueSeverity::Serious,
            "minor" | "low" => IssueSeverity::Minor,
            _ => IssueSeverity::Moderate,
        }
    }

    pub fn priority(&self) -> Priority {
        match self {
            IssueSeverity::Critical | IssueSeverity::Serious => Priority::High,
            IssueSeverity::Moderate => Priority::Medium,
            IssueSeverity::Minor => Priority::Low,
        }
    }
}

/// A single WCAG finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessibilityIssue {
    pub severity: IssueSeverity,
    pub description: String,
    pub recommendation: String,
}

impl AccessibilityIssue {
    pub fn new(
        severity: IssueSeverity,
        description: impl Into<String>,
        recommendation: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            description: description.into(),
            recommendation: recommendation.into(),
        }
    }

    pub fn to_suggestion(&self) -> Suggestion {
        Suggestion::new(
            SuggestionCategory::Accessibility,
            self.severity.priority(),
            self.description.clone(),
            self.recommendation.clone(),
        )
    }
}

/// Accessibility auditor output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessibilityReport {
    pub wcag_score: u8,
    pub issues: Vec<AccessibilityIssue>,
}

impl AccessibilityReport {
    pub fn into_evaluation(self, agent_id: impl Into<String>) -> AgentEvaluation {
        let feedback = if self.issues.is_empty() {
            "No accessibility issues found".to_string()
        } else {
            self.issues
                .iter()
                .map(|i| i.description.as_str())
                .collect::<Vec<_>>()
                .join("; ")
        };
        let suggestions = self.issues.iter().map(|i| i.to_suggestion()).collect();
        AgentEvaluation::audit(agent_id, EvaluatorKind::Accessibility, self.wcag_score, feedback)
            .with_suggestions(suggestions)
    }
}

/// Performance auditor output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceReport {
    pub score: u8,
    pub suggestions: Vec<Suggestion>,
}

impl PerformanceReport {
    pub fn into_evaluation(self, agent_id: impl Into<String>) -> AgentEvaluation {
        let feedback = format!("Mobile performance score {}", self.score);
        AgentEvaluation::audit(agent_id, EvaluatorKind::Performance, self.score, feedback)
            .with_suggestions(self.suggestions)
    }
}
