//! Deterministic fallback values substituted for failed agent calls.
//!
//! Every stage has a documented default so a run always terminates with a
//! complete result, even when no backend answers.

use crate::content::ContentModel;
use crate::evaluation::{
    AccessibilityIssue, AccessibilityReport, AgentEvaluation, IssueSeverity, PerformanceReport,
    Priority, Suggestion, SuggestionCategory,
};
use crate::layout::{
    ColorPalette, LayoutCandidate, LayoutSection, SectionKind, StructuralSummary, Typography,
};
use crate::util::site_name;

pub const FALLBACK_STRUCTURE_DESCRIPTION: &str = "standard website layout";
/// Headings restated as key elements in the fallback summary
pub const FALLBACK_KEY_ELEMENTS: usize = 3;

pub const QUALITY_FALLBACK_SCORE: u8 = 75;
pub const QUALITY_FALLBACK_FEEDBACK: &str = "unable to complete detailed review";
pub const ACCESSIBILITY_FALLBACK_SCORE: u8 = 70;
pub const PERFORMANCE_FALLBACK_SCORE: u8 = 75;

const DEFAULT_CTA_LABEL: &str = "Learn More";

/// Analyzer fallback: restate the first headings as key elements.
pub fn fallback_structure(content: &ContentModel) -> StructuralSummary {
    StructuralSummary::new(
        FALLBACK_STRUCTURE_DESCRIPTION,
        content
            .headings
            .iter()
            .take(FALLBACK_KEY_ELEMENTS)
            .cloned()
            .collect(),
    )
}

/// Designer fallback: a fixed header/hero/content/footer skeleton.
///
/// Uses the detected primary color and the first heading and call-to-action
/// text verbatim; the site name comes from the URL hostname.
pub fn fallback_layout(url: &str, content: &ContentModel) -> LayoutCandidate {
    let site = site_name(url);
    let primary = content.primary_color().to_string();
    let brand = if content.title.trim().is_empty() {
        site.clone()
    } else {
        content.title.clone()
    };
    let heading = content.first_heading().unwrap_or(brand.as_str()).to_string();
    let cta = content.first_cta().unwrap_or(DEFAULT_CTA_LABEL);

    let nav_links: String = content
        .nav_items
        .iter()
        .map(|item| format!("<a href=\"#\">{}</a>", item))
        .collect();
    let body_text = content
        .paragraphs
        .first()
        .cloned()
        .unwrap_or_else(|| content.description.clone());

    let sections = vec![
        LayoutSection::new(
            "header",
            SectionKind::Navigation,
            brand.clone(),
            format!("<nav><span class=\"brand\">{}</span>{}</nav>", brand, nav_links),
        )
        .with_style("background", primary.clone())
        .with_style("color", "#ffffff")
        .with_style("position", "sticky"),
        LayoutSection::new(
            "hero",
            SectionKind::Hero,
            heading.clone(),
            format!("<h1>{}</h1><a class=\"btn\" href=\"#\">{}</a>", heading, cta),
        )
        .with_style("padding", "48px 16px")
        .with_style("text-align", "center"),
        LayoutSection::new(
            "content",
            SectionKind::Content,
            "About",
            format!("<p>{}</p>", body_text),
        )
        .with_style("padding", "24px 16px"),
        LayoutSection::new(
            "footer",
            SectionKind::Footer,
            site.clone(),
            format!("<p>&copy; {}</p>", site),
        )
        .with_style("background", "#1f2937")
        .with_style("color", "#ffffff"),
    ];

    LayoutCandidate::new(
        sections,
        ColorPalette::from_primary(primary),
        Typography::from_detected(&content.fonts),
    )
}

/// Quality evaluator fallback: 75/75/75 with no suggestions.
pub fn quality_fallback(agent_id: impl Into<String>) -> AgentEvaluation {
    AgentEvaluation::quality(
        agent_id,
        QUALITY_FALLBACK_SCORE,
        QUALITY_FALLBACK_SCORE,
        QUALITY_FALLBACK_SCORE,
        QUALITY_FALLBACK_FEEDBACK,
    )
}

pub fn accessibility_fallback_report() -> AccessibilityReport {
    AccessibilityReport {
        wcag_score: ACCESSIBILITY_FALLBACK_SCORE,
        issues: vec![AccessibilityIssue::new(
            IssueSeverity::Moderate,
            "Manual accessibility review recommended",
            "Automated audit was unavailable; review contrast, labels and focus order manually",
        )],
    }
}

/// Accessibility auditor fallback: conservative WCAG score 70, one generic issue.
pub fn accessibility_fallback(agent_id: impl Into<String>) -> AgentEvaluation {
    accessibility_fallback_report().into_evaluation(agent_id)
}

pub fn performance_fallback_report() -> PerformanceReport {
    PerformanceReport {
        score: PERFORMANCE_FALLBACK_SCORE,
        suggestions: vec![Suggestion::new(
            SuggestionCategory::Layout,
            Priority::Medium,
            "Manual performance review recommended",
            "Automated audit was unavailable; check image weight and render-blocking resources",
        )],
    }
}

/// Performance auditor fallback: score 75, one generic suggestion.
pub fn performance_fallback(agent_id: impl Into<String>) -> AgentEvaluation {
    performance_fallback_report().into_evaluation(agent_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::EvaluatorKind;

    fn sample_content() -> ContentModel {
        ContentModel::new("Acme Bakery")
            .with_headings(vec![
                "Fresh bread daily".into(),
                "Our story".into(),
                "Visit us".into(),
                "Careers".into(),
            ])
            .with_cta_labels(vec!["Order now".into()])
            .with_colors(vec!["#aa3300".into(), "#ffffff".into()])
            .with_nav_items(vec!["Home".into(), "Menu".into()])
    }

    #[test]
    fn test_fallback_structure_takes_three_headings() {
        let summary = fallback_structure(&sample_content());
        assert_eq!(summary.description, FALLBACK_STRUCTURE_DESCRIPTION);
        assert_eq!(
            summary.key_elements,
            vec!["Fresh bread daily", "Our story", "Visit us"]
        );
    }

    #[test]
    fn test_fallback_layout_skeleton() {
        let layout = fallback_layout("https://www.acme.test/", &sample_content());
        assert_eq!(
            layout.section_kinds(),
            vec![
                SectionKind::Navigation,
                SectionKind::Hero,
                SectionKind::Content,
                SectionKind::Footer
            ]
        );
        assert_eq!(layout.palette.primary, "#aa3300");
        assert_eq!(layout.sections[0].styles["background"], "#aa3300");
        assert!(layout.sections[1].body.contains("Fresh bread daily"));
        assert!(layout.sections[1].body.contains("Order now"));
        assert!(layout.sections[3].body.contains("acme.test"));
    }

    #[test]
    fn test_fallback_layout_with_empty_content() {
        let layout = fallback_layout("https://empty.test", &ContentModel::default());
        assert_eq!(layout.sections.len(), 4);
        assert_eq!(layout.sections[0].title, "empty.test");
        assert!(layout.sections[1].body.contains(DEFAULT_CTA_LABEL));
        assert_eq!(layout.palette.primary, crate::content::DEFAULT_PRIMARY_COLOR);
    }

    #[test]
    fn test_evaluator_fallback_constants() {
        let q = quality_fallback("evaluator-2");
        assert_eq!(
            (q.responsive_score, q.readability_score, q.overall_score),
            (75, 75, 75)
        );
        assert_eq!(q.feedback, QUALITY_FALLBACK_FEEDBACK);
        assert!(q.suggestions.is_empty());

        let a = accessibility_fallback("accessibility-auditor");
        assert_eq!(a.kind, EvaluatorKind::Accessibility);
        assert_eq!(a.overall_score, 70);
        assert_eq!(a.suggestions.len(), 1);

        let p = performance_fallback("performance-auditor");
        assert_eq!(p.kind, EvaluatorKind::Performance);
        assert_eq!(p.overall_score, 75);
        assert_eq!(p.suggestions.len(), 1);
    }
}
