//! Console output formatter for consensus results

use colored::{ColoredString, Colorize};
use council_domain::{ConsensusResult, EvaluatorKind, OutputFormat, Suggestion};

/// Formats consensus results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format according to the selected output format
    pub fn render(result: &ConsensusResult, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => Self::format(result),
            OutputFormat::Summary => Self::format_summary(result),
            OutputFormat::Json => Self::format_json(result),
        }
    }

    /// Format the complete result: scores, evaluations, layout and suggestions
    pub fn format(result: &ConsensusResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Layout Council Results"));
        output.push('\n');
        output.push_str(&Self::scores(result));

        output.push_str(&Self::section_header("Evaluations"));
        for eval in &result.evaluations {
            let kind = match eval.kind {
                EvaluatorKind::Quality => format!(
                    "responsive {} / readability {}",
                    eval.responsive_score, eval.readability_score
                ),
                EvaluatorKind::Accessibility => "accessibility audit".to_string(),
                EvaluatorKind::Performance => "performance audit".to_string(),
            };
            output.push_str(&format!(
                "\n{} {} ({})\n",
                format!("── {} ──", eval.agent_id).yellow().bold(),
                Self::score(eval.overall_score),
                kind
            ));
            if !eval.feedback.is_empty() {
                output.push_str(&Self::indent(&eval.feedback, "  "));
                output.push('\n');
            }
        }

        output.push_str(&Self::section_header("Mobile Layout"));
        for section in &result.mobile_layout.sections {
            output.push_str(&format!(
                "  {} {} {}\n",
                "*".cyan(),
                section.title.bold(),
                format!("[{}]", section.kind).dimmed()
            ));
        }
        output.push_str(&format!(
            "\n{} {}\n",
            "Palette:".cyan().bold(),
            result.palette.entries().join(", ")
        ));
        output.push_str(&format!(
            "{} {} / {}\n",
            "Typography:".cyan().bold(),
            result.typography.heading_font,
            result.typography.body_font
        ));

        output.push_str(&Self::section_header("Suggestions"));
        output.push_str(&Self::suggestions(&result.suggestions));

        if result.is_degraded() {
            output.push_str(&format!(
                "\n{} {}\n",
                "Fallbacks used:".red().bold(),
                result.degraded_agents.join(", ")
            ));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format as JSON
    pub fn format_json(result: &ConsensusResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format scores and merged suggestions only (concise output)
    pub fn format_summary(result: &ConsensusResult) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{}\n\n",
            "=== Layout Council Consensus ===".cyan().bold()
        ));
        output.push_str(&Self::scores(result));
        output.push('\n');
        output.push_str(&Self::suggestions(&result.suggestions));

        if result.is_degraded() {
            output.push_str(&format!(
                "\n{} {}\n",
                "Fallbacks used:".dimmed(),
                result.degraded_agents.join(", ")
            ));
        }
        output
    }

    fn scores(result: &ConsensusResult) -> String {
        let mut output = String::new();
        for (label, value) in [
            ("Consensus", result.consensus_score),
            ("Responsive", result.responsive_score),
            ("Readability", result.readability_score),
            ("Accessibility", result.accessibility_score),
            ("Performance", result.performance_score),
        ] {
            output.push_str(&format!(
                "{:<14} {}\n",
                format!("{}:", label).cyan().bold(),
                Self::score(value)
            ));
        }
        output.push_str(&format!(
            "{}\n",
            format!(
                "Pass {} of {} selected",
                result.winning_pass, result.passes_run
            )
            .dimmed()
        ));
        output
    }

    fn suggestions(suggestions: &[Suggestion]) -> String {
        if suggestions.is_empty() {
            return format!("  {}\n", "No suggestions".dimmed());
        }
        suggestions
            .iter()
            .map(|s| {
                format!(
                    "  {} {} {}\n    {}\n",
                    format!("[{}]", s.priority).yellow(),
                    s.title.bold(),
                    format!("({})", s.category).dimmed(),
                    s.description
                )
            })
            .collect()
    }

    fn score(value: u8) -> ColoredString {
        let text = format!("{:>3}", value);
        match value {
            80..=u8::MAX => text.green().bold(),
            60..=79 => text.yellow().bold(),
            _ => text.red().bold(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use council_domain::agent::fallback::fallback_layout;
    use council_domain::{AgentEvaluation, ContentModel, PassOutcome, Priority, SuggestionCategory};

    fn result() -> ConsensusResult {
        let layout = fallback_layout("https://acme.test", &ContentModel::new("Acme"));
        let evaluations = vec![
            AgentEvaluation::quality("design-critic", 80, 82, 81, "Solid hierarchy")
                .with_suggestions(vec![Suggestion::new(
                    SuggestionCategory::Layout,
                    Priority::High,
                    "Sticky CTA",
                    "Keep the trial button in reach",
                )]),
            AgentEvaluation::quality("evaluator-2", 78, 80, 79, "Readable"),
        ];
        let outcome = PassOutcome::evaluate(1, layout, evaluations, vec!["designer".to_string()]);
        ConsensusResult::from_pass(outcome, 1)
    }

    #[test]
    fn test_summary_lists_scores_and_suggestions() {
        let output = ConsoleFormatter::format_summary(&result());
        assert!(output.contains("Consensus:"));
        assert!(output.contains("Sticky CTA"));
        assert!(output.contains("Keep the trial button in reach"));
        assert!(output.contains("designer"));
    }

    #[test]
    fn test_full_lists_every_evaluation() {
        let output = ConsoleFormatter::format(&result());
        assert!(output.contains("design-critic"));
        assert!(output.contains("evaluator-2"));
        assert!(output.contains("Solid hierarchy"));
        assert!(output.contains("Typography:"));
    }

    #[test]
    fn test_json_round_trips() {
        let result = result();
        let json = ConsoleFormatter::render(&result, OutputFormat::Json);
        let parsed: ConsensusResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }

    #[test]
    fn test_indent() {
        assert_eq!(ConsoleFormatter::indent("a\nb", "  "), "  a\n  b");
    }
}
