//! Suggestion merging across evaluators.

use crate::evaluation::{AgentEvaluation, Suggestion};
use std::collections::HashSet;

/// Most suggestions kept in a merged list
pub const MAX_MERGED_SUGGESTIONS: usize = 6;

/// Deduplicate, rank and truncate suggestions.
///
/// Keeps the first occurrence of each `lowercase(category-title)` key in
/// input order, stable-sorts by priority (high, medium, low) and keeps at
/// most `limit` entries.
pub fn merge_suggestions<'a>(
    suggestions: impl IntoIterator<Item = &'a Suggestion>,
    limit: usize,
) -> Vec<Suggestion> {
    let mut seen = HashSet::new();
    let mut merged: Vec<Suggestion> = suggestions
        .into_iter()
        .filter(|s| seen.insert(s.dedup_key()))
        .cloned()
        .collect();

    merged.sort_by_key(|s| s.priority.rank());
    merged.truncate(limit);
    merged
}

/// Merge the suggestions of every evaluation, in evaluator order.
pub fn merge_evaluation_suggestions(evaluations: &[AgentEvaluation]) -> Vec<Suggestion> {
    merge_suggestions(
        evaluations.iter().flat_map(|e| e.suggestions.iter()),
        MAX_MERGED_SUGGESTIONS,
    )
}
