//! Run status transitions reported to the tracker

use serde::{Deserialize, Serialize};

/// Status of a consensus run as seen by a job tracker
///
/// A run moves `Analyzing → Designing → Evaluating`, optionally
/// `Refining → Designing → Evaluating` once more, then `Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Analyzing,
    Designing,
    Evaluating,
    Refining,
    Completed,
}

impl RunStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunStatus::Analyzing => "analyzing",
            RunStatus::Designing => "designing",
            RunStatus::Evaluating => "evaluating",
            RunStatus::Refining => "refining",
            RunStatus::Completed => "completed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, RunStatus::Completed)
    }
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
