//! Pipeline stages of a consensus run

use serde::{Deserialize, Serialize};

/// Stage of one consensus pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Structure analyzer builds the structural summary
    Analysis,
    /// Layout designer proposes a mobile candidate
    Design,
    /// Quality evaluators and auditors score the candidate concurrently
    Evaluation,
}

impl Stage {
    pub fn as_str(&self) -> &str {
        match self {
            Stage::Analysis => "analysis",
            Stage::Design => "design",
            Stage::Evaluation => "evaluation",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Stage::Analysis => "Structure Analysis",
            Stage::Design => "Layout Design",
            Stage::Evaluation => "Evaluation",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
