//! Domain layer for layout-council
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Consensus
//!
//! A page is redesigned for mobile by a council of independent agents:
//!
//! - **Analyzer / Designer**: sequential stages producing a layout candidate
//! - **Evaluators**: quality critics plus accessibility and performance
//!   auditors score the candidate concurrently
//! - **Consensus**: mean quality score plus an agreement bonus
//!
//! ## Refinement
//!
//! A pass scoring below the threshold is re-designed once with the
//! evaluators' feedback; the better pass wins and ties keep the first.

pub mod agent;
pub mod config;
pub mod consensus;
pub mod content;
pub mod core;
pub mod evaluation;
pub mod layout;
pub mod orchestration;
pub mod util;

// Re-export commonly used types
pub use agent::{AgentRequest, AgentRole, ResponseParseError};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use consensus::{ConsensusResult, ConsensusScores, PassOutcome};
pub use content::{ContentModel, ImageInfo};
pub use core::error::DomainError;
pub use evaluation::{
    AccessibilityIssue, AccessibilityReport, AgentEvaluation, EvaluatorKind, IssueSeverity,
    PerformanceReport, Priority, Suggestion, SuggestionCategory,
};
pub use layout::{
    ColorPalette, FeedbackSummary, LayoutCandidate, LayoutSection, SectionKind, StructuralSummary,
    Typography,
};
pub use orchestration::{RefinementPolicy, RefinementState, RunStatus, Stage};
