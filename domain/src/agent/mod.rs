//! Agent domain module
//!
//! Roles, request payloads, response parsing and the deterministic fallbacks
//! used when an agent call fails.

pub mod fallback;
pub mod parsing;
pub mod request;
pub mod role;

pub use parsing::ResponseParseError;
pub use request::AgentRequest;
pub use role::{
    AgentRole, DEFAULT_QUALITY_EVALUATORS, MAX_QUALITY_EVALUATORS, MIN_QUALITY_EVALUATORS,
    evaluator_panel, quality_panel,
};
