//! Application-level configuration.
//!
//! - [`ConsensusParams`] - panel size, agent timeout and refinement policy

pub mod consensus_params;

pub use consensus_params::{ConsensusParams, DEFAULT_AGENT_TIMEOUT};
