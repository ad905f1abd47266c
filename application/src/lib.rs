//! Application layer for layout-council
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{ConsensusParams, DEFAULT_AGENT_TIMEOUT};
pub use ports::{
    agent_gateway::{AgentCapability, AgentRegistry, GatewayError},
    progress::{NoProgress, ProgressNotifier},
    run_tracker::{NoRunTracker, RunEvent, RunTracker},
};
pub use use_cases::run_consensus::{InvocationError, RunConsensusUseCase};
