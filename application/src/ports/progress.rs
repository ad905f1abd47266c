//! Progress notification port
//!
//! Defines the interface for reporting progress during a consensus run.

use council_domain::{AgentRole, Stage};

/// Callback for progress updates during a consensus run
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bars, plain text, etc.)
pub trait ProgressNotifier: Send + Sync {
    /// Called when a stage of a pass starts
    fn on_stage_start(&self, stage: &Stage, pass: u8, total_agents: usize);

    /// Called when an agent finishes; `degraded` means its fallback was used
    fn on_agent_complete(&self, stage: &Stage, role: &AgentRole, degraded: bool);

    /// Called when a stage completes
    fn on_stage_complete(&self, stage: &Stage);

    /// Called when a first pass scored below the threshold and is refined
    fn on_refinement(&self, _first_pass_score: u8, _threshold: u8) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_stage_start(&self, _stage: &Stage, _pass: u8, _total_agents: usize) {}
    fn on_agent_complete(&self, _stage: &Stage, _role: &AgentRole, _degraded: bool) {}
    fn on_stage_complete(&self, _stage: &Stage) {}
}
