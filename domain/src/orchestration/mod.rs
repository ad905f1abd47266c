//! Orchestration domain
//!
//! Stages of a consensus pass, refinement control and the run status
//! transitions reported to trackers.

pub mod refinement;
pub mod stage;
pub mod status;

pub use refinement::{DEFAULT_QUALITY_THRESHOLD, MAX_PASSES, RefinementPolicy, RefinementState};
pub use stage::Stage;
pub use status::RunStatus;
