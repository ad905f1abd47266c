//! Port for run status tracking.
//!
//! Defines the [`RunTracker`] trait that receives the status transitions of
//! a consensus run and its final summary, e.g. for a job tracker or a JSONL
//! run log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures the run
//! lifecycle in a machine-readable format.

use council_domain::RunStatus;
use serde_json::{Value, json};

/// A structured run event.
pub struct RunEvent {
    /// Event type identifier (e.g., "status", "pass_completed").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl RunEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }

    /// A status transition event.
    pub fn status(status: RunStatus, pass: u8) -> Self {
        Self::new("status", json!({ "status": status, "pass": pass }))
    }
}

/// Port for recording run events.
///
/// `record` is synchronous and non-fallible; tracker failures never
/// disturb the run.
pub trait RunTracker: Send + Sync {
    fn record(&self, event: RunEvent);
}

/// No-op implementation for tests and when tracking is disabled.
pub struct NoRunTracker;

impl RunTracker for NoRunTracker {
    fn record(&self, _event: RunEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_event_payload() {
        let event = RunEvent::status(RunStatus::Designing, 2);
        assert_eq!(event.event_type, "status");
        assert_eq!(event.payload["status"], "designing");
        assert_eq!(event.payload["pass"], 2);
    }
}
