//! Logging infrastructure for structured run tracking.
//!
//! Provides [`JsonlRunTracker`], a JSONL file writer that implements
//! the [`RunTracker`](council_application::RunTracker) port.

mod jsonl_tracker;

pub use jsonl_tracker::JsonlRunTracker;
