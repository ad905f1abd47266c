//! Infrastructure layer for layout-council
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: agent backends, content sources,
//! configuration file loading and the JSONL run tracker.

pub mod agents;
pub mod config;
pub mod content;
pub mod logging;

// Re-export commonly used types
#[cfg(feature = "http-agents")]
pub use agents::HttpAgentCapability;
pub use agents::build_registry;
pub use config::{ConfigLoader, FileAgentsConfig, FileConfig, FileConsensusConfig, FileOutputConfig};
#[cfg(feature = "html")]
pub use content::HtmlContentExtractor;
pub use content::{ContentError, load_content_json, parse_content_json, read_document};
pub use logging::JsonlRunTracker;
