//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod agents;
mod consensus;
mod output;

pub use agents::FileAgentsConfig;
pub use consensus::FileConsensusConfig;
pub use output::FileOutputConfig;

use council_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Consensus and refinement settings
    pub consensus: FileConsensusConfig,
    /// Agent backend endpoints
    pub agents: FileAgentsConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This is the single entry point for config validation. It checks:
    /// 1. Consensus values (threshold, iterations, timeout, panel size)
    /// 2. Role names used as endpoint keys
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.consensus.to_params().1);
        issues.extend(self.agents.parse_endpoints().1);
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use council_domain::{ConfigIssueCode, OutputFormat};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[consensus]
threshold = 85
max_iterations = 2
agent_timeout_secs = 45
quality_evaluators = 2

[agents]
default_endpoint = "http://localhost:8080/agents"
api_key_env = "ACME_COUNCIL_KEY"

[agents.endpoints]
designer = "http://designer.internal/invoke"

[output]
format = "full"
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.consensus.threshold, 85);
        assert_eq!(config.consensus.quality_evaluators, 2);
        assert_eq!(config.agents.api_key_env, "ACME_COUNCIL_KEY");
        assert_eq!(config.agents.endpoints.len(), 1);
        assert_eq!(config.output.format, Some(OutputFormat::Full));
        assert!(!config.output.color);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[consensus]
threshold = 70
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.consensus.threshold, 70);
        // Defaults should apply
        assert_eq!(config.consensus.agent_timeout_secs, 90);
        assert!(config.agents.default_endpoint.is_none());
        assert!(config.output.color);
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.consensus.threshold, 80);
        assert_eq!(config.consensus.max_iterations, 2);
        assert!(config.output.format.is_none());
        assert!(config.output.color);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_collects_all_issues() {
        let toml_str = r#"
[consensus]
threshold = 120
agent_timeout_secs = 0

[agents.endpoints]
moderator = "http://x"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let codes: Vec<_> = config.validate().iter().map(|i| i.code).collect();
        assert_eq!(
            codes,
            vec![
                ConfigIssueCode::ThresholdOutOfRange,
                ConfigIssueCode::ZeroTimeout,
                ConfigIssueCode::UnknownRole,
            ]
        );
    }
}
