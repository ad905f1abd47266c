//! Agent backend configuration from TOML (`[agents]` section)
//!
//! Every role posts to `default_endpoint` unless `[agents.endpoints]`
//! overrides it:
//!
//! ```toml
//! [agents]
//! default_endpoint = "http://localhost:8080/agents"
//! api_key_env = "COUNCIL_API_KEY"
//!
//! [agents.endpoints]
//! designer = "http://designer.internal/invoke"
//! ```

use council_domain::{AgentRole, ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Agent backend configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAgentsConfig {
    /// Endpoint for roles without an explicit entry
    pub default_endpoint: Option<String>,
    /// Environment variable holding the bearer token
    pub api_key_env: String,
    /// Direct API key (prefer the env var)
    pub api_key: Option<String>,
    /// Role id → endpoint overrides
    pub endpoints: BTreeMap<String, String>,
}

impl Default for FileAgentsConfig {
    fn default() -> Self {
        Self {
            default_endpoint: None,
            api_key_env: "COUNCIL_API_KEY".to_string(),
            api_key: None,
            endpoints: BTreeMap::new(),
        }
    }
}

impl FileAgentsConfig {
    /// Parse the endpoint overrides, reporting unknown role names.
    pub fn parse_endpoints(&self) -> (Vec<(AgentRole, String)>, Vec<ConfigIssue>) {
        let mut endpoints = Vec::new();
        let mut issues = Vec::new();

        for (name, endpoint) in &self.endpoints {
            match name.parse::<AgentRole>() {
                Ok(role) => endpoints.push((role, endpoint.clone())),
                Err(_) => issues.push(ConfigIssue::warning(
                    ConfigIssueCode::UnknownRole,
                    format!("agents.endpoints: unknown role '{}', ignoring", name),
                )),
            }
        }

        (endpoints, issues)
    }

    /// Endpoint serving `role`, if any
    pub fn endpoint_for(&self, role: &AgentRole) -> Option<String> {
        let (endpoints, _) = self.parse_endpoints();
        endpoints
            .into_iter()
            .find(|(r, _)| r == role)
            .map(|(_, endpoint)| endpoint)
            .or_else(|| self.default_endpoint.clone())
    }

    /// Bearer token: the direct key wins over the environment variable.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|k| !k.trim().is_empty())
    }
}
