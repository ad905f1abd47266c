//! Agent backends
//!
//! Builds the [`AgentRegistry`] handed to the consensus use case from the
//! `[agents]` configuration section. Roles without an endpoint stay
//! unregistered and degrade to their fallback at run time.

#[cfg(feature = "http-agents")]
mod http;

#[cfg(feature = "http-agents")]
pub use http::HttpAgentCapability;

use crate::config::FileAgentsConfig;
use council_application::AgentRegistry;
use council_domain::AgentRole;
use tracing::{info, warn};

/// Build a registry for `roles` from the agents configuration.
#[cfg(feature = "http-agents")]
pub fn build_registry(config: &FileAgentsConfig, roles: &[AgentRole]) -> AgentRegistry {
    use std::sync::Arc;

    let client = reqwest::Client::new();
    let api_key = config.resolve_api_key();
    let mut registry = AgentRegistry::new();

    for role in roles {
        match config.endpoint_for(role) {
            Some(endpoint) => {
                info!("Agent {} → {}", role, endpoint);
                let agent = HttpAgentCapability::new(client.clone(), *role, endpoint)
                    .with_api_key(api_key.clone());
                registry.register(*role, Arc::new(agent));
            }
            None => warn!("No endpoint configured for {}, it will use its fallback", role),
        }
    }
    registry
}

/// Build a registry for `roles` from the agents configuration.
#[cfg(not(feature = "http-agents"))]
pub fn build_registry(config: &FileAgentsConfig, roles: &[AgentRole]) -> AgentRegistry {
    if config.default_endpoint.is_some() || !config.endpoints.is_empty() {
        warn!("Agent endpoints configured but the http-agents feature is disabled");
    }
    info!(
        "No agent backends available; all {} roles will use fallbacks",
        roles.len()
    );
    AgentRegistry::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use council_domain::agent::evaluator_panel;

    fn roles() -> Vec<AgentRole> {
        let mut roles = vec![AgentRole::Analyzer, AgentRole::Designer];
        roles.extend(evaluator_panel(3));
        roles
    }

    #[test]
    fn test_empty_config_registers_nothing() {
        let registry = build_registry(&FileAgentsConfig::default(), &roles());
        assert!(registry.is_empty());
    }

    #[cfg(feature = "http-agents")]
    #[test]
    fn test_default_endpoint_covers_every_role() {
        let config = FileAgentsConfig {
            default_endpoint: Some("http://localhost:8080/agents".to_string()),
            ..Default::default()
        };
        let registry = build_registry(&config, &roles());
        assert_eq!(registry.len(), 7);
        assert!(registry.contains(&AgentRole::PerformanceAuditor));
    }

    #[cfg(feature = "http-agents")]
    #[test]
    fn test_only_mapped_roles_without_default() {
        let mut config = FileAgentsConfig::default();
        config
            .endpoints
            .insert("designer".to_string(), "http://designer".to_string());
        let registry = build_registry(&config, &roles());
        assert_eq!(registry.roles(), vec![AgentRole::Designer]);
    }
}
