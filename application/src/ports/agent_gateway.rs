//! Agent capability port
//!
//! Defines the interface for invoking agent backends and the registry that
//! maps each [`AgentRole`] to its backend.

use async_trait::async_trait;
use council_domain::AgentRole;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur while invoking an agent backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// An opaque remote function taking a structured payload
///
/// Every backend is treated identically: the raw response text is handed
/// back to the application layer, which validates it into domain types.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait AgentCapability: Send + Sync {
    async fn invoke(&self, payload: Value) -> Result<String, GatewayError>;
}

/// Role → capability lookup injected into the consensus use case
///
/// A role without a registered capability behaves like a failing backend.
#[derive(Clone, Default)]
pub struct AgentRegistry {
    agents: HashMap<AgentRole, Arc<dyn AgentCapability>>,
}

impl AgentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_agent(mut self, role: AgentRole, capability: Arc<dyn AgentCapability>) -> Self {
        self.register(role, capability);
        self
    }

    pub fn register(&mut self, role: AgentRole, capability: Arc<dyn AgentCapability>) {
        self.agents.insert(role, capability);
    }

    pub fn get(&self, role: &AgentRole) -> Option<Arc<dyn AgentCapability>> {
        self.agents.get(role).cloned()
    }

    pub fn contains(&self, role: &AgentRole) -> bool {
        self.agents.contains_key(role)
    }

    /// Registered roles in stable order
    pub fn roles(&self) -> Vec<AgentRole> {
        let mut roles: Vec<_> = self.agents.keys().copied().collect();
        roles.sort();
        roles
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

impl std::fmt::Debug for AgentRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentRegistry")
            .field("roles", &self.roles())
            .finish()
    }
}
