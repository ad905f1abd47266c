//! HTTP agent backend.
//!
//! Each request is a JSON `POST` of `{"role": <id>, "payload": <request>}`;
//! the response body is handed back verbatim for the caller to parse.

use async_trait::async_trait;
use council_application::{AgentCapability, GatewayError};
use council_domain::AgentRole;
use serde_json::{Value, json};
use tracing::debug;

const USER_AGENT: &str = concat!("layout-council/", env!("CARGO_PKG_VERSION"));

/// Agent capability backed by a remote HTTP endpoint
#[derive(Clone)]
pub struct HttpAgentCapability {
    client: reqwest::Client,
    role: AgentRole,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpAgentCapability {
    pub fn new(client: reqwest::Client, role: AgentRole, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            role,
            endpoint: endpoint.into(),
            api_key: None,
        }
    }

    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }
}

fn map_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else if e.is_connect() {
        GatewayError::ConnectionError(e.to_string())
    } else {
        GatewayError::RequestFailed(e.to_string())
    }
}

#[async_trait]
impl AgentCapability for HttpAgentCapability {
    async fn invoke(&self, payload: Value) -> Result<String, GatewayError> {
        debug!("POST {} for {}", self.endpoint, self.role);

        let mut request = self
            .client
            .post(&self.endpoint)
            .header("User-Agent", USER_AGENT)
            .json(&json!({ "role": self.role.id(), "payload": payload }));
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(map_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::RequestFailed(format!(
                "HTTP {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        response.text().await.map_err(map_error)
    }
}
