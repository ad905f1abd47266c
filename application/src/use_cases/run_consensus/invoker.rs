//! Agent invocation adapter.
//!
//! Uniform call contract around one capability: a single attempt bounded by
//! a timeout, validation of the raw response into a domain type and, when
//! anything goes wrong, the caller's fallback value marked as degraded.

use crate::ports::agent_gateway::{AgentCapability, GatewayError};
use council_domain::util::truncate_str;
use council_domain::{AgentRole, ResponseParseError};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Longest response excerpt written to debug logs
const LOG_EXCERPT_BYTES: usize = 200;

/// Why an agent call produced no usable value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvocationError {
    #[error("no capability registered for {0}")]
    NotRegistered(AgentRole),

    #[error("gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    #[error("invalid response: {0}")]
    Parse(#[from] ResponseParseError),
}

/// Value produced by one agent call
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation<T> {
    pub value: T,
    /// `true` when `value` is the fallback
    pub degraded: bool,
}

impl<T> Invocation<T> {
    pub fn success(value: T) -> Self {
        Self {
            value,
            degraded: false,
        }
    }

    pub fn fallback(value: T) -> Self {
        Self {
            value,
            degraded: true,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Invocation<U> {
        Invocation {
            value: f(self.value),
            degraded: self.degraded,
        }
    }
}

/// Single attempt at a capability, bounded by `timeout`.
pub async fn invoke_raw(
    role: AgentRole,
    capability: Option<Arc<dyn AgentCapability>>,
    payload: Value,
    timeout: Duration,
) -> Result<String, InvocationError> {
    let capability = capability.ok_or(InvocationError::NotRegistered(role))?;
    debug!("Invoking {} with payload {}", role, payload);

    match tokio::time::timeout(timeout, capability.invoke(payload)).await {
        Ok(Ok(response)) => {
            debug!(
                "{} responded: {}",
                role,
                truncate_str(&response, LOG_EXCERPT_BYTES)
            );
            Ok(response)
        }
        Ok(Err(e)) => Err(e.into()),
        Err(_) => Err(InvocationError::Timeout(timeout)),
    }
}

/// Invoke, parse and fall back.
///
/// Never fails: transport errors, timeouts and unparseable responses all
/// yield `fallback()` with the degraded flag set.
pub async fn invoke_with_fallback<T>(
    role: AgentRole,
    capability: Option<Arc<dyn AgentCapability>>,
    payload: Value,
    timeout: Duration,
    parse: impl FnOnce(&str) -> Result<T, ResponseParseError>,
    fallback: impl FnOnce() -> T,
) -> Invocation<T> {
    let outcome = invoke_raw(role, capability, payload, timeout)
        .await
        .and_then(|response| parse(&response).map_err(InvocationError::from));

    match outcome {
        Ok(value) => Invocation::success(value),
        Err(e) => {
            warn!("Agent {} degraded to fallback: {}", role, e);
            Invocation::fallback(fallback())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct Fixed(Result<String, GatewayError>);

    #[async_trait]
    impl AgentCapability for Fixed {
        async fn invoke(&self, _payload: Value) -> Result<String, GatewayError> {
            self.0.clone()
        }
    }

    struct Hanging;

    #[async_trait]
    impl AgentCapability for Hanging {
        async fn invoke(&self, _payload: Value) -> Result<String, GatewayError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok("{}".to_string())
        }
    }

    fn parse_number(s: &str) -> Result<u8, ResponseParseError> {
        s.trim()
            .parse()
            .map_err(|_| ResponseParseError::InvalidJson(s.to_string()))
    }

    #[tokio::test]
    async fn test_success_is_not_degraded() {
        let cap: Arc<dyn AgentCapability> = Arc::new(Fixed(Ok("42".to_string())));
        let result = invoke_with_fallback(
            AgentRole::Analyzer,
            Some(cap),
            Value::Null,
            Duration::from_secs(1),
            parse_number,
            || 0,
        )
        .await;
        assert_eq!(result, Invocation::success(42));
    }

    #[tokio::test]
    async fn test_gateway_error_falls_back() {
        let cap: Arc<dyn AgentCapability> =
            Arc::new(Fixed(Err(GatewayError::RequestFailed("503".to_string()))));
        let result = invoke_with_fallback(
            AgentRole::Designer,
            Some(cap),
            Value::Null,
            Duration::from_secs(1),
            parse_number,
            || 7,
        )
        .await;
        assert_eq!(result, Invocation::fallback(7));
    }

    #[tokio::test]
    async fn test_parse_error_falls_back() {
        let cap: Arc<dyn AgentCapability> = Arc::new(Fixed(Ok("not a number".to_string())));
        let result = invoke_with_fallback(
            AgentRole::DesignCritic,
            Some(cap),
            Value::Null,
            Duration::from_secs(1),
            parse_number,
            || 7,
        )
        .await;
        assert!(result.degraded);
    }

    #[tokio::test]
    async fn test_missing_capability_is_failure() {
        let err = invoke_raw(
            AgentRole::PerformanceAuditor,
            None,
            Value::Null,
            Duration::from_secs(1),
        )
        .await
        .unwrap_err();
        assert_eq!(
            err,
            InvocationError::NotRegistered(AgentRole::PerformanceAuditor)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_is_failure() {
        let cap: Arc<dyn AgentCapability> = Arc::new(Hanging);
        let err = invoke_raw(
            AgentRole::Analyzer,
            Some(cap),
            Value::Null,
            Duration::from_secs(90),
        )
        .await
        .unwrap_err();
        assert_eq!(err, InvocationError::Timeout(Duration::from_secs(90)));
        assert_eq!(err.to_string(), "timed out after 90s");
    }
}
