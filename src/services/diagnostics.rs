//! Connectivity diagnostics
//!
//! Checks the backend health endpoint and reports which API URL the client
//! resolved, so a misconfigured base URL is easy to spot.

use serde_json::Value;
use tracing::{debug, warn};

use crate::models::SignupRequest;
use crate::utils::errors::ApiError;
use super::http::ApiClient;

#[derive(Clone, Debug)]
pub struct DiagnosticsService {
    client: ApiClient,
}

/// Outcome of a connectivity check
#[derive(Debug, Clone, PartialEq)]
pub struct HealthReport {
    pub api_url: String,
    pub reachable: bool,
    pub details: Option<Value>,
    pub error: Option<String>,
}

impl DiagnosticsService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn health(&self) -> HealthReport {
        let api_url = format!("{}/api", self.client.base_url());
        debug!(api_url = %api_url, "Testing API connection");

        let result = self.client.get::<Value>(&["api", "health"]).await;
        Self::report(api_url, result)
    }

    /// Post throwaway credentials to the backend's signup test route
    pub async fn test_signup(&self) -> HealthReport {
        let api_url = format!("{}/api/test/signup", self.client.base_url());
        debug!(api_url = %api_url, "Testing signup endpoint");

        let credentials = SignupRequest {
            username: "test".to_string(),
            email: "test@test.com".to_string(),
            password: "test123".to_string(),
        };
        let result = self.client.post::<_, Value>(&["api", "test", "signup"], &credentials).await;
        Self::report(api_url, result)
    }

    fn report(api_url: String, result: Result<Value, ApiError>) -> HealthReport {
        match result {
            Ok(details) => HealthReport {
                api_url,
                reachable: true,
                details: Some(details),
                error: None,
            },
            Err(e) => {
                warn!(api_url = %api_url, error = %e, "API connection test failed");
                // Any HTTP answer proves the server is up, even an error page.
                let reachable = !matches!(e, ApiError::Transport { .. } | ApiError::Timeout { .. });
                HealthReport {
                    api_url,
                    reachable,
                    details: None,
                    error: Some(e.user_message()),
                }
            }
        }
    }
}

impl HealthReport {
    pub fn is_healthy(&self) -> bool {
        self.reachable && self.error.is_none()
    }
}
