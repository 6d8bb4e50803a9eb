//! Shared HTTP plumbing for the backend gateways
//!
//! Every gateway goes through [`ApiClient`], which owns the single
//! `reqwest::Client` (and with it the session cookie store) and funnels
//! each response through [`handle_response`].

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::config::settings::Settings;
use crate::utils::errors::{ApiError, ApiResult, CampusEventsError, Result};
use crate::utils::logging::log_api_error;

/// HTTP client bound to the backend base URL
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a new ApiClient instance
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = Client::builder()
            .timeout(settings.request_timeout())
            .user_agent(settings.api.user_agent.as_str())
            .cookie_store(true)
            .build()
            .map_err(CampusEventsError::Http)?;

        let base_url = Url::parse(&format!("{}/", settings.api_base_url()))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// Absolute URL for a path given as segments
    ///
    /// Each segment is percent-encoded, so an id carrying `/`, `?`, `#` or
    /// `..` stays a single segment of the intended endpoint.
    pub fn url(&self, segments: &[&str]) -> ApiResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::Transport {
                base_url: self.base_url().to_string(),
                reason: "base URL cannot carry a path".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> ApiResult<T> {
        let url = self.url(segments)?;
        self.execute(self.client.request(Method::GET, url)).await
    }

    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> ApiResult<T> {
        let mut url = self.url(segments)?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        self.execute(self.client.request(Method::GET, url)).await
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(&self, segments: &[&str], body: &B) -> ApiResult<T> {
        let url = self.url(segments)?;
        self.execute(self.client.request(Method::POST, url).json(body)).await
    }

    pub async fn post_empty<T: DeserializeOwned>(&self, segments: &[&str]) -> ApiResult<T> {
        let url = self.url(segments)?;
        self.execute(self.client.request(Method::POST, url).json(&serde_json::json!({}))).await
    }

    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(&self, segments: &[&str], body: &B) -> ApiResult<T> {
        let url = self.url(segments)?;
        self.execute(self.client.request(Method::PUT, url).json(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, segments: &[&str]) -> ApiResult<T> {
        let url = self.url(segments)?;
        self.execute(self.client.request(Method::DELETE, url)).await
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let request = request.build().map_err(|e| self.transport_error(e))?;
        let method = request.method().clone();
        let url = request.url().to_string();

        debug!(method = %method, url = %url, "Sending API request");

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| {
                log_api_error(&url, &e.to_string(), Some(method.as_str()));
                self.transport_error(e)
            })?;

        let result = handle_response(response).await;
        if let Err(ref e) = result {
            warn!(method = %method, url = %url, error = %e, "API request failed");
        }
        result
    }

    fn transport_error(&self, e: reqwest::Error) -> ApiError {
        let base_url = self.base_url().to_string();
        if e.is_timeout() {
            ApiError::Timeout { base_url }
        } else {
            ApiError::Transport { base_url, reason: e.to_string() }
        }
    }
}

/// Turn a backend response into data or a normalized [`ApiError`]
pub async fn handle_response<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let status = response.status();
    let url = response.url().to_string();
    let body = response.text().await.map_err(|e| ApiError::Transport {
        base_url: url.clone(),
        reason: format!("failed to read response body: {}", e),
    })?;

    parse_body(status, &url, &body)
}

/// Classify a response body; split out so it can be exercised without a socket
pub fn parse_body<T: DeserializeOwned>(status: StatusCode, url: &str, body: &str) -> ApiResult<T> {
    let code = status.as_u16();
    let trimmed = body.trim();

    if trimmed.is_empty() {
        if status.is_success() {
            // Acknowledgement-only endpoints may answer with no body at all.
            return serde_json::from_value(Value::Null)
                .or_else(|_| serde_json::from_value(Value::Object(Default::default())))
                .map_err(|_| ApiError::EmptyResponse { status: code });
        }
        return Err(ApiError::EmptyResponse { status: code });
    }

    if looks_like_html(trimmed) {
        return Err(ApiError::HtmlResponse { status: code, url: url.to_string() });
    }

    let value: Value = serde_json::from_str(trimmed)
        .map_err(|_| ApiError::InvalidJson { status: code, url: url.to_string() })?;

    if !status.is_success() {
        let message = value
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP {}", code));
        return Err(ApiError::Server { status: code, message });
    }

    serde_json::from_value(value).map_err(|e| {
        debug!(url = %url, error = %e, "Response did not match the expected shape");
        ApiError::InvalidJson { status: code, url: url.to_string() }
    })
}

fn looks_like_html(body: &str) -> bool {
    let head: String = body.chars().take(16).collect::<String>().to_ascii_lowercase();
    head.starts_with("<!doctype") || head.starts_with("<html")
}
