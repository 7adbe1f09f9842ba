use std::fmt;

use async_trait::async_trait;
use reqwest::header;

use crate::error::{ApiError, ApiResult};

pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";
const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";
#[cfg(not(target_arch = "wasm32"))]
const USER_AGENT: &str = concat!("folio/", env!("CARGO_PKG_VERSION"));

/// A single GET against the GitHub REST API. `path` is relative to the base
/// URL and may carry a query string.
#[derive(Clone, PartialEq, Eq)]
pub struct GitHubRequest {
    pub path: String,
    pub credential: Option<String>,
}

impl GitHubRequest {
    pub fn new(path: impl Into<String>, credential: Option<&str>) -> Self {
        Self {
            path: path.into(),
            credential: credential.map(str::to_owned),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }
}

impl fmt::Debug for GitHubRequest {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("GitHubRequest")
            .field("path", &self.path)
            .field(
                "credential",
                &self.credential.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

/// Status and body of a completed HTTP exchange. Interpreting the status is
/// left to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

// Futures from the browser fetch API are not `Send`, so neither is the trait.
#[async_trait(?Send)]
pub trait GitHubTransport {
    async fn get(&self, request: GitHubRequest) -> ApiResult<RawResponse>;
}

#[derive(Clone)]
pub struct ReqwestTransport {
    base_url: String,
    client: reqwest::Client,
}

impl fmt::Debug for ReqwestTransport {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ReqwestTransport")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ReqwestTransport {
    pub fn new(base_url: impl Into<String>) -> ApiResult<Self> {
        let base_url = base_url.into().trim().trim_end_matches('/').to_owned();
        let base_url = if base_url.is_empty() {
            DEFAULT_API_BASE_URL.to_owned()
        } else {
            base_url
        };

        // Browsers own the User-Agent header; only native builds set one.
        #[cfg(not(target_arch = "wasm32"))]
        let builder = reqwest::Client::builder().user_agent(USER_AGENT);
        #[cfg(target_arch = "wasm32")]
        let builder = reqwest::Client::builder();

        let client = builder.build().map_err(|err| {
            ApiError::Configuration(format!("failed to build GitHub HTTP client: {err}"))
        })?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait(?Send)]
impl GitHubTransport for ReqwestTransport {
    async fn get(&self, request: GitHubRequest) -> ApiResult<RawResponse> {
        let mut builder = self
            .client
            .get(self.url_for(&request.path))
            .header(header::ACCEPT, GITHUB_ACCEPT);
        if let Some(credential) = request.credential.as_deref() {
            builder = builder.bearer_auth(credential);
        }

        let response = builder.send().await.map_err(|err| {
            ApiError::NetworkFailure(format!("GET {} failed: {err}", request.path))
        })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|err| {
            ApiError::NetworkFailure(format!(
                "failed to read response body for {}: {err}",
                request.path
            ))
        })?;

        Ok(RawResponse { status, body })
    }
}
