//! Main client implementation.

use std::time::Duration;

use ogc_relay_types::ExecutionRequest;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use url::Url;

use crate::error::{ClientError, Result};
use crate::outcome::{ExecutionOutcome, classify};

/// Default timeout for an execution request.
///
/// Processes run synchronously on the server, so this is generous; it only
/// guards against a hung connection.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// Number of response characters echoed to the log.
const LOG_PREVIEW_CHARS: usize = 100;

/// Blocking OGC API Processes client.
///
/// # Example
///
/// ```no_run
/// use ogc_relay_client::ExecutionClient;
///
/// # fn example() -> ogc_relay_client::Result<()> {
/// let client = ExecutionClient::builder()
///     .base_url("https://processes.example.org/")
///     .basic_auth("user", Some("secret".to_string()))
///     .build()?;
///
/// assert_eq!(
///     client.endpoint("snap-to-network"),
///     "https://processes.example.org/processes/snap-to-network/execution"
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ExecutionClient {
    /// HTTP client.
    http: reqwest::blocking::Client,
    /// Base URL without trailing slashes.
    base_url: String,
    /// Basic auth credentials.
    auth: Option<(String, Option<String>)>,
}

impl ExecutionClient {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Execution endpoint of `process`.
    pub fn endpoint(&self, process: &str) -> String {
        format!("{}/processes/{}/execution", self.base_url, process)
    }

    /// Run `process` once and classify the reply.
    ///
    /// Never retries. Network errors (including the timeout) are reported as
    /// [`ExecutionOutcome::TransportFailure`] without a status.
    pub fn execute(&self, process: &str, request: &ExecutionRequest) -> ExecutionOutcome {
        let url = self.endpoint(process);
        tracing::info!(url = %url, "this URL will be queried");
        tracing::debug!(
            body = %serde_json::to_string(request).unwrap_or_default(),
            "request body"
        );

        let mut builder = self.http.post(&url).json(request);
        if let Some((username, password)) = &self.auth {
            builder = builder.basic_auth(username, password.as_ref());
        }

        let response = match builder.send() {
            Ok(response) => response,
            Err(e) => return network_failure(&url, e),
        };

        let status = response.status().as_u16();
        let text = match response.text() {
            Ok(text) => text,
            Err(e) => return network_failure(&url, e),
        };

        tracing::info!(
            status,
            preview = %text.chars().take(LOG_PREVIEW_CHARS).collect::<String>(),
            "finished POST request"
        );

        let outcome = classify(status, text);
        match &outcome {
            ExecutionOutcome::Success(_) => {}
            ExecutionOutcome::TransportFailure { detail, .. } => {
                tracing::debug!(%detail, "transport failure");
            }
            ExecutionOutcome::SemanticFailure { reason, payload } => {
                tracing::debug!(%reason, %payload, "server rejected the request");
            }
        }
        outcome
    }
}

fn network_failure(url: &str, error: reqwest::Error) -> ExecutionOutcome {
    let detail = if error.is_timeout() {
        format!("request to {url} timed out: {error}")
    } else {
        format!("request to {url} failed: {error}")
    };
    tracing::debug!(%detail, "transport failure");
    ExecutionOutcome::TransportFailure {
        status: None,
        detail,
    }
}

/// Builder for creating an [`ExecutionClient`].
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: Option<String>,
    username: Option<String>,
    password: Option<String>,
    verify_tls: bool,
    timeout: Duration,
    user_agent: Option<String>,
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self {
            base_url: None,
            username: None,
            password: None,
            verify_tls: true,
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Set the base URL of the service, e.g. `http://localhost:5000`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Send HTTP basic credentials.
    pub fn basic_auth(mut self, username: impl Into<String>, password: Option<String>) -> Self {
        self.username = Some(username.into());
        self.password = password;
        self
    }

    /// Verify TLS certificates (default: `true`).
    pub fn verify_tls(mut self, verify: bool) -> Self {
        self.verify_tls = verify;
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<ExecutionClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Config("base_url is required".to_string()))?;

        let base_url = base_url.trim().trim_end_matches('/').to_string();
        let parsed = Url::parse(&base_url)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::Config(format!(
                "unsupported URL scheme '{}' (expected http or https)",
                parsed.scheme()
            )));
        }

        if self.timeout.is_zero() {
            return Err(ClientError::Config("timeout must be positive".to_string()));
        }

        if !self.verify_tls {
            tracing::warn!(url = %base_url, "TLS certificate verification is disabled");
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("ogc-relay/{}", env!("CARGO_PKG_VERSION")));

        let http = reqwest::blocking::Client::builder()
            .default_headers(headers)
            .user_agent(user_agent)
            .timeout(self.timeout)
            .danger_accept_invalid_certs(!self.verify_tls)
            .build()?;

        Ok(ExecutionClient {
            http,
            base_url,
            auth: self.username.map(|u| (u, self.password)),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
