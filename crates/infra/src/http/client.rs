use std::time::Duration;

use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use tracing::debug;
use workpulse_domain::constants::DEFAULT_PROVIDER_TIMEOUT_SECS;
use workpulse_domain::WorkPulseError;

use crate::errors::InfraError;

/// HTTP client with a per-request timeout.
///
/// Requests are sent exactly once; retry policy belongs to callers.
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Convenience constructor with default configuration.
    pub fn new() -> Result<Self, WorkPulseError> {
        Self::builder().build()
    }

    /// Create a request builder using the underlying reqwest client.
    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Execute the provided request builder.
    ///
    /// Transport failures and timeouts map to `WorkPulseError::Network`; any
    /// HTTP status is returned as a response.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, WorkPulseError> {
        let request = builder.build().map_err(|err| WorkPulseError::from(InfraError::from(err)))?;

        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, %url, "sending HTTP request");

        match self.client.execute(request).await {
            Ok(response) => {
                debug!(%method, %url, status = %response.status(), "received HTTP response");
                Ok(response)
            }
            Err(err) => {
                debug!(%method, %url, error = %err, "HTTP request failed");
                Err(InfraError::from(err).into())
            }
        }
    }

    /// Execute the request and return the raw body of a 2xx response.
    ///
    /// Any other status becomes `WorkPulseError::Provider` carrying the status
    /// code and the response body text.
    pub async fn send_for_bytes(&self, builder: RequestBuilder) -> Result<Vec<u8>, WorkPulseError> {
        let response = self.send(builder).await?;
        let status = response.status();

        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(err) => {
                    debug!(%status, error = %err, "failed to read error response body");
                    String::new()
                }
            };
            return Err(WorkPulseError::provider(status.as_u16(), body));
        }

        let bytes = response.bytes().await.map_err(|err| WorkPulseError::from(InfraError::from(err)))?;
        Ok(bytes.to_vec())
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    user_agent: Option<String>,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_PROVIDER_TIMEOUT_SECS),
            user_agent: None,
        }
    }
}

impl HttpClientBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    pub fn build(self) -> Result<HttpClient, WorkPulseError> {
        let mut builder = ReqwestClient::builder().timeout(self.timeout).no_proxy();

        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }

        let client = builder.build().map_err(|err| WorkPulseError::from(InfraError::from(err)))?;

        Ok(HttpClient { client })
    }
}
