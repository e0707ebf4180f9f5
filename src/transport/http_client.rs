use crate::config::RestApiConfig;
use crate::error::AppError;
use crate::storage::TokenStore;
use crate::transport::headers::BearerAuth;
use anyhow::Context;
use async_trait::async_trait;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, Method, Request, Response};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Outbound side of the client: every remote call goes through here.
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Attaches (or strips) the bearer credential and transmits `request`.
    ///
    /// Transport failures are returned as-is. The response status is not
    /// inspected.
    async fn send(&self, request: Request) -> Result<Response, AppError>;

    /// Sends `body` as JSON to `path` (relative to the configured base URL)
    /// and decodes a 2xx JSON response into `T`.
    async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, AppError>
    where
        B: Serialize + Send + Sync + ?Sized,
        T: DeserializeOwned + Send;
}

/// The reqwest-backed [`ApiClient`].
///
/// No retries, no token refresh, no queueing: each call fires immediately
/// and independently.
pub struct Dispatcher {
    client: Client,
    base_url: String,
    auth: BearerAuth,
}

impl Dispatcher {
    /// Creates a dispatcher for `config.base_url` reading credentials from
    /// `tokens`.
    pub fn new(config: &RestApiConfig, tokens: Arc<dyn TokenStore>) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth: BearerAuth::new(tokens),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint path.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Starts a request against `path`. Finish it with `.build()` and hand
    /// it to [`ApiClient::send`].
    pub fn builder(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        self.client.request(method, self.url(path))
    }

    async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
        let status = response.status();
        let body_text = response.text().await?;

        debug!("Response Status: {}", status);

        if !status.is_success() {
            error!("API request failed. Status: {}, Body: {}", status, body_text);
            return Err(AppError::Http {
                status,
                body: body_text,
            });
        }

        let body = if body_text.trim().is_empty() {
            "null"
        } else {
            body_text.as_str()
        };
        serde_json::from_str(body).map_err(|e| {
            error!("Failed to deserialize response body: {}", e);
            AppError::Json(e)
        })
    }
}

#[async_trait]
impl ApiClient for Dispatcher {
    #[instrument(skip(self, request))]
    async fn send(&self, mut request: Request) -> Result<Response, AppError> {
        debug!("Dispatching {} {}", request.method(), request.url());
        self.auth.apply(request.headers_mut());

        match self.client.execute(request).await {
            Ok(response) => Ok(response),
            Err(e) => {
                error!("Failed to send request: {}", e);
                Err(AppError::Network(e))
            }
        }
    }

    #[instrument(skip(self, body))]
    async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, AppError>
    where
        B: Serialize + Send + Sync + ?Sized,
        T: DeserializeOwned + Send,
    {
        debug!("Sending {} request to {}", method, path);

        let mut builder = self.builder(method, path);
        if let Some(body) = body {
            builder = builder.json(body);
        }
        let request = builder.build()?;

        let response = self.send(request).await?;
        Self::handle_response(response).await
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{\"base_url\":\"{}\"}}", self.base_url)
    }
}
