//! HTTP client implementation

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response};
use secrecy::{ExposeSecret, SecretString};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, error};

use crate::errors::FormError;

/// HTTP client for backend communication
pub struct HttpClient {
    client: Client,
    base_url: String,
    api_key: Option<SecretString>,
}

impl HttpClient {
    /// Create a new HTTP client
    pub fn new(
        base_url: &str,
        api_key: Option<SecretString>,
        timeout: Duration,
    ) -> Result<Self, FormError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => request.header("X-API-Key", key.expose_secret()),
            None => request,
        }
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, FormError> {
        let url = self.url(path);
        debug!("GET {}", url);

        let request = self.authorize(self.client.get(&url).query(query));
        let response = check_status("GET", request.send().await?).await?;

        let body = response.json().await?;
        Ok(body)
    }

    /// Make a POST request whose response body is ignored
    pub async fn post_empty<B: Serialize>(
        &self,
        path: &str,
        query: &[(&str, String)],
        body: &B,
    ) -> Result<(), FormError> {
        let url = self.url(path);
        debug!("POST {}", url);

        let request = self.authorize(self.client.post(&url).query(query).json(body));
        check_status("POST", request.send().await?).await?;
        Ok(())
    }

    /// Make a PUT request whose response body is ignored
    pub async fn put_empty<B: Serialize>(
        &self,
        path: &str,
        query: &[(&str, String)],
        body: &B,
    ) -> Result<(), FormError> {
        let url = self.url(path);
        debug!("PUT {}", url);

        let request = self.authorize(self.client.put(&url).query(query).json(body));
        check_status("PUT", request.send().await?).await?;
        Ok(())
    }
}

async fn check_status(method: &str, response: Response) -> Result<Response, FormError> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    error!("HTTP {} failed: {} - {}", method, status, body);
    Err(FormError::BackendError(format!("{}: {}", status, body)))
}
