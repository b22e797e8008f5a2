//! HTTP client construction and response snapshots.

use std::collections::BTreeMap;

use reqwest::header::HeaderMap;
use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::config::{get_timeout, JSON_BODY_EXCERPT_CHARS, USER_AGENT};
use crate::error::{Result, StepError};
use crate::json::excerpt;

/// Create a configured HTTP client.
///
/// No client-wide timeout is set; each request carries its own.
pub fn create_client() -> Result<Client> {
    let client = Client::builder().user_agent(USER_AGENT).build()?;
    Ok(client)
}

/// A received HTTP response: status, headers and the raw body text.
///
/// The body is parsed as JSON only when an assertion asks for it.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: u16,
    headers: HeaderMap,
    body: String,
}

impl ApiResponse {
    pub fn new(status: u16, headers: HeaderMap, body: impl Into<String>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// Drain a `reqwest` response into a snapshot.
    pub async fn read(response: reqwest::Response) -> Result<Self> {
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.text().await?;
        Ok(Self::new(status, headers, body))
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Header value as text, if present and valid ASCII.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Parse the body as JSON.
    ///
    /// A body that does not parse yields `InvalidJson` quoting the start of
    /// the body.
    pub fn json(&self) -> Result<Value> {
        serde_json::from_str(&self.body).map_err(|e| StepError::InvalidJson {
            reason: e.to_string(),
            body: excerpt(&self.body, JSON_BODY_EXCERPT_CHARS),
        })
    }
}

/// Send a GET and snapshot the response.
///
/// A GET with `query` gets the longer timeout, even when the map is empty.
/// Non-2xx statuses are returned as responses, not errors; only transport
/// and timeout failures are errors.
pub async fn send_get(
    client: &Client,
    url: Url,
    headers: &BTreeMap<String, String>,
    query: Option<&BTreeMap<String, String>>,
) -> Result<ApiResponse> {
    let timeout = get_timeout(query.is_some());
    tracing::debug!(
        url = %url,
        timeout_secs = timeout.as_secs(),
        headers = ?headers.keys().collect::<Vec<_>>(),
        query = ?query.map(|q| q.keys().collect::<Vec<_>>()),
        "Sending GET"
    );

    let mut request = client.get(url).timeout(timeout);
    for (name, value) in headers {
        request = request.header(name, value);
    }
    if let Some(query) = query {
        request = request.query(query);
    }

    let response = ApiResponse::read(request.send().await?).await?;
    tracing::debug!(
        status = response.status(),
        body_len = response.body().len(),
        "Received response"
    );
    Ok(response)
}
