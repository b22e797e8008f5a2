//! Per-scenario state and the setup and request operations.

use std::collections::BTreeMap;
use std::fmt;

use reqwest::Client;

use crate::config::{bearer_token_from_env, join_url, normalize_base_url};
use crate::error::{Result, StepError};
use crate::http::{create_client, send_get, ApiResponse};

/// Header carrying the bearer token.
pub const AUTHORIZATION: &str = "Authorization";

/// Mutable state shared by the steps of one scenario.
///
/// Created empty when the scenario starts. Setup steps fill in the base URL,
/// headers and query parameters; request steps replace the current response.
/// Headers and query parameters survive requests until a step replaces them.
///
/// NOTE: `Debug` is implemented by hand so the `Authorization` value is
/// never printed in scenario reports.
#[derive(Default)]
pub struct ScenarioContext {
    base_url: Option<String>,
    client: Option<Client>,
    headers: BTreeMap<String, String>,
    query: BTreeMap<String, String>,
    response: Option<ApiResponse>,
}

impl fmt::Debug for ScenarioContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: BTreeMap<&str, &str> = self
            .headers
            .iter()
            .map(|(name, value)| {
                if name.eq_ignore_ascii_case(AUTHORIZATION) {
                    (name.as_str(), "<redacted>")
                } else {
                    (name.as_str(), value.as_str())
                }
            })
            .collect();

        f.debug_struct("ScenarioContext")
            .field("base_url", &self.base_url)
            .field("headers", &headers)
            .field("query", &self.query)
            .field("response_status", &self.response.as_ref().map(ApiResponse::status))
            .finish()
    }
}

impl ScenarioContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the normalized base URL and start from a fresh client, header
    /// map and query map. Sends nothing.
    pub fn set_base_url(&mut self, base_url: &str) -> Result<()> {
        self.base_url = Some(normalize_base_url(base_url));
        self.client = Some(create_client()?);
        self.headers.clear();
        self.query.clear();
        Ok(())
    }

    /// Insert or overwrite one pending request header.
    ///
    /// Names compare case-insensitively, so `accept` replaces `Accept`.
    pub fn add_header(&mut self, name: &str, value: &str) {
        self.headers.retain(|existing, _| !existing.eq_ignore_ascii_case(name));
        self.headers.insert(name.to_string(), value.to_string());
    }

    /// Set `Authorization: Bearer <token>` when a token variable is present.
    ///
    /// Returns whether a token was found. Absence is not an error.
    pub fn add_optional_auth_header(&mut self) -> bool {
        self.apply_bearer_token(bearer_token_from_env())
    }

    pub(crate) fn apply_bearer_token(&mut self, token: Option<String>) -> bool {
        match token {
            Some(token) => {
                tracing::info!("API token found in environment, sending bearer authorization");
                self.add_header(AUTHORIZATION, &format!("Bearer {token}"));
                true
            }
            None => {
                tracing::debug!("No API token in environment, sending anonymous requests");
                false
            }
        }
    }

    /// Replace the pending query parameters.
    pub fn set_query<I>(&mut self, rows: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.query = rows.into_iter().collect();
    }

    /// GET `path` with the pending headers and a 30 second timeout.
    pub async fn get(&mut self, path: &str) -> Result<&ApiResponse> {
        let (client, url) = self.target(path)?;
        let response = send_get(&client, url, &self.headers, None).await?;
        Ok(self.record_response(response))
    }

    /// GET `path` with the pending headers and query parameters and a 60
    /// second timeout.
    pub async fn get_with_params(&mut self, path: &str) -> Result<&ApiResponse> {
        let (client, url) = self.target(path)?;
        let response = send_get(&client, url, &self.headers, Some(&self.query)).await?;
        Ok(self.record_response(response))
    }

    /// Make `response` the current response, replacing any earlier one.
    pub fn record_response(&mut self, response: ApiResponse) -> &ApiResponse {
        self.response.insert(response)
    }

    fn target(&self, path: &str) -> Result<(Client, url::Url)> {
        let (Some(base_url), Some(client)) = (&self.base_url, &self.client) else {
            return Err(StepError::MissingBaseUrl);
        };
        Ok((client.clone(), join_url(base_url, path)?))
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    pub fn query(&self) -> &BTreeMap<String, String> {
        &self.query
    }

    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    /// The current response, or `NoResponse` before any request.
    pub fn response(&self) -> Result<&ApiResponse> {
        self.response.as_ref().ok_or(StepError::NoResponse)
    }
}
