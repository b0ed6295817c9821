//! API client for the session key management service.
//!
//! This module provides the `ApiClient` struct for making authenticated
//! requests against the management endpoints: session key CRUD and
//! share-link issuance.

use reqwest::{header, Client};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::debug;

use crate::models::{SessionKey, ShareRequest};

use super::ApiError;

/// HTTP request timeout in seconds.
/// 30s allows for slow API responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Serialize)]
struct NewSessionKey<'a> {
    key: &'a str,
    code: &'a str,
    status: bool,
}

#[derive(Debug, Serialize)]
struct StatusUpdate {
    status: bool,
}

#[derive(Debug, Deserialize)]
struct IssueTokenResponse {
    login_url: Option<String>,
}

/// API client for the session key management service.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    manage_url: String,
    bearer: Option<String>,
}

impl ApiClient {
    /// Create a new client for the management API at `manage_url`.
    pub fn new(manage_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            manage_url: manage_url.into().trim_end_matches('/').to_string(),
            bearer: None,
        })
    }

    /// Create a new ApiClient with the given bearer token, sharing the
    /// connection pool. An empty token counts as no token at all, so an
    /// empty placeholder header is never sent.
    pub fn with_bearer(&self, token: Option<String>) -> Self {
        Self {
            client: self.client.clone(), // Cheap clone, shares connection pool
            manage_url: self.manage_url.clone(),
            bearer: token.filter(|t| !t.trim().is_empty()),
        }
    }

    fn auth_headers(&self) -> Result<header::HeaderMap, ApiError> {
        let mut headers = header::HeaderMap::new();
        if let Some(ref token) = self.bearer {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|_| ApiError::InvalidBearerToken)?,
            );
        }
        Ok(headers)
    }

    /// Check if a response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body))
        }
    }

    /// Parse a 2xx response body. A structurally invalid body is a
    /// `MalformedResponse`, distinct from a transport failure.
    async fn parse_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| ApiError::MalformedResponse(format!("invalid JSON body: {}", e)))
    }

    /// Fetch all session keys, in the order the service returns them.
    pub async fn list_session_keys(&self) -> Result<Vec<SessionKey>, ApiError> {
        let url = format!("{}/sessionkeys", self.manage_url);
        let response = self
            .client
            .get(&url)
            .headers(self.auth_headers()?)
            .send()
            .await?;
        let response = Self::check_response(response).await?;
        Self::parse_json(response).await
    }

    /// Create a new session key record. The service assigns the id.
    pub async fn create_session_key(
        &self,
        key: &str,
        code: &str,
        status: bool,
    ) -> Result<SessionKey, ApiError> {
        let url = format!("{}/sessionkeys", self.manage_url);
        let response = self
            .client
            .post(&url)
            .headers(self.auth_headers()?)
            .json(&NewSessionKey { key, code, status })
            .send()
            .await?;
        let response = Self::check_response(response).await?;
        Self::parse_json(response).await
    }

    /// Update the active/inactive status of a session key.
    pub async fn update_session_key_status(&self, id: u64, status: bool) -> Result<(), ApiError> {
        let url = format!("{}/sessionkeys/{}", self.manage_url, id);
        debug!(id, status, "Updating session key status");
        let response = self
            .client
            .put(&url)
            .headers(self.auth_headers()?)
            .json(&StatusUpdate { status })
            .send()
            .await?;
        Self::check_response(response).await?;
        Ok(())
    }

    /// Delete a session key record.
    pub async fn delete_session_key(&self, id: u64) -> Result<(), ApiError> {
        let url = format!("{}/sessionkeys/{}", self.manage_url, id);
        debug!(id, "Deleting session key");
        let response = self
            .client
            .delete(&url)
            .headers(self.auth_headers()?)
            .send()
            .await?;
        Self::check_response(response).await?;
        Ok(())
    }

    /// Request a login URL for a validated share payload.
    ///
    /// A 2xx response without a usable `login_url` field is malformed, a
    /// distinct condition from a transport-level failure.
    pub async fn issue_login_url(&self, request: &ShareRequest) -> Result<String, ApiError> {
        let url = format!("{}/auth/oauth_token", self.manage_url);
        debug!(
            session_key_id = request.session_key_id,
            isolated = request.unique_name.is_some(),
            expires_in = request.expires_in,
            "Requesting login URL"
        );
        let response = self
            .client
            .post(&url)
            .headers(self.auth_headers()?)
            .json(request)
            .send()
            .await?;
        let response = Self::check_response(response).await?;
        let parsed: IssueTokenResponse = Self::parse_json(response).await?;
        parsed
            .login_url
            .filter(|u| !u.is_empty())
            .ok_or_else(|| ApiError::MalformedResponse("response is missing login_url".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manage_url_trailing_slash_is_stripped() {
        let client = ApiClient::new("http://localhost:8080/api/v1/").expect("client");
        assert_eq!(client.manage_url, "http://localhost:8080/api/v1");
    }

    #[test]
    fn test_with_bearer_drops_blank_tokens() {
        let client = ApiClient::new("http://localhost:8080/api/v1").expect("client");
        assert!(client.with_bearer(None).bearer.is_none());
        assert!(client.with_bearer(Some("".to_string())).bearer.is_none());
        assert!(client.with_bearer(Some("   ".to_string())).bearer.is_none());
        assert_eq!(
            client.with_bearer(Some("tok".to_string())).bearer.as_deref(),
            Some("tok")
        );
    }

    #[test]
    fn test_auth_headers_omitted_without_token() {
        let client = ApiClient::new("http://localhost:8080/api/v1").expect("client");
        let headers = client.auth_headers().expect("headers");
        assert!(headers.get(header::AUTHORIZATION).is_none());

        let headers = client
            .with_bearer(Some("sekrit".to_string()))
            .auth_headers()
            .expect("headers");
        assert_eq!(
            headers
                .get(header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok()),
            Some("Bearer sekrit")
        );
    }

    #[test]
    fn test_auth_headers_rejects_control_characters() {
        let client = ApiClient::new("http://localhost:8080/api/v1")
            .expect("client")
            .with_bearer(Some("bad\ntoken".to_string()));
        assert!(matches!(
            client.auth_headers(),
            Err(ApiError::InvalidBearerToken)
        ));
    }

    #[test]
    fn test_parse_issue_token_response() {
        let parsed: IssueTokenResponse =
            serde_json::from_str(r#"{"login_url":"https://chat.example.com/login?t=abc"}"#)
                .expect("parse");
        assert_eq!(parsed.login_url.as_deref(), Some("https://chat.example.com/login?t=abc"));

        // Unknown sibling fields are tolerated, a missing login_url is not a parse error
        let parsed: IssueTokenResponse =
            serde_json::from_str(r#"{"oauth_token":"abc"}"#).expect("parse");
        assert!(parsed.login_url.is_none());
    }

    #[test]
    fn test_new_session_key_wire_shape() {
        let body = serde_json::to_value(NewSessionKey {
            key: "sk-1",
            code: "c-1",
            status: true,
        })
        .expect("serialize");
        assert_eq!(body, serde_json::json!({"key":"sk-1","code":"c-1","status":true}));
    }
}
