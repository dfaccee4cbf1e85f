//! HTTP client for the CMS schema API.

use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::schema::Schema;

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Workspace scope for schema requests. Schemas are defined globally, so
/// requests always target the zero workspace.
const WORKSPACE_ID: u64 = 0;

/// Bearer token returned by the authentication handshake.
///
/// [`SchemaClient::fetch_schema`] takes the token by reference, so a schema
/// cannot be requested before authentication succeeded.
#[derive(Debug, Clone)]
pub struct AccessToken(String);

impl AccessToken {
    fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Deserialize)]
struct AuthResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    message: String,
}

/// Client for the CMS schema API.
///
/// Build once with [`SchemaClient::new`], call
/// [`authenticate`](Self::authenticate), then fetch schemas with the
/// returned token. There are no retries; the first failure aborts the run.
#[derive(Debug)]
pub struct SchemaClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl SchemaClient {
    /// Build the underlying HTTP client from `config`.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let mut builder =
            reqwest::Client::builder().timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS));
        if !config.verify_tls {
            warn!("TLS certificate verification is disabled for CMS API calls");
            builder = builder.danger_accept_invalid_certs(true);
        }
        let http = builder.build()?;
        Ok(Self { http, config })
    }

    fn endpoint(&self, path: &str) -> String {
        let base = self.config.base_url.as_str().trim_end_matches('/');
        format!("{base}/{}/{path}", self.config.api_version)
    }

    /// Perform the authentication handshake and return the access token.
    pub async fn authenticate(&self) -> Result<AccessToken, ApiError> {
        let url = self.endpoint("authentication");
        debug!(%url, "Sending authentication request.");
        let response = self
            .http
            .post(&url)
            .json(&serde_json::json!({
                "name": self.config.username,
                "password": self.config.password,
            }))
            .send()
            .await?;

        let status = response.status();
        match status {
            StatusCode::UNAUTHORIZED => Err(ApiError::Authentication),
            StatusCode::NOT_FOUND => Err(ApiError::NotFound),
            _ if !status.is_success() => Err(ApiError::Service(status)),
            _ => {
                let auth: AuthResponse = response.json().await?;
                debug!(%status, "Authentication succeeded.");
                Ok(AccessToken(auth.access_token))
            }
        }
    }

    /// Fetch the schema for `model`.
    pub async fn fetch_schema(&self, model: &str, token: &AccessToken) -> Result<Schema, ApiError> {
        let url = self.endpoint(&format!("{WORKSPACE_ID}/{model}/scheme"));
        debug!(%url, model, "Sending schema request.");
        let response = self
            .http
            .get(&url)
            .bearer_auth(token.as_str())
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::FORBIDDEN {
            let message = response
                .json::<ErrorResponse>()
                .await
                .map(|body| body.message)
                .unwrap_or_else(|_| "the server did not say why".to_string());
            return Err(ApiError::Access(message));
        }
        if status != StatusCode::OK {
            return Err(ApiError::Service(status));
        }

        let schema: Schema = response.json().await?;
        debug!(
            model,
            columns = schema.column_defs.len(),
            "Received schema."
        );
        Ok(schema)
    }
}
