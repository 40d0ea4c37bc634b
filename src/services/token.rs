use crate::services::catalog::CatalogError;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::fmt;

/// Path of the XAPP token endpoint, relative to the API base
pub const TOKEN_PATH: &str = "tokens/xapp_token";

#[derive(Debug, Deserialize)]
struct TokenResponse {
    token: String,
    #[serde(default)]
    expires_at: Option<String>,
}

/// Application token for the Artsy API
///
/// Acquired once at startup and shared read-only for the life of the
/// process. There is no refresh.
#[derive(Clone)]
pub struct TokenProvider {
    token: String,
    expires_at: Option<DateTime<Utc>>,
}

impl TokenProvider {
    /// Wrap an already issued token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            expires_at: None,
        }
    }

    /// Exchange client credentials for an XAPP token
    pub async fn acquire(
        client: &Client,
        base_url: &str,
        client_id: &str,
        client_secret: &str,
    ) -> Result<Self, CatalogError> {
        let url = format!("{}/{}", base_url.trim_end_matches('/'), TOKEN_PATH);

        tracing::debug!("Requesting XAPP token from: {}", url);

        let response = client
            .post(&url)
            .form(&[("client_id", client_id), ("client_secret", client_secret)])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK && status != StatusCode::CREATED {
            let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Token request rejected: {} - {}", status, body);
            return Err(CatalogError::Authentication(format!(
                "token endpoint returned {}",
                status
            )));
        }

        let body = response.text().await?;
        let parsed: TokenResponse = serde_json::from_str(&body)
            .map_err(|e| CatalogError::Authentication(format!("malformed token response: {}", e)))?;

        if parsed.token.is_empty() {
            return Err(CatalogError::Authentication("token endpoint returned an empty token".into()));
        }

        let expires_at = parsed
            .expires_at
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|dt| dt.with_timezone(&Utc));

        Ok(Self {
            token: parsed.token,
            expires_at,
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Expiry the vendor advertised, if it sent a parseable one
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }
}

impl fmt::Debug for TokenProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenProvider")
            .field("token", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}
