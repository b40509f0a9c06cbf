//! OAuth2 client-credentials grant against the Datamarket token endpoint

use tracing::debug;

use crate::core::errors::{Result, TranslationError};
use crate::core::models::{AccessToken, Credentials};

/// Fetches short-lived bearer tokens.
///
/// Stateless: every call is one POST to the token endpoint. Nothing is
/// cached and `expires_in` is never tracked, so each translate call pays
/// the full auth round trip.
#[derive(Debug, Clone)]
pub struct Authenticator {
    client: reqwest::Client,
    token_endpoint: String,
    scope: String,
}

impl Authenticator {
    pub fn new(client: reqwest::Client, token_endpoint: String, scope: String) -> Self {
        Self {
            client,
            token_endpoint,
            scope,
        }
    }

    /// Exchange client credentials for an access token.
    ///
    /// Fails with `AuthError` when the endpoint returns a non-success
    /// status or a payload without a usable `access_token`.
    pub async fn get_access_token(&self, credentials: &Credentials) -> Result<AccessToken> {
        debug!("Requesting access token from {}", self.token_endpoint);

        let params = [
            ("grant_type", "client_credentials"),
            ("client_id", credentials.client_id.as_str()),
            ("client_secret", credentials.client_secret.as_str()),
            ("scope", self.scope.as_str()),
        ];

        let response = self
            .client
            .post(&self.token_endpoint)
            .form(&params)
            .send()
            .await
            .map_err(|e| TranslationError::NetworkError {
                message: e.to_string(),
            })?;

        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TranslationError::AuthError {
                status: status.as_u16(),
                message,
            });
        }

        let token: AccessToken =
            response
                .json()
                .await
                .map_err(|e| TranslationError::AuthError {
                    status: status.as_u16(),
                    message: format!("malformed token payload: {}", e),
                })?;

        if token.access_token.is_empty() {
            return Err(TranslationError::AuthError {
                status: status.as_u16(),
                message: "token payload carried an empty access_token".to_string(),
            });
        }

        debug!("Access token obtained (expires_in={})", token.expires_in);

        Ok(token)
    }
}
