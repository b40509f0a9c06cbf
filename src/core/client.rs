//! Translation client: fresh token per call, one request per operation

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::core::auth::Authenticator;
use crate::core::config::TranslatorConfig;
use crate::core::errors::{Result, TranslationError};
use crate::core::models::{
    BatchTranslation, Credentials, TranslateArrayElement, TranslateResponse, TranslationRequest,
};

/// Client for the remote translate operations.
///
/// Every public call is a single stateless round trip: fetch a bearer token,
/// attach it as the `Authorization` header, invoke the operation, parse the
/// response. No caching, no retries, no internal concurrency.
#[derive(Debug, Clone)]
pub struct Translator {
    client: reqwest::Client,
    config: Arc<TranslatorConfig>,
    authenticator: Authenticator,
}

impl Translator {
    /// Create a new translator
    pub fn new(config: TranslatorConfig) -> Result<Self> {
        config.validate()?;

        let timeout = Duration::from_millis(config.timeout_ms);
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        let authenticator = Authenticator::new(
            client.clone(),
            config.token_endpoint.clone(),
            config.scope.clone(),
        );

        Ok(Self {
            client,
            config: Arc::new(config),
            authenticator,
        })
    }

    /// Create from environment
    pub fn from_env() -> Result<Self> {
        let config = TranslatorConfig::from_env()?;
        Self::new(config)
    }

    /// Translate a single string using the configured credentials
    pub async fn translate(&self, text: &str, target_lang: &str) -> Result<String> {
        self.translate_with_credentials(text, target_lang, &self.config.credentials)
            .await
    }

    /// Translate a single string, overriding the configured credentials
    pub async fn translate_with_credentials(
        &self,
        text: &str,
        target_lang: &str,
        credentials: &Credentials,
    ) -> Result<String> {
        let request = TranslationRequest::new(text, target_lang);
        let token = self.authenticator.get_access_token(credentials).await?;

        debug!("Translating single string to {}", request.target_lang);

        // appId stays blank; the access token rides in the Authorization header
        let body = serde_json::json!({
            "appId": "",
            "text": request.text,
            "from": request.source_lang,
            "to": request.target_lang,
            "contentType": "text/html",
            "category": "general",
        });

        let response = self
            .client
            .post(self.config.translate_url())
            .header("Authorization", token.bearer())
            .json(&body)
            .send()
            .await
            .map_err(|e| TranslationError::NetworkError {
                message: e.to_string(),
            })?;

        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TranslationError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: TranslateResponse =
            response
                .json()
                .await
                .map_err(|e| TranslationError::InvalidResponseError {
                    message: e.to_string(),
                })?;

        Ok(parsed.translated_text)
    }

    /// Translate an ordered batch using the configured credentials
    pub async fn translate_array(
        &self,
        texts: &[String],
        target_lang: &str,
    ) -> Result<BatchTranslation> {
        self.translate_array_with_credentials(texts, target_lang, &self.config.credentials)
            .await
    }

    /// Translate an ordered batch, overriding the configured credentials.
    ///
    /// One remote call for the whole array. A per-item error does not fail
    /// the batch: the original string is kept at that index and tallied in
    /// `error_count`. Output length always equals input length.
    pub async fn translate_array_with_credentials(
        &self,
        texts: &[String],
        target_lang: &str,
        credentials: &Credentials,
    ) -> Result<BatchTranslation> {
        let token = self.authenticator.get_access_token(credentials).await?;

        debug!("Translating batch of {} strings to {}", texts.len(), target_lang);

        let body = serde_json::json!({
            "appId": "",
            "texts": texts,
            "from": "en",
            "to": target_lang,
            "options": {
                "ContentType": "text/html",
            },
        });

        let response = self
            .client
            .post(self.config.translate_array_url())
            .header("Authorization", token.bearer())
            .json(&body)
            .send()
            .await
            .map_err(|e| TranslationError::NetworkError {
                message: e.to_string(),
            })?;

        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TranslationError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let elements: Vec<TranslateArrayElement> =
            response
                .json()
                .await
                .map_err(|e| TranslationError::InvalidResponseError {
                    message: e.to_string(),
                })?;

        collect_batch(texts, elements)
    }
}

/// Map batch response elements back onto the input array.
///
/// Failed items degrade to the original source text; alignment is by index
/// and a length mismatch fails the whole batch.
fn collect_batch(
    texts: &[String],
    elements: Vec<TranslateArrayElement>,
) -> Result<BatchTranslation> {
    if elements.len() != texts.len() {
        return Err(TranslationError::InvalidResponseError {
            message: format!(
                "batch response carried {} elements for {} inputs",
                elements.len(),
                texts.len()
            ),
        });
    }

    let mut translations = Vec::with_capacity(texts.len());
    let mut error_count = 0;

    for (i, element) in elements.iter().enumerate() {
        match element.text() {
            Some(text) => translations.push(text.to_string()),
            None => {
                warn!(
                    "Batch item {} failed remotely ({}), keeping source text",
                    i,
                    element.error.as_deref().unwrap_or("no translated text")
                );
                error_count += 1;
                translations.push(texts[i].clone());
            }
        }
    }

    Ok(BatchTranslation {
        translations,
        error_count,
    })
}
