//! Core data models for translation

use serde::{Deserialize, Serialize};

/// OAuth2 client credentials for the translation service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Check that both fields are present
    pub fn is_complete(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.is_empty()
    }
}

/// Access token returned by the Datamarket token endpoint.
///
/// All fields arrive as JSON strings, `expires_in` included. The token is
/// treated as opaque and never cached; `expires_in` is carried but not
/// interpreted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: String,
    #[serde(default)]
    pub scope: String,
}

impl AccessToken {
    /// Header value for the translate request
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

/// Translation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    pub source_lang: String,
    pub target_lang: String,
}

impl TranslationRequest {
    /// Source language is fixed to English by the upstream contract
    pub fn new(text: impl Into<String>, target_lang: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source_lang: "en".to_string(),
            target_lang: target_lang.into(),
        }
    }

    pub fn with_source_lang(mut self, source_lang: impl Into<String>) -> Self {
        self.source_lang = source_lang.into();
        self
    }
}

/// Outcome of a batch translation.
///
/// `translations` is aligned index-for-index with the input; entries that
/// failed remotely hold the original source text and are tallied in
/// `error_count`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchTranslation {
    pub translations: Vec<String>,
    pub error_count: usize,
}

impl BatchTranslation {
    pub fn len(&self) -> usize {
        self.translations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }

    /// True if every item translated cleanly
    pub fn is_complete(&self) -> bool {
        self.error_count == 0
    }
}

/// Body of a successful `Translate` response.
///
/// Field names keep the upstream contract's casing.
#[derive(Debug, Clone, Deserialize)]
pub struct TranslateResponse {
    #[serde(rename = "TranslatedText")]
    pub translated_text: String,
}

/// One element of a `TranslateArray` response, aligned with the request by
/// index. `error` set means the item failed remotely.
#[derive(Debug, Clone, Deserialize)]
pub struct TranslateArrayElement {
    #[serde(rename = "TranslatedText")]
    pub translated_text: Option<String>,
    #[serde(rename = "Error")]
    pub error: Option<String>,
}

impl TranslateArrayElement {
    /// Translated text if the item succeeded end to end
    pub fn text(&self) -> Option<&str> {
        if self.error.is_some() {
            return None;
        }
        self.translated_text.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults_to_english_source() {
        let request = TranslationRequest::new("hello", "fr");
        assert_eq!(request.source_lang, "en");
        assert_eq!(request.target_lang, "fr");
    }

    #[test]
    fn test_request_source_override() {
        let request = TranslationRequest::new("bonjour", "de").with_source_lang("fr");
        assert_eq!(request.source_lang, "fr");
    }

    #[test]
    fn test_access_token_bearer_header() {
        let token: AccessToken =
            serde_json::from_str(r#"{"access_token":"abc123","token_type":"http://schemas.xmlsoap.org/ws/2009/11/swt-token-profile-1.0","expires_in":"599","scope":"http://api.microsofttranslator.com"}"#)
                .unwrap();
        assert_eq!(token.bearer(), "Bearer abc123");
        assert_eq!(token.expires_in, "599");
    }

    #[test]
    fn test_array_element_error_wins_over_text() {
        let element = TranslateArrayElement {
            translated_text: Some("gato".to_string()),
            error: Some("TranslateApiException".to_string()),
        };
        assert!(element.text().is_none());
    }

    #[test]
    fn test_credentials_completeness() {
        assert!(Credentials::new("id", "secret").is_complete());
        assert!(!Credentials::new("id", "").is_complete());
    }
}
