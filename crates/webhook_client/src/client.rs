//! Webhook client for sending chat messages and voice recordings
//!
//! Translates an outbound message into a single HTTP POST against the
//! configured endpoint and classifies the response. No retries; a second
//! call is a second, independent request.

use std::path::Path;
use std::time::Duration;

use reqwest::Client;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::multipart::{Form, Part};
use tracing::{debug, instrument, warn};

use crate::config::WebhookConfig;
use crate::error::WebhookError;
use crate::types::{AudioFormat, OutboundMessage, WebhookResult};

/// Custom language header sent on every request
const X_LANG: &str = "x-lang";

/// Client for a single chat webhook endpoint
#[derive(Debug, Clone)]
pub struct WebhookClient {
    client: Client,
    config: WebhookConfig,
    headers: HeaderMap,
}

impl WebhookClient {
    /// Create a new webhook client
    ///
    /// The common header set is materialized here, so invalid header
    /// material in the config fails at construction rather than on the
    /// first send.
    ///
    /// # Errors
    ///
    /// Returns `WebhookError::Configuration` if the configuration is
    /// invalid.
    pub fn new(config: WebhookConfig) -> Result<Self, WebhookError> {
        config.validate().map_err(WebhookError::Configuration)?;

        let headers = common_headers(&config)?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| {
                WebhookError::Configuration(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            config,
            headers,
        })
    }

    /// Get the configured endpoint URL
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// Get the configured user id
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.config.user_id
    }

    /// Send a plain text message
    ///
    /// The form body carries `message`, `lang` and `userId`. An empty
    /// message is not rejected locally; it produces an empty `message=`
    /// field.
    #[instrument(skip(self, message), fields(message_len = message.len()))]
    pub async fn send_text(&self, message: &str) -> Result<WebhookResult, WebhookError> {
        debug!("Sending text message");

        let form = [
            ("message", message),
            ("lang", self.config.lang.as_str()),
            ("userId", self.config.user_id.as_str()),
        ];

        let response = self
            .client
            .post(&self.config.endpoint)
            .headers(self.headers.clone())
            .form(&form)
            .send()
            .await?;

        classify(response).await
    }

    /// Send a voice recording from a file on disk
    ///
    /// The file is read in full before any request is issued, so an
    /// unreadable path fails without touching the network and the handle
    /// is released on every exit path.
    #[instrument(skip(self), fields(path = %audio_path.display()))]
    pub async fn send_voice(&self, audio_path: &Path) -> Result<WebhookResult, WebhookError> {
        let audio = tokio::fs::read(audio_path)
            .await
            .map_err(|e| WebhookError::file_access(audio_path.display().to_string(), e))?;

        let filename = audio_path
            .file_name()
            .map_or_else(|| "voice".to_string(), |n| n.to_string_lossy().into_owned());

        self.send_voice_bytes(audio, &filename).await
    }

    /// Send a voice recording from raw bytes
    ///
    /// Builds a multipart form with one file part named `voice` plus
    /// `lang` and `userId` text fields. The part's MIME type is guessed
    /// from the filename extension.
    #[instrument(skip(self, audio), fields(audio_size = audio.len(), filename = %filename))]
    pub async fn send_voice_bytes(
        &self,
        audio: Vec<u8>,
        filename: &str,
    ) -> Result<WebhookResult, WebhookError> {
        debug!("Sending voice recording");

        let mime_type = AudioFormat::mime_for_filename(filename);

        let file_part = Part::bytes(audio)
            .file_name(filename.to_string())
            .mime_str(mime_type)
            .map_err(|e| WebhookError::Configuration(format!("Invalid MIME type: {e}")))?;

        let form = Form::new()
            .part("voice", file_part)
            .text("lang", self.config.lang.clone())
            .text("userId", self.config.user_id.clone());

        let response = self
            .client
            .post(&self.config.endpoint)
            .headers(self.headers.clone())
            .multipart(form)
            .send()
            .await?;

        classify(response).await
    }

    /// Send a raw text body with `Content-Type: text/plain`
    ///
    /// Unlike [`send_text`](Self::send_text), the string is the whole
    /// request body; the language travels only in the headers.
    #[instrument(skip(self, body), fields(body_len = body.len()))]
    pub async fn send_raw(&self, body: &str) -> Result<WebhookResult, WebhookError> {
        debug!("Sending raw text body");

        let response = self
            .client
            .post(&self.config.endpoint)
            .headers(self.headers.clone())
            .header(CONTENT_TYPE, "text/plain; charset=utf-8")
            .body(body.to_string())
            .send()
            .await?;

        classify(response).await
    }

    /// Send an outbound message of either kind
    pub async fn send(&self, message: OutboundMessage) -> Result<WebhookResult, WebhookError> {
        match message {
            OutboundMessage::Text { body } => self.send_text(&body).await,
            OutboundMessage::Voice { audio, filename } => {
                self.send_voice_bytes(audio, &filename).await
            },
        }
    }
}

/// Classify an HTTP response into a webhook result
///
/// 2xx with a JSON body is a success; 2xx with anything else is a parse
/// error, kept distinct from a server-side failure status.
async fn classify(response: reqwest::Response) -> Result<WebhookResult, WebhookError> {
    let status = response.status();

    if status.is_success() {
        let body = response.text().await?;
        match serde_json::from_str(&body) {
            Ok(value) => {
                debug!("Webhook accepted the request");
                Ok(WebhookResult::Success { body: value })
            },
            Err(e) => Err(WebhookError::response_parse(e.to_string())),
        }
    } else {
        let body = response.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), "Webhook returned error status");
        Ok(WebhookResult::Failure {
            status: status.as_u16(),
            body,
        })
    }
}

/// Build the header set attached to every request
fn common_headers(config: &WebhookConfig) -> Result<HeaderMap, WebhookError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let lang = HeaderValue::from_str(&config.lang)
        .map_err(|e| WebhookError::Configuration(format!("Invalid language tag: {e}")))?;
    headers.insert(HeaderName::from_static(X_LANG), lang.clone());

    if config.include_accept_language {
        headers.insert(ACCEPT_LANGUAGE, lang);
    }

    for (name, value) in &config.extra_headers {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| WebhookError::Configuration(format!("Invalid header name {name}: {e}")))?;
        let header_value = HeaderValue::from_str(value)
            .map_err(|e| WebhookError::Configuration(format!("Invalid header value: {e}")))?;
        headers.insert(header_name, header_value);
    }

    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> WebhookConfig {
        WebhookConfig::new("https://example.com/webhook/chatbot", "test-user-123")
    }

    #[test]
    fn new_succeeds_with_valid_config() {
        let client = WebhookClient::new(test_config());
        assert!(client.is_ok());
    }

    #[test]
    fn new_rejects_empty_endpoint() {
        let result = WebhookClient::new(WebhookConfig::new("", "user-1"));
        assert!(matches!(result, Err(WebhookError::Configuration(_))));
    }

    #[test]
    fn new_rejects_non_http_endpoint() {
        let result = WebhookClient::new(WebhookConfig::new("file:///etc/passwd", "user-1"));
        assert!(matches!(result, Err(WebhookError::Configuration(_))));
    }

    #[test]
    fn new_rejects_empty_user_id() {
        let result = WebhookClient::new(WebhookConfig::new("https://example.com", ""));
        assert!(matches!(result, Err(WebhookError::Configuration(_))));
    }

    #[test]
    fn new_rejects_invalid_language_header_value() {
        let config = test_config().with_lang("en\nevil: header");
        let result = WebhookClient::new(config);
        assert!(matches!(result, Err(WebhookError::Configuration(_))));
    }

    #[test]
    fn new_rejects_invalid_extra_header_name() {
        let config = test_config().with_header("bad header name", "value");
        let result = WebhookClient::new(config);
        assert!(matches!(result, Err(WebhookError::Configuration(_))));
    }

    #[test]
    fn endpoint_getter() {
        let client = WebhookClient::new(test_config()).unwrap();
        assert_eq!(client.endpoint(), "https://example.com/webhook/chatbot");
        assert_eq!(client.user_id(), "test-user-123");
    }

    mod header_tests {
        use super::*;

        #[test]
        fn common_headers_include_accept_and_lang() {
            let headers = common_headers(&test_config()).unwrap();
            assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
            assert_eq!(headers.get("x-lang").unwrap(), "en");
            assert_eq!(headers.get(ACCEPT_LANGUAGE).unwrap(), "en");
        }

        #[test]
        fn accept_language_omitted_when_disabled() {
            let config = test_config().with_accept_language(false);
            let headers = common_headers(&config).unwrap();
            assert!(headers.get(ACCEPT_LANGUAGE).is_none());
            // the custom header stays
            assert_eq!(headers.get("x-lang").unwrap(), "en");
        }

        #[test]
        fn lang_headers_follow_configured_lang() {
            let config = test_config().with_lang("fr");
            let headers = common_headers(&config).unwrap();
            assert_eq!(headers.get("x-lang").unwrap(), "fr");
            assert_eq!(headers.get(ACCEPT_LANGUAGE).unwrap(), "fr");
        }

        #[test]
        fn extra_headers_are_attached() {
            let config = test_config().with_header("X-Api-Key", "secret");
            let headers = common_headers(&config).unwrap();
            assert_eq!(headers.get("x-api-key").unwrap(), "secret");
        }
    }
}
