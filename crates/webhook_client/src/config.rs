//! Configuration for the webhook client

/// Configuration for the webhook client
///
/// Constructed once at process start and handed to
/// [`WebhookClient::new`](crate::client::WebhookClient::new); never
/// mutated afterwards.
#[derive(Debug, Clone)]
pub struct WebhookConfig {
    /// Webhook endpoint URL (fixed for the lifetime of the client)
    pub endpoint: String,
    /// User identifier attached to every payload
    pub user_id: String,
    /// Language tag (ISO 639-1, e.g. "en")
    pub lang: String,
    /// Send the standard `Accept-Language` header in addition to the
    /// custom `X-Lang` header
    pub include_accept_language: bool,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
    /// Additional headers attached to every request
    pub extra_headers: Vec<(String, String)>,
}

impl WebhookConfig {
    /// Default language tag
    pub const DEFAULT_LANG: &'static str = "en";

    /// Default request timeout (30 seconds)
    pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

    /// Create a new config with required endpoint and user id
    #[must_use]
    pub fn new(endpoint: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            user_id: user_id.into(),
            lang: Self::DEFAULT_LANG.to_string(),
            include_accept_language: true,
            timeout_ms: Self::DEFAULT_TIMEOUT_MS,
            extra_headers: Vec::new(),
        }
    }

    /// Set the language tag
    #[must_use]
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Control whether the `Accept-Language` header is sent
    #[must_use]
    pub const fn with_accept_language(mut self, include: bool) -> Self {
        self.include_accept_language = include;
        self
    }

    /// Set the request timeout
    #[must_use]
    pub const fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Attach an additional header to every request
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers.push((name.into(), value.into()));
        self
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns a description of the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        if self.endpoint.is_empty() {
            return Err("endpoint is required".to_string());
        }
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(format!("endpoint must be an http(s) URL: {}", self.endpoint));
        }
        if self.user_id.is_empty() {
            return Err("user_id is required".to_string());
        }
        if self.lang.is_empty() {
            return Err("lang is required".to_string());
        }
        Ok(())
    }
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self::new("", "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sets_endpoint_and_user_id() {
        let config = WebhookConfig::new("https://example.com/webhook", "user-1");
        assert_eq!(config.endpoint, "https://example.com/webhook");
        assert_eq!(config.user_id, "user-1");
        assert_eq!(config.lang, WebhookConfig::DEFAULT_LANG);
        assert_eq!(config.timeout_ms, WebhookConfig::DEFAULT_TIMEOUT_MS);
        assert!(config.include_accept_language);
        assert!(config.extra_headers.is_empty());
    }

    #[test]
    fn with_lang_sets_lang() {
        let config = WebhookConfig::new("https://example.com", "user-1").with_lang("de");
        assert_eq!(config.lang, "de");
    }

    #[test]
    fn with_accept_language_disables_header() {
        let config =
            WebhookConfig::new("https://example.com", "user-1").with_accept_language(false);
        assert!(!config.include_accept_language);
    }

    #[test]
    fn with_timeout_sets_timeout() {
        let config = WebhookConfig::new("https://example.com", "user-1").with_timeout_ms(5000);
        assert_eq!(config.timeout_ms, 5000);
    }

    #[test]
    fn with_header_appends() {
        let config = WebhookConfig::new("https://example.com", "user-1")
            .with_header("X-Api-Key", "secret")
            .with_header("X-Trace", "abc");
        assert_eq!(config.extra_headers.len(), 2);
        assert_eq!(config.extra_headers[0].0, "X-Api-Key");
    }

    #[test]
    fn validate_accepts_valid_config() {
        let config = WebhookConfig::new("https://example.com/webhook", "user-1");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_endpoint() {
        let config = WebhookConfig::new("", "user-1");
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_non_http_endpoint() {
        let config = WebhookConfig::new("ftp://example.com", "user-1");
        let err = config.validate().unwrap_err();
        assert!(err.contains("http(s)"));
    }

    #[test]
    fn validate_rejects_empty_user_id() {
        let config = WebhookConfig::new("https://example.com", "");
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_lang() {
        let config = WebhookConfig::new("https://example.com", "user-1").with_lang("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn default_is_invalid() {
        assert!(WebhookConfig::default().validate().is_err());
    }
}
