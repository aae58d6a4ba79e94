//! Message and result types for the webhook client

use serde::{Deserialize, Serialize};

/// A payload bound for the webhook
///
/// Created per call-site and consumed by exactly one send operation.
#[derive(Debug, Clone)]
pub enum OutboundMessage {
    /// Plain text chat message
    Text {
        /// Message body
        body: String,
    },
    /// Voice recording uploaded as a file part
    Voice {
        /// Raw audio bytes
        audio: Vec<u8>,
        /// Filename reported in the multipart form
        filename: String,
    },
}

impl OutboundMessage {
    /// Create a text message
    #[must_use]
    pub fn text(body: impl Into<String>) -> Self {
        Self::Text { body: body.into() }
    }

    /// Create a voice message
    #[must_use]
    pub fn voice(audio: Vec<u8>, filename: impl Into<String>) -> Self {
        Self::Voice {
            audio,
            filename: filename.into(),
        }
    }

    /// Check if this is a text message
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text { .. })
    }

    /// Check if this is a voice message
    #[must_use]
    pub const fn is_voice(&self) -> bool {
        matches!(self, Self::Voice { .. })
    }
}

/// Audio formats recognized for voice uploads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    /// Opus codec
    Opus,
    /// OGG container (typically with Opus codec)
    Ogg,
    /// MP3 format
    Mp3,
    /// WAV format (uncompressed)
    Wav,
    /// M4A/AAC format
    M4a,
    /// WebM format
    Webm,
}

impl AudioFormat {
    /// Get the MIME type for this audio format
    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Opus => "audio/opus",
            Self::Ogg => "audio/ogg",
            Self::Mp3 => "audio/mpeg",
            Self::Wav => "audio/wav",
            Self::M4a => "audio/m4a",
            Self::Webm => "audio/webm",
        }
    }

    /// Parse audio format from a filename extension
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "opus" => Some(Self::Opus),
            "ogg" | "oga" => Some(Self::Ogg),
            "mp3" => Some(Self::Mp3),
            "wav" => Some(Self::Wav),
            "m4a" => Some(Self::M4a),
            "webm" => Some(Self::Webm),
            _ => None,
        }
    }

    /// Guess the MIME type for a filename
    ///
    /// Unknown extensions fall back to `application/octet-stream`.
    #[must_use]
    pub fn mime_for_filename(filename: &str) -> &'static str {
        std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
            .map_or("application/octet-stream", Self::mime_type)
    }
}

/// Classified webhook response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum WebhookResult {
    /// 2xx response with a JSON body
    Success {
        /// Parsed response body (shape is external, treated opaquely)
        body: serde_json::Value,
    },
    /// Non-2xx response
    Failure {
        /// HTTP status code
        status: u16,
        /// Raw response text
        body: String,
    },
}

impl WebhookResult {
    /// Check whether the webhook accepted the request
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// HTTP status code of a failure
    #[must_use]
    pub const fn failure_status(&self) -> Option<u16> {
        match self {
            Self::Failure { status, .. } => Some(*status),
            Self::Success { .. } => None,
        }
    }
}
