//! Webhook delivery for the hansard chatbot
//!
//! Sends text messages and voice recordings to a fixed n8n webhook
//! endpoint and classifies the HTTP response. One request per call, no
//! retries; the caller decides what to do with the outcome.

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::WebhookClient;
pub use config::WebhookConfig;
pub use error::WebhookError;
pub use types::{AudioFormat, OutboundMessage, WebhookResult};
