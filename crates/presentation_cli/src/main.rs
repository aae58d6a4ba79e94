//! Manual test driver for the hansard chatbot webhook
//!
//! Replaces the throwaway scripts this tool grew out of: constants stay
//! inline, output goes to the console. All delivery logic lives in
//! `webhook_client`; this binary only decides how to display results.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::Path;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use webhook_client::{WebhookClient, WebhookConfig, WebhookResult};

/// Webhook URL under test
const WEBHOOK_URL: &str = "https://n8n.granite-automations.app/webhook/hansard-chatbot";

/// Fixed user id for session testing
const USER_ID: &str = "test-user-123";

/// Language tag
const LANG: &str = "en";

/// Sample voice recording, sent only when present on disk
const VOICE_SAMPLE: &str = "voice-sample.ogg";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = WebhookConfig::new(WEBHOOK_URL, USER_ID).with_lang(LANG);
    let client = WebhookClient::new(config)?;

    println!("➡ Sending text message");
    let result = client
        .send_text("Hello, testing parliamentary chatbot response")
        .await?;
    print_result(&result);

    let voice_path = Path::new(VOICE_SAMPLE);
    if voice_path.exists() {
        println!("🎤 Sending voice file: {}", voice_path.display());
        let result = client.send_voice(voice_path).await?;
        print_result(&result);
    }

    println!("📝 Sending raw text body");
    let result = client.send_raw("Hello, this is the raw text body 👋").await?;
    print_result(&result);

    Ok(())
}

fn print_result(result: &WebhookResult) {
    match result {
        WebhookResult::Success { body } => println!("✅ Webhook response: {body}"),
        WebhookResult::Failure { status, body } => println!("❌ Error: {status} {body}"),
    }
}
