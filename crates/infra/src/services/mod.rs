mod smtp;
mod stub;
mod twilio;

pub use smtp::SmtpEmailTransport;
pub use stub::{StubEmailTransport, StubSmsTransport};
pub use twilio::TwilioSmsTransport;

use anyhow::anyhow;

/// Outbound SMS gateway. Returns the provider message id on success.
/// The caller is responsible for truncating overlong bodies.
#[async_trait::async_trait]
pub trait ISmsTransport: Send + Sync {
    async fn send(&self, to: &str, body: &str) -> anyhow::Result<String>;
}

/// Outbound email transport. Returns the provider message id on success.
#[async_trait::async_trait]
pub trait IEmailTransport: Send + Sync {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> anyhow::Result<String>;
}

/// Installed when credentials are missing or the feature flag is off.
/// Every attempt fails, which the dispatcher records as a failed channel
/// without failing the parent operation.
pub struct DisabledSmsTransport;

#[async_trait::async_trait]
impl ISmsTransport for DisabledSmsTransport {
    async fn send(&self, _to: &str, _body: &str) -> anyhow::Result<String> {
        Err(anyhow!("SMS transport is not configured"))
    }
}

pub struct DisabledEmailTransport;

#[async_trait::async_trait]
impl IEmailTransport for DisabledEmailTransport {
    async fn send(&self, _to: &str, _subject: &str, _html_body: &str) -> anyhow::Result<String> {
        Err(anyhow!("Email transport is not configured"))
    }
}
