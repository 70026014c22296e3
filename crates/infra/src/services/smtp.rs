use super::IEmailTransport;
use crate::config::SmtpConfig;
use anyhow::Context;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

/// Email delivery over async SMTP
pub struct SmtpEmailTransport {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
}

impl SmtpEmailTransport {
    pub fn new(config: SmtpConfig) -> anyhow::Result<Self> {
        let creds = Credentials::new(config.username, config.password);

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
            .context("Unable to build SMTP relay")?
            .port(config.port)
            .credentials(creds)
            .build();

        Ok(Self {
            mailer,
            from_address: config.from_address,
        })
    }
}

#[async_trait::async_trait]
impl IEmailTransport for SmtpEmailTransport {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> anyhow::Result<String> {
        let email = Message::builder()
            .from(
                self.from_address
                    .parse()
                    .context("Invalid from address")?,
            )
            .to(to.parse().context("Invalid recipient address")?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html_body.to_string())
            .context("Unable to build email")?;

        let response = self
            .mailer
            .send(email)
            .await
            .context("SMTP delivery failed")?;

        Ok(response
            .message()
            .collect::<Vec<&str>>()
            .join(" "))
    }
}
