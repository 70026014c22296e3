use super::ISmsTransport;
use crate::config::TwilioConfig;
use anyhow::{anyhow, Context};
use serde::Deserialize;

const TWILIO_API_BASE: &str = "https://api.twilio.com/2010-04-01";

/// SMS delivery through the Twilio REST API
pub struct TwilioSmsTransport {
    client: reqwest::Client,
    account_sid: String,
    auth_token: String,
    from_number: String,
}

impl TwilioSmsTransport {
    pub fn new(config: TwilioConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            account_sid: config.account_sid,
            auth_token: config.auth_token,
            from_number: config.from_number,
        }
    }

    fn messages_endpoint(&self) -> String {
        format!(
            "{}/Accounts/{}/Messages.json",
            TWILIO_API_BASE, self.account_sid
        )
    }
}

#[derive(Debug, Deserialize)]
struct TwilioMessageResponse {
    sid: String,
}

#[derive(Debug, Deserialize)]
struct TwilioErrorResponse {
    message: String,
}

#[async_trait::async_trait]
impl ISmsTransport for TwilioSmsTransport {
    async fn send(&self, to: &str, body: &str) -> anyhow::Result<String> {
        let params = [
            ("To", to),
            ("From", self.from_number.as_str()),
            ("Body", body),
        ];

        let res = self
            .client
            .post(self.messages_endpoint())
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&params)
            .send()
            .await
            .context("Unable to reach the Twilio API")?;

        if !res.status().is_success() {
            let status = res.status();
            let message = res
                .json::<TwilioErrorResponse>()
                .await
                .map(|e| e.message)
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(anyhow!(
                "Twilio rejected the message with status {}: {}",
                status,
                message
            ));
        }

        let message = res
            .json::<TwilioMessageResponse>()
            .await
            .context("Unexpected response body from the Twilio API")?;
        Ok(message.sid)
    }
}
