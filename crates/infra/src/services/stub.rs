use super::{IEmailTransport, ISmsTransport};
use anyhow::anyhow;
use std::sync::Mutex;

/// Recording SMS transport used by the in-memory context in tests.
/// Recipients listed in `fail_for` get a transport error, which lets tests
/// exercise per-channel failure isolation.
#[derive(Default)]
pub struct StubSmsTransport {
    pub sent: Mutex<Vec<(String, String)>>,
    pub fail_for: Mutex<Vec<String>>,
}

impl StubSmsTransport {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn fail_for(&self, recipient: &str) {
        self.fail_for.lock().unwrap().push(recipient.to_string());
    }

    pub fn sent_to(&self, recipient: &str) -> Vec<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .filter(|(to, _)| to == recipient)
            .map(|(_, body)| body.clone())
            .collect()
    }
}

#[async_trait::async_trait]
impl ISmsTransport for StubSmsTransport {
    async fn send(&self, to: &str, body: &str) -> anyhow::Result<String> {
        if self.fail_for.lock().unwrap().iter().any(|r| r == to) {
            return Err(anyhow!("stubbed transport failure for {}", to));
        }
        self.sent
            .lock()
            .unwrap()
            .push((to.to_string(), body.to_string()));
        Ok(format!("stub-sms-{}", self.sent.lock().unwrap().len()))
    }
}

#[derive(Default)]
pub struct StubEmailTransport {
    pub sent: Mutex<Vec<(String, String, String)>>,
    pub fail_for: Mutex<Vec<String>>,
}

impl StubEmailTransport {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn fail_for(&self, recipient: &str) {
        self.fail_for.lock().unwrap().push(recipient.to_string());
    }

    pub fn sent_to(&self, recipient: &str) -> Vec<(String, String)> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .filter(|(to, _, _)| to == recipient)
            .map(|(_, subject, body)| (subject.clone(), body.clone()))
            .collect()
    }
}

#[async_trait::async_trait]
impl IEmailTransport for StubEmailTransport {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> anyhow::Result<String> {
        if self.fail_for.lock().unwrap().iter().any(|r| r == to) {
            return Err(anyhow!("stubbed transport failure for {}", to));
        }
        self.sent.lock().unwrap().push((
            to.to_string(),
            subject.to_string(),
            html_body.to_string(),
        ));
        Ok(format!("stub-email-{}", self.sent.lock().unwrap().len()))
    }
}
