use sparkle_utils::create_random_secret;
use tracing::{info, warn};

/// Credentials for the Twilio SMS gateway. When any of them are missing
/// the SMS transport is left unconfigured and every SMS attempt is
/// recorded as a failed channel.
#[derive(Debug, Clone)]
pub struct TwilioConfig {
    pub account_sid: String,
    pub auth_token: String,
    pub from_number: String,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from_address: String,
}

/// Immutable process-wide configuration, read from the environment exactly
/// once at startup and injected into everything that needs it. Core logic
/// never reads env vars on its own.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Key expected in the `x-api-key` header on admin routes
    pub admin_api_key: String,
    /// Where admin SMS alerts go
    pub admin_phone: Option<String>,
    /// Where admin email alerts go
    pub admin_email: Option<String>,
    /// Global kill switch for SMS dispatch
    pub sms_enabled: bool,
    pub twilio: Option<TwilioConfig>,
    pub smtp: Option<SmtpConfig>,
}

impl Config {
    pub fn new() -> Self {
        let default_port = "5000";
        let port = std::env::var("PORT").unwrap_or_else(|_| default_port.into());
        let port = match port.parse::<usize>() {
            Ok(port) => port,
            Err(_) => {
                warn!(
                    "The given PORT: {} is not valid, falling back to the default port: {}.",
                    port, default_port
                );
                default_port.parse::<usize>().unwrap()
            }
        };

        let admin_api_key = match std::env::var("ADMIN_API_KEY") {
            Ok(key) => key,
            Err(_) => {
                info!("Did not find ADMIN_API_KEY environment variable. Going to create one.");
                let key = create_random_secret(30);
                info!("Admin api key was generated and set to: {}", key);
                key
            }
        };

        let twilio = match (
            std::env::var("TWILIO_ACCOUNT_SID"),
            std::env::var("TWILIO_AUTH_TOKEN"),
            std::env::var("TWILIO_PHONE_NUMBER"),
        ) {
            (Ok(account_sid), Ok(auth_token), Ok(from_number)) => Some(TwilioConfig {
                account_sid,
                auth_token,
                from_number,
            }),
            _ => {
                warn!("Twilio credentials not configured. SMS notifications will be disabled.");
                None
            }
        };

        let smtp = match (
            std::env::var("SMTP_HOST"),
            std::env::var("SMTP_USERNAME"),
            std::env::var("SMTP_PASSWORD"),
        ) {
            (Ok(host), Ok(username), Ok(password)) => {
                let port = std::env::var("SMTP_PORT")
                    .ok()
                    .and_then(|p| p.parse::<u16>().ok())
                    .unwrap_or(587);
                let from_address = std::env::var("SMTP_FROM").unwrap_or_else(|_| username.clone());
                Some(SmtpConfig {
                    host,
                    port,
                    username,
                    password,
                    from_address,
                })
            }
            _ => {
                warn!("SMTP credentials not configured. Email notifications will be disabled.");
                None
            }
        };

        Self {
            port,
            admin_api_key,
            admin_phone: std::env::var("ADMIN_PHONE_NUMBER").ok(),
            admin_email: std::env::var("ADMIN_EMAIL").ok(),
            sms_enabled: std::env::var("SMS_NOTIFICATIONS_ENABLED")
                .map(|v| v == "true")
                .unwrap_or(false),
            twilio,
            smtp,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
