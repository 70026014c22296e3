mod config;
mod repos;
mod services;
mod system;

pub use config::{Config, SmtpConfig, TwilioConfig};
pub use repos::{
    BookingQuery, ContactQuery, IBookingRepo, IContactRepo, ISequenceRepo,
    IServiceRepo, ITestimonialRepo, Repos, ServiceQuery, TestimonialQuery,
};
pub use services::*;
use sqlx::migrate::MigrateError;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
pub use system::{FrozenSys, ISys, RealSys};

#[derive(Clone)]
pub struct SparkleContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub sms: Arc<dyn ISmsTransport>,
    pub email: Arc<dyn IEmailTransport>,
}

struct ContextParams {
    pub postgres_connection_string: String,
}

impl SparkleContext {
    async fn create(params: ContextParams) -> Self {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&params.postgres_connection_string)
            .await
            .expect("Postgres credentials must be set and valid");
        let config = Config::new();
        let sms = create_sms_transport(&config);
        let email = create_email_transport(&config);
        Self {
            repos: Repos::create_postgres(pool),
            config,
            sys: Arc::new(RealSys {}),
            sms,
            email,
        }
    }

    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
            sms: Arc::new(DisabledSmsTransport),
            email: Arc::new(DisabledEmailTransport),
        }
    }

    /// In-memory context with caller-provided transports, used by tests
    /// that assert on what was sent.
    pub fn create_inmemory_with_transports(
        sms: Arc<dyn ISmsTransport>,
        email: Arc<dyn IEmailTransport>,
    ) -> Self {
        let mut ctx = Self::create_inmemory();
        ctx.sms = sms;
        ctx.email = email;
        ctx
    }
}

fn create_sms_transport(config: &Config) -> Arc<dyn ISmsTransport> {
    if !config.sms_enabled {
        return Arc::new(DisabledSmsTransport);
    }
    match &config.twilio {
        Some(twilio) => Arc::new(TwilioSmsTransport::new(twilio.clone())),
        None => Arc::new(DisabledSmsTransport),
    }
}

fn create_email_transport(config: &Config) -> Arc<dyn IEmailTransport> {
    match &config.smtp {
        Some(smtp) => match SmtpEmailTransport::new(smtp.clone()) {
            Ok(transport) => Arc::new(transport),
            Err(e) => {
                tracing::warn!("Unable to create SMTP transport: {:?}", e);
                Arc::new(DisabledEmailTransport)
            }
        },
        None => Arc::new(DisabledEmailTransport),
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> SparkleContext {
    SparkleContext::create(ContextParams {
        postgres_connection_string: get_psql_connection_string(),
    })
    .await
}

fn get_psql_connection_string() -> String {
    const PSQL_CONNECTION_STRING: &str = "DATABASE_URL";

    std::env::var(PSQL_CONNECTION_STRING)
        .unwrap_or_else(|_| panic!("{} env var to be present.", PSQL_CONNECTION_STRING))
}

pub async fn run_migration() -> Result<(), MigrateError> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&get_psql_connection_string())
        .await
        .expect("TO CONNECT TO POSTGRES");

    sqlx::migrate!().run(&pool).await
}
