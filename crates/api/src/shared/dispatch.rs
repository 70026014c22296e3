use sparkle_domain::{
    booking_channels, contact_channels, truncate_sms_body, Booking, Channel, ChannelFlags,
    ChannelMedium, ChannelRecipient, Contact, MessageTemplate,
};
use sparkle_infra::SparkleContext;
use std::time::Duration;
use tracing::{info, warn};

/// Upper bound on a single delivery attempt. A hanging gateway must not
/// hold up the response to the customer.
const CHANNEL_TIMEOUT: Duration = Duration::from_secs(5);

/// One channel to attempt: where it goes, through which medium, and what
/// to say. A missing recipient (e.g. no admin phone configured) is kept in
/// the plan and recorded as a failed channel at dispatch time.
#[derive(Debug)]
pub struct PlannedNotification {
    pub channel: Channel,
    pub recipient: Option<String>,
    pub template: MessageTemplate,
}

/// Per-medium delivery flags produced by a dispatch run. These are written
/// back to the record in a single update so a crash mid-dispatch can at
/// worst lose flags, never duplicate a send marker.
#[derive(Debug, Default, Clone, Copy)]
pub struct DispatchOutcome {
    pub email_sent: ChannelFlags,
    pub sms_sent: ChannelFlags,
}

fn admin_recipient(channel: &Channel, ctx: &SparkleContext) -> Option<String> {
    match channel.medium {
        ChannelMedium::Sms => ctx.config.admin_phone.clone(),
        ChannelMedium::Email => ctx.config.admin_email.clone(),
    }
}

/// The channels to attempt for a freshly created booking: emails always,
/// SMS only for the service categories where it applies.
pub fn booking_dispatch_plan(booking: &Booking, ctx: &SparkleContext) -> Vec<PlannedNotification> {
    booking_channels(booking)
        .into_iter()
        .map(|channel| {
            let recipient = match channel.recipient {
                ChannelRecipient::Admin => admin_recipient(&channel, ctx),
                ChannelRecipient::Customer => match channel.medium {
                    ChannelMedium::Sms => Some(booking.contact_phone.clone()),
                    ChannelMedium::Email => Some(booking.contact_email.clone()),
                },
            };
            let data = booking.into();
            let template = match (channel.recipient, channel.medium) {
                (ChannelRecipient::Admin, ChannelMedium::Sms) => {
                    MessageTemplate::NewBookingAlertSms(data)
                }
                (ChannelRecipient::Customer, ChannelMedium::Sms) => {
                    MessageTemplate::BookingConfirmedSms(data)
                }
                (ChannelRecipient::Admin, ChannelMedium::Email) => {
                    MessageTemplate::NewBookingAlertEmail(data)
                }
                (ChannelRecipient::Customer, ChannelMedium::Email) => {
                    MessageTemplate::BookingReceivedEmail(data)
                }
            };
            PlannedNotification {
                channel,
                recipient,
                template,
            }
        })
        .collect()
}

/// The channels to attempt for a contact form submission: the admin is
/// always texted, the customer only when the submission asks for it.
pub fn contact_dispatch_plan(contact: &Contact, ctx: &SparkleContext) -> Vec<PlannedNotification> {
    contact_channels(contact)
        .into_iter()
        .map(|channel| {
            let recipient = match channel.recipient {
                ChannelRecipient::Admin => admin_recipient(&channel, ctx),
                ChannelRecipient::Customer => Some(contact.phone.clone()),
            };
            let template = match channel.recipient {
                ChannelRecipient::Admin => MessageTemplate::ContactFormAlertSms(contact.into()),
                ChannelRecipient::Customer => MessageTemplate::ContactReceivedSms(contact.into()),
            };
            PlannedNotification {
                channel,
                recipient,
                template,
            }
        })
        .collect()
}

/// Attempts every planned channel in order. Each attempt is isolated: a
/// failure or timeout on one channel is logged and folded into the outcome
/// flags, the remaining channels are still attempted, and the caller's
/// operation never fails because of delivery problems.
pub async fn dispatch(plan: Vec<PlannedNotification>, ctx: &SparkleContext) -> DispatchOutcome {
    let mut outcome = DispatchOutcome::default();

    for planned in plan {
        let delivered = attempt(&planned, ctx).await;
        if delivered {
            let flags = match planned.channel.medium {
                ChannelMedium::Sms => &mut outcome.sms_sent,
                ChannelMedium::Email => &mut outcome.email_sent,
            };
            match planned.channel.recipient {
                ChannelRecipient::Admin => flags.admin = true,
                ChannelRecipient::Customer => flags.customer = true,
            }
        }
    }

    outcome
}

async fn attempt(planned: &PlannedNotification, ctx: &SparkleContext) -> bool {
    let recipient = match &planned.recipient {
        Some(recipient) => recipient,
        None => {
            warn!(
                "Skipping {}: no recipient address configured",
                planned.channel.describe()
            );
            return false;
        }
    };

    let message = planned.template.render();
    let send = async {
        match planned.channel.medium {
            ChannelMedium::Sms => {
                let body = truncate_sms_body(message.body);
                ctx.sms.send(recipient, &body).await
            }
            ChannelMedium::Email => {
                let subject = message.subject.as_deref().unwrap_or_default();
                ctx.email.send(recipient, subject, &message.body).await
            }
        }
    };

    match tokio::time::timeout(CHANNEL_TIMEOUT, send).await {
        Ok(Ok(message_id)) => {
            info!(
                "Delivered {} (provider message id: {})",
                planned.channel.describe(),
                message_id
            );
            true
        }
        Ok(Err(e)) => {
            warn!("Failed to deliver {}: {:?}", planned.channel.describe(), e);
            false
        }
        Err(_) => {
            warn!(
                "Delivery of {} timed out after {:?}",
                planned.channel.describe(),
                CHANNEL_TIMEOUT
            );
            false
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;
    use sparkle_domain::{BookingStatus, PreferredTime, ServiceType};
    use sparkle_infra::{StubEmailTransport, StubSmsTransport};
    use std::sync::Arc;

    fn booking(service_type: ServiceType) -> Booking {
        Booking {
            id: Default::default(),
            booking_number: "BK2608300001".to_string(),
            contact_name: "Dana".to_string(),
            contact_email: "dana@example.com".to_string(),
            contact_phone: "+15552230001".to_string(),
            service_type,
            package_type: None,
            address: "12 Main St".to_string(),
            preferred_date: NaiveDate::from_ymd_opt(2026, 8, 30).unwrap(),
            preferred_time: PreferredTime::Morning,
            notes: None,
            status: BookingStatus::Pending,
            admin_notes: None,
            email_sent: Default::default(),
            sms_sent: Default::default(),
            submitted_at: 0,
        }
    }

    fn test_ctx() -> (SparkleContext, Arc<StubSmsTransport>, Arc<StubEmailTransport>) {
        let sms = Arc::new(StubSmsTransport::new());
        let email = Arc::new(StubEmailTransport::new());
        let mut ctx =
            SparkleContext::create_inmemory_with_transports(sms.clone(), email.clone());
        ctx.config.admin_phone = Some("+15550000000".to_string());
        ctx.config.admin_email = Some("admin@example.com".to_string());
        (ctx, sms, email)
    }

    #[tokio::test]
    async fn booking_for_sms_enabled_service_attempts_all_four_channels() {
        let (ctx, sms, email) = test_ctx();
        let b = booking(ServiceType::Airbnb);

        let outcome = dispatch(booking_dispatch_plan(&b, &ctx), &ctx).await;

        assert!(outcome.email_sent.admin);
        assert!(outcome.email_sent.customer);
        assert!(outcome.sms_sent.admin);
        assert!(outcome.sms_sent.customer);
        assert_eq!(sms.sent_to("+15550000000").len(), 1);
        assert_eq!(sms.sent_to("+15552230001").len(), 1);
        assert_eq!(email.sent_to("admin@example.com").len(), 1);
        assert_eq!(email.sent_to("dana@example.com").len(), 1);
    }

    #[tokio::test]
    async fn booking_for_other_service_sends_emails_only() {
        let (ctx, sms, email) = test_ctx();
        let b = booking(ServiceType::PressureWashing);

        let outcome = dispatch(booking_dispatch_plan(&b, &ctx), &ctx).await;

        assert!(outcome.email_sent.admin);
        assert!(outcome.email_sent.customer);
        assert!(!outcome.sms_sent.admin);
        assert!(!outcome.sms_sent.customer);
        assert!(sms.sent.lock().unwrap().is_empty());
        assert_eq!(email.sent.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn failed_channel_does_not_block_the_others() {
        let (ctx, sms, email) = test_ctx();
        sms.fail_for("+15550000000");
        let b = booking(ServiceType::Residential);

        let outcome = dispatch(booking_dispatch_plan(&b, &ctx), &ctx).await;

        assert!(!outcome.sms_sent.admin);
        assert!(outcome.sms_sent.customer);
        assert!(outcome.email_sent.admin);
        assert!(outcome.email_sent.customer);
        assert_eq!(sms.sent_to("+15552230001").len(), 1);
        assert_eq!(email.sent.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn missing_admin_phone_is_a_failed_channel_not_an_error() {
        let (mut ctx, sms, _email) = test_ctx();
        ctx.config.admin_phone = None;
        let b = booking(ServiceType::Commercial);

        let outcome = dispatch(booking_dispatch_plan(&b, &ctx), &ctx).await;

        assert!(!outcome.sms_sent.admin);
        assert!(outcome.sms_sent.customer);
        assert_eq!(sms.sent_to("+15552230001").len(), 1);
    }

    #[tokio::test]
    async fn overlong_sms_bodies_are_truncated_before_sending() {
        let (ctx, sms, _email) = test_ctx();
        let mut b = booking(ServiceType::Airbnb);
        b.notes = Some("x".repeat(5000));

        dispatch(booking_dispatch_plan(&b, &ctx), &ctx).await;

        let bodies = sms.sent_to("+15550000000");
        assert_eq!(bodies.len(), 1);
        assert_eq!(bodies[0].chars().count(), 1600);
        assert!(bodies[0].ends_with("..."));
    }
}
