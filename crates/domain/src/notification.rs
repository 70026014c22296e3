use crate::booking::Booking;
use crate::contact::{Contact, PreferredContact};
use serde::{Deserialize, Serialize};

/// Who a notification is addressed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelRecipient {
    Admin,
    Customer,
}

/// How a notification is delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelMedium {
    Sms,
    Email,
}

/// One (recipient role, medium) pair, e.g. admin over SMS
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Channel {
    pub recipient: ChannelRecipient,
    pub medium: ChannelMedium,
}

impl Channel {
    pub const ADMIN_SMS: Channel = Channel {
        recipient: ChannelRecipient::Admin,
        medium: ChannelMedium::Sms,
    };
    pub const CUSTOMER_SMS: Channel = Channel {
        recipient: ChannelRecipient::Customer,
        medium: ChannelMedium::Sms,
    };
    pub const ADMIN_EMAIL: Channel = Channel {
        recipient: ChannelRecipient::Admin,
        medium: ChannelMedium::Email,
    };
    pub const CUSTOMER_EMAIL: Channel = Channel {
        recipient: ChannelRecipient::Customer,
        medium: ChannelMedium::Email,
    };

    pub fn describe(&self) -> &'static str {
        match (self.recipient, self.medium) {
            (ChannelRecipient::Admin, ChannelMedium::Sms) => "admin-sms",
            (ChannelRecipient::Admin, ChannelMedium::Email) => "admin-email",
            (ChannelRecipient::Customer, ChannelMedium::Sms) => "customer-sms",
            (ChannelRecipient::Customer, ChannelMedium::Email) => "customer-email",
        }
    }
}

/// Persisted per-medium delivery outcome for the two recipient roles.
/// Written exactly once right after dispatch attempts complete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelFlags {
    pub admin: bool,
    pub customer: bool,
}

/// Which channels must be attempted for a newly created booking.
/// Emails always go out, SMS only for the enabled service categories.
pub fn booking_channels(booking: &Booking) -> Vec<Channel> {
    let mut channels = vec![Channel::ADMIN_EMAIL, Channel::CUSTOMER_EMAIL];
    if booking.sms_notifications_apply() {
        channels.push(Channel::ADMIN_SMS);
        channels.push(Channel::CUSTOMER_SMS);
    }
    channels
}

/// Which channels must be attempted for a contact form submission.
/// The admin is always texted, the customer only when the submission asks
/// for it (phone preference, urgent priority or a complaint).
pub fn contact_channels(contact: &Contact) -> Vec<Channel> {
    let mut channels = vec![Channel::ADMIN_SMS];
    if contact.customer_sms_applies() {
        channels.push(Channel::CUSTOMER_SMS);
    }
    channels
}

/// Hard cap accepted by the SMS gateway
pub const SMS_BODY_HARD_CAP: usize = 3600;
/// What we actually hand over when a body blows the cap: 1597 chars of
/// content plus the truncation marker, 1600 usable characters total
const SMS_TRUNCATED_CONTENT_LEN: usize = 1597;
const SMS_TRUNCATION_MARKER: &str = "...";

/// Truncates an SMS body that exceeds the gateway cap. Overlong bodies are
/// not an error, they are cut to 1600 usable characters with a marker.
pub fn truncate_sms_body(body: String) -> String {
    if body.chars().count() <= SMS_BODY_HARD_CAP {
        return body;
    }
    let mut truncated: String = body.chars().take(SMS_TRUNCATED_CONTENT_LEN).collect();
    truncated.push_str(SMS_TRUNCATION_MARKER);
    truncated
}

/// Everything the booking templates interpolate, extracted from the record
/// so the templates stay pure functions.
#[derive(Debug, Clone)]
pub struct BookingMessageData {
    pub booking_number: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub service_type: String,
    pub package_type: Option<String>,
    pub preferred_date: String,
    pub preferred_time: String,
    pub address: String,
    pub notes: Option<String>,
}

impl From<&Booking> for BookingMessageData {
    fn from(booking: &Booking) -> Self {
        Self {
            booking_number: booking.booking_number.clone(),
            customer_name: booking.contact_name.clone(),
            customer_email: booking.contact_email.clone(),
            customer_phone: booking.contact_phone.clone(),
            service_type: booking.service_type.as_str().to_string(),
            package_type: booking.package_type.clone(),
            preferred_date: booking.preferred_date.format("%Y-%m-%d").to_string(),
            preferred_time: booking.preferred_time.as_str().to_string(),
            address: booking.address.clone(),
            notes: booking.notes.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ContactMessageData {
    pub contact_number: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub concern_type_label: String,
    pub subject: String,
    pub message: String,
    pub preferred_contact: PreferredContact,
    pub priority: String,
    pub service_date: Option<String>,
    pub service_location: Option<String>,
    pub reference_number: Option<String>,
}

impl From<&Contact> for ContactMessageData {
    fn from(contact: &Contact) -> Self {
        Self {
            contact_number: contact.contact_number.clone(),
            name: contact.name.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
            concern_type_label: contact.concern_type.label().to_string(),
            subject: contact.subject.clone(),
            message: contact.message.clone(),
            preferred_contact: contact.preferred_contact,
            priority: contact.priority.as_str().to_string(),
            service_date: contact
                .service_date
                .map(|d| d.format("%Y-%m-%d").to_string()),
            service_location: contact.service_location.clone(),
            reference_number: contact.reference_number.clone(),
        }
    }
}

/// A rendered notification ready for a transport. SMS ignores the subject.
#[derive(Debug, Clone)]
pub struct RenderedMessage {
    pub subject: Option<String>,
    pub body: String,
}

/// The closed set of notification templates. Channel selection picks a
/// variant, rendering is an exhaustive match, so an unknown template
/// cannot exist at runtime.
#[derive(Debug, Clone)]
pub enum MessageTemplate {
    NewBookingAlertSms(BookingMessageData),
    BookingConfirmedSms(BookingMessageData),
    NewBookingAlertEmail(BookingMessageData),
    BookingReceivedEmail(BookingMessageData),
    ContactFormAlertSms(ContactMessageData),
    ContactReceivedSms(ContactMessageData),
}

impl MessageTemplate {
    pub fn render(&self) -> RenderedMessage {
        match self {
            Self::NewBookingAlertSms(data) => RenderedMessage {
                subject: None,
                body: format!(
                    "NEW BOOKING ALERT!\n\n\
                     Service: {}\nCustomer: {}\nPhone: {}\nDate: {}\nTime: {}\n\
                     Address: {}\nBooking #: {}\n{}\n\
                     Please check the admin panel for full details.",
                    data.service_type.to_uppercase(),
                    data.customer_name,
                    data.customer_phone,
                    data.preferred_date,
                    data.preferred_time,
                    data.address,
                    data.booking_number,
                    data.notes
                        .as_ref()
                        .map(|n| format!("Notes: {}\n", n))
                        .unwrap_or_default(),
                ),
            },
            Self::BookingConfirmedSms(data) => RenderedMessage {
                subject: None,
                body: format!(
                    "Booking received!\n\n\
                     Hi {}, your {} cleaning request for {} ({}) has been received.\n\n\
                     Booking #: {}\nAddress: {}\n\n\
                     We'll contact you soon to confirm. Thank you!",
                    data.customer_name,
                    data.service_type,
                    data.preferred_date,
                    data.preferred_time,
                    data.booking_number,
                    data.address,
                ),
            },
            Self::NewBookingAlertEmail(data) => RenderedMessage {
                subject: Some(format!("New Booking Request - {}", data.booking_number)),
                body: format!(
                    "<h2>New Booking Request</h2>\
                     <p>A new booking request has been submitted and requires your attention.</p>\
                     <p><strong>Booking Number:</strong> {}</p>\
                     <p><strong>Name:</strong> {}<br>\
                     <strong>Email:</strong> {}<br>\
                     <strong>Phone:</strong> {}</p>\
                     <p><strong>Service Type:</strong> {}</p>\
                     {}\
                     <p><strong>Preferred Date:</strong> {}<br>\
                     <strong>Preferred Time:</strong> {}<br>\
                     <strong>Address:</strong> {}</p>\
                     {}\
                     <p>Please contact the customer within 24 hours to confirm the booking.</p>",
                    data.booking_number,
                    data.customer_name,
                    data.customer_email,
                    data.customer_phone,
                    data.service_type,
                    data.package_type
                        .as_ref()
                        .map(|p| format!("<p><strong>Package:</strong> {}</p>", p))
                        .unwrap_or_default(),
                    data.preferred_date,
                    data.preferred_time,
                    data.address,
                    data.notes
                        .as_ref()
                        .map(|n| format!("<p><strong>Customer Notes:</strong> {}</p>", n))
                        .unwrap_or_default(),
                ),
            },
            Self::BookingReceivedEmail(data) => RenderedMessage {
                subject: Some("Booking Request Received - Sparkle Cleaning".to_string()),
                body: format!(
                    "<h2>Booking Request Received</h2>\
                     <p>Dear {},</p>\
                     <p>Thank you for your interest in our cleaning services! We have received \
                     your booking request and will contact you soon to confirm the details.</p>\
                     <p><strong>Booking Number:</strong> {}<br>\
                     <strong>Service Type:</strong> {}<br>\
                     <strong>Preferred Date:</strong> {}<br>\
                     <strong>Preferred Time:</strong> {}<br>\
                     <strong>Address:</strong> {}</p>\
                     <p>We will review your request within 24 hours and follow up with a \
                     detailed quote.</p>\
                     <p>Best regards,<br>Sparkle Cleaning Team</p>",
                    data.customer_name,
                    data.booking_number,
                    data.service_type,
                    data.preferred_date,
                    data.preferred_time,
                    data.address,
                ),
            },
            Self::ContactFormAlertSms(data) => RenderedMessage {
                subject: None,
                body: format!(
                    "NEW CONTACT FORM SUBMISSION\n\n\
                     Type: {}\nName: {}\nPhone: {}\nEmail: {}\nContact #: {}\n\n\
                     Subject: {}\n{}{}{}\n\
                     Message: {}\n\n\
                     Preferred Contact: {}\nPriority: {}\n\n\
                     Please respond promptly.",
                    data.concern_type_label,
                    data.name,
                    data.phone,
                    data.email,
                    data.contact_number,
                    data.subject,
                    data.service_date
                        .as_ref()
                        .map(|d| format!("Service Date: {}\n", d))
                        .unwrap_or_default(),
                    data.service_location
                        .as_ref()
                        .map(|l| format!("Service Location: {}\n", l))
                        .unwrap_or_default(),
                    data.reference_number
                        .as_ref()
                        .map(|r| format!("Reference #: {}\n", r))
                        .unwrap_or_default(),
                    data.message,
                    data.preferred_contact.as_str(),
                    data.priority.to_uppercase(),
                ),
            },
            Self::ContactReceivedSms(data) => RenderedMessage {
                subject: None,
                body: format!(
                    "Contact Form Received\n\n\
                     Hi {}, we've received your {} and will respond within 24 hours.\n\n\
                     Contact #: {}\nSubject: {}\n\n\
                     We'll contact you via {} as requested.\n\n\
                     Thank you for contacting us!",
                    data.name,
                    data.concern_type_label.to_lowercase(),
                    data.contact_number,
                    data.subject,
                    data.preferred_contact.as_str(),
                ),
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::booking::{BookingStatus, PreferredTime, ServiceType};
    use crate::contact::{ConcernType, ContactStatus, Priority};
    use chrono::NaiveDate;

    fn booking(service_type: ServiceType) -> Booking {
        Booking {
            id: Default::default(),
            booking_number: "BK2608300001".into(),
            contact_name: "Jamie Fox".into(),
            contact_email: "jamie@example.com".into(),
            contact_phone: "+12025550123".into(),
            service_type,
            package_type: None,
            address: "12 Main St".into(),
            preferred_date: NaiveDate::from_ymd_opt(2026, 9, 14).unwrap(),
            preferred_time: PreferredTime::Morning,
            notes: Some("Gate code 4411".into()),
            status: BookingStatus::Pending,
            admin_notes: None,
            email_sent: Default::default(),
            sms_sent: Default::default(),
            submitted_at: 0,
        }
    }

    fn contact(preferred_contact: PreferredContact) -> Contact {
        Contact {
            id: Default::default(),
            contact_number: "CT-20260830-001".into(),
            name: "Robin Lee".into(),
            email: "robin@example.com".into(),
            phone: "+12025550188".into(),
            concern_type: ConcernType::General,
            subject: "Pricing".into(),
            message: "How much for a studio?".into(),
            preferred_contact,
            service_date: None,
            service_location: None,
            reference_number: None,
            status: ContactStatus::New,
            priority: Priority::Medium,
            notes: Vec::new(),
            sms_sent: Default::default(),
            submitted_at: 0,
            responded_at: None,
        }
    }

    #[test]
    fn booking_channel_plan_includes_sms_for_enabled_service_types() {
        let channels = booking_channels(&booking(ServiceType::Residential));
        assert!(channels.contains(&Channel::ADMIN_SMS));
        assert!(channels.contains(&Channel::CUSTOMER_SMS));
        assert!(channels.contains(&Channel::ADMIN_EMAIL));
        assert!(channels.contains(&Channel::CUSTOMER_EMAIL));
    }

    #[test]
    fn booking_channel_plan_skips_sms_for_other_service_types() {
        let channels = booking_channels(&booking(ServiceType::PressureWashing));
        assert!(!channels.contains(&Channel::ADMIN_SMS));
        assert!(!channels.contains(&Channel::CUSTOMER_SMS));
        assert!(channels.contains(&Channel::ADMIN_EMAIL));
        assert!(channels.contains(&Channel::CUSTOMER_EMAIL));
    }

    #[test]
    fn contact_channel_plan_always_alerts_admin() {
        let channels = contact_channels(&contact(PreferredContact::Email));
        assert_eq!(channels, vec![Channel::ADMIN_SMS]);

        let channels = contact_channels(&contact(PreferredContact::Phone));
        assert_eq!(channels, vec![Channel::ADMIN_SMS, Channel::CUSTOMER_SMS]);
    }

    #[test]
    fn short_sms_body_is_untouched() {
        let body = "hello".to_string();
        assert_eq!(truncate_sms_body(body.clone()), body);
    }

    #[test]
    fn overlong_sms_body_is_cut_to_usable_length_with_marker() {
        let body: String = std::iter::repeat('x').take(4000).collect();
        let truncated = truncate_sms_body(body);
        assert_eq!(truncated.chars().count(), 1600);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn body_at_the_cap_is_untouched() {
        let body: String = std::iter::repeat('x').take(SMS_BODY_HARD_CAP).collect();
        assert_eq!(truncate_sms_body(body.clone()).len(), body.len());
    }

    #[test]
    fn all_templates_render_their_identifier() {
        let b = BookingMessageData::from(&booking(ServiceType::Airbnb));
        let c = ContactMessageData::from(&contact(PreferredContact::Phone));

        for template in [
            MessageTemplate::NewBookingAlertSms(b.clone()),
            MessageTemplate::BookingConfirmedSms(b.clone()),
            MessageTemplate::NewBookingAlertEmail(b.clone()),
            MessageTemplate::BookingReceivedEmail(b.clone()),
        ] {
            assert!(template.render().body.contains("BK2608300001"));
        }
        for template in [
            MessageTemplate::ContactFormAlertSms(c.clone()),
            MessageTemplate::ContactReceivedSms(c),
        ] {
            assert!(template.render().body.contains("CT-20260830-001"));
        }
    }

    #[test]
    fn email_templates_have_subjects_sms_templates_do_not() {
        let b = BookingMessageData::from(&booking(ServiceType::Airbnb));
        assert!(MessageTemplate::NewBookingAlertEmail(b.clone())
            .render()
            .subject
            .is_some());
        assert!(MessageTemplate::NewBookingAlertSms(b)
            .render()
            .subject
            .is_none());
    }
}
