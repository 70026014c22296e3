use chrono::NaiveDate;
use sparkle_domain::{Booking, BookingStatus, ChannelFlags, PreferredTime, ServiceType, ID};
use serde::{Deserialize, Serialize};

/// Full admin view of a booking
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BookingDTO {
    pub id: ID,
    pub booking_number: String,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub service_type: ServiceType,
    pub package_type: Option<String>,
    pub address: String,
    pub preferred_date: NaiveDate,
    pub preferred_time: PreferredTime,
    pub notes: Option<String>,
    pub status: BookingStatus,
    pub admin_notes: Option<String>,
    pub email_sent: ChannelFlags,
    pub sms_sent: ChannelFlags,
    pub submitted_at: i64,
}

impl BookingDTO {
    pub fn new(booking: Booking) -> Self {
        Self {
            id: booking.id.clone(),
            booking_number: booking.booking_number,
            contact_name: booking.contact_name,
            contact_email: booking.contact_email,
            contact_phone: booking.contact_phone,
            service_type: booking.service_type,
            package_type: booking.package_type,
            address: booking.address,
            preferred_date: booking.preferred_date,
            preferred_time: booking.preferred_time,
            notes: booking.notes,
            status: booking.status,
            admin_notes: booking.admin_notes,
            email_sent: booking.email_sent,
            sms_sent: booking.sms_sent,
            submitted_at: booking.submitted_at,
        }
    }
}

/// What the submitter gets back, without internal bookkeeping fields
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BookingDisplayDTO {
    pub booking_number: String,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub service_type: ServiceType,
    pub package_type: Option<String>,
    pub address: String,
    pub preferred_date: NaiveDate,
    pub preferred_time: PreferredTime,
    pub notes: Option<String>,
    pub status: BookingStatus,
    pub submitted_at: i64,
}

impl BookingDisplayDTO {
    pub fn new(booking: Booking) -> Self {
        Self {
            booking_number: booking.booking_number,
            contact_name: booking.contact_name,
            contact_email: booking.contact_email,
            contact_phone: booking.contact_phone,
            service_type: booking.service_type,
            package_type: booking.package_type,
            address: booking.address,
            preferred_date: booking.preferred_date,
            preferred_time: booking.preferred_time,
            notes: booking.notes,
            status: booking.status,
            submitted_at: booking.submitted_at,
        }
    }
}
