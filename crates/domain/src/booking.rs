use crate::notification::ChannelFlags;
use crate::shared::entity::{Entity, ID};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The kind of cleaning work a `Booking` asks for. This is a wider set than
/// the categories that trigger SMS notifications, see
/// [`Booking::sms_notifications_apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceType {
    Commercial,
    Residential,
    Airbnb,
    PressureWashing,
    WindowCleaning,
    Specialty,
}

impl ServiceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Commercial => "commercial",
            Self::Residential => "residential",
            Self::Airbnb => "airbnb",
            Self::PressureWashing => "pressure-washing",
            Self::WindowCleaning => "window-cleaning",
            Self::Specialty => "specialty",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// Completed and cancelled bookings cannot change status anymore
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferredTime {
    Morning,
    Afternoon,
    Evening,
}

impl PreferredTime {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
        }
    }
}

/// A booking request submitted by a customer through the public form.
///
/// The human-readable `booking_number` is assigned exactly once at creation
/// and never changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
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

impl Booking {
    /// SMS channels only apply to the categories the business wants
    /// immediate phone alerts for
    pub fn sms_notifications_apply(&self) -> bool {
        matches!(
            self.service_type,
            ServiceType::Airbnb | ServiceType::Residential | ServiceType::Commercial
        )
    }
}

impl Entity<ID> for Booking {
    fn id(&self) -> ID {
        self.id.clone()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn booking_with_service_type(service_type: ServiceType) -> Booking {
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
            notes: None,
            status: BookingStatus::Pending,
            admin_notes: None,
            email_sent: Default::default(),
            sms_sent: Default::default(),
            submitted_at: 0,
        }
    }

    #[test]
    fn sms_applies_only_to_enabled_service_types() {
        for service_type in [
            ServiceType::Airbnb,
            ServiceType::Residential,
            ServiceType::Commercial,
        ] {
            assert!(booking_with_service_type(service_type).sms_notifications_apply());
        }
        for service_type in [
            ServiceType::PressureWashing,
            ServiceType::WindowCleaning,
            ServiceType::Specialty,
        ] {
            assert!(!booking_with_service_type(service_type).sms_notifications_apply());
        }
    }

    #[test]
    fn terminal_statuses() {
        assert!(BookingStatus::Completed.is_terminal());
        assert!(BookingStatus::Cancelled.is_terminal());
        assert!(!BookingStatus::Pending.is_terminal());
        assert!(!BookingStatus::Confirmed.is_terminal());
    }

    #[test]
    fn service_type_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&ServiceType::PressureWashing).unwrap(),
            "\"pressure-washing\""
        );
    }
}
