use crate::notification::ChannelFlags;
use crate::shared::entity::{Entity, ID};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConcernType {
    Complaint,
    Feedback,
    ServiceIssue,
    General,
}

impl ConcernType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Complaint => "complaint",
            Self::Feedback => "feedback",
            Self::ServiceIssue => "service-issue",
            Self::General => "general",
        }
    }

    /// Human friendly label used in notification messages
    pub fn label(&self) -> &'static str {
        match self {
            Self::Complaint => "Complaint",
            Self::Feedback => "Feedback",
            Self::ServiceIssue => "Service Issue",
            Self::General => "General Inquiry",
        }
    }

    /// Default triage priority when the submitter did not pick one
    pub fn default_priority(&self) -> Priority {
        match self {
            Self::Complaint | Self::ServiceIssue => Priority::High,
            Self::Feedback => Priority::Medium,
            Self::General => Priority::Low,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferredContact {
    Email,
    Phone,
}

impl PreferredContact {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContactStatus {
    New,
    InProgress,
    Resolved,
    Closed,
}

impl ContactStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::InProgress => "in-progress",
            Self::Resolved => "resolved",
            Self::Closed => "closed",
        }
    }

    /// Statuses that count as the business having responded
    pub fn is_responded(&self) -> bool {
        matches!(self, Self::InProgress | Self::Resolved)
    }
}

/// A note added by staff while handling a contact submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactNote {
    pub content: String,
    pub added_at: i64,
}

/// A contact form submission (complaint, feedback, service issue or a
/// general inquiry). Like bookings it gets a per-day sequential
/// `contact_number` at creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub id: ID,
    pub contact_number: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub concern_type: ConcernType,
    pub subject: String,
    pub message: String,
    pub preferred_contact: PreferredContact,
    pub service_date: Option<NaiveDate>,
    pub service_location: Option<String>,
    pub reference_number: Option<String>,
    pub status: ContactStatus,
    pub priority: Priority,
    pub notes: Vec<ContactNote>,
    pub sms_sent: ChannelFlags,
    pub submitted_at: i64,
    pub responded_at: Option<i64>,
}

impl Contact {
    /// Customers only get an SMS confirmation when they asked to be called
    /// back, or when the submission needs a fast acknowledgement.
    pub fn customer_sms_applies(&self) -> bool {
        self.preferred_contact == PreferredContact::Phone
            || self.priority == Priority::Urgent
            || self.concern_type == ConcernType::Complaint
    }
}

impl Entity<ID> for Contact {
    fn id(&self) -> ID {
        self.id.clone()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn contact() -> Contact {
        Contact {
            id: Default::default(),
            contact_number: "CT-20260830-001".into(),
            name: "Robin Lee".into(),
            email: "robin@example.com".into(),
            phone: "+12025550188".into(),
            concern_type: ConcernType::General,
            subject: "Question about pricing".into(),
            message: "How much for a two bedroom apartment?".into(),
            preferred_contact: PreferredContact::Email,
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
    fn customer_sms_not_sent_for_plain_email_inquiry() {
        assert!(!contact().customer_sms_applies());
    }

    #[test]
    fn customer_sms_sent_when_phone_preferred() {
        let mut c = contact();
        c.preferred_contact = PreferredContact::Phone;
        assert!(c.customer_sms_applies());
    }

    #[test]
    fn customer_sms_sent_for_urgent_or_complaint() {
        let mut c = contact();
        c.priority = Priority::Urgent;
        assert!(c.customer_sms_applies());

        let mut c = contact();
        c.concern_type = ConcernType::Complaint;
        assert!(c.customer_sms_applies());
    }

    #[test]
    fn priority_defaults_follow_concern_type() {
        assert_eq!(ConcernType::Complaint.default_priority(), Priority::High);
        assert_eq!(ConcernType::ServiceIssue.default_priority(), Priority::High);
        assert_eq!(ConcernType::Feedback.default_priority(), Priority::Medium);
        assert_eq!(ConcernType::General.default_priority(), Priority::Low);
    }
}
