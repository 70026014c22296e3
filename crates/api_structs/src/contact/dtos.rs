use chrono::NaiveDate;
use sparkle_domain::{
    ChannelFlags, ConcernType, Contact, ContactNote, ContactStatus, PreferredContact, Priority, ID,
};
use serde::{Deserialize, Serialize};

/// Full admin view of a contact form submission
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ContactDTO {
    pub id: ID,
    pub contact_number: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub concern_type: ConcernType,
    pub concern_type_label: String,
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

impl ContactDTO {
    pub fn new(contact: Contact) -> Self {
        Self {
            id: contact.id.clone(),
            contact_number: contact.contact_number,
            name: contact.name,
            email: contact.email,
            phone: contact.phone,
            concern_type: contact.concern_type,
            concern_type_label: contact.concern_type.label().to_string(),
            subject: contact.subject,
            message: contact.message,
            preferred_contact: contact.preferred_contact,
            service_date: contact.service_date,
            service_location: contact.service_location,
            reference_number: contact.reference_number,
            status: contact.status,
            priority: contact.priority,
            notes: contact.notes,
            sms_sent: contact.sms_sent,
            submitted_at: contact.submitted_at,
            responded_at: contact.responded_at,
        }
    }
}

/// What the submitter gets back, without staff notes and delivery flags
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ContactDisplayDTO {
    pub contact_number: String,
    pub name: String,
    pub email: String,
    pub concern_type: ConcernType,
    pub concern_type_label: String,
    pub subject: String,
    pub status: ContactStatus,
    pub priority: Priority,
    pub submitted_at: i64,
}

impl ContactDisplayDTO {
    pub fn new(contact: Contact) -> Self {
        Self {
            contact_number: contact.contact_number,
            name: contact.name,
            email: contact.email,
            concern_type: contact.concern_type,
            concern_type_label: contact.concern_type.label().to_string(),
            subject: contact.subject,
            status: contact.status,
            priority: contact.priority,
            submitted_at: contact.submitted_at,
        }
    }
}
