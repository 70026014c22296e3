use crate::dtos::{ContactDTO, ContactDisplayDTO};
use crate::Pagination;
use chrono::NaiveDate;
use sparkle_domain::{
    ConcernType, Contact, ContactStatus, PreferredContact, Priority, ID,
};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub contact: ContactDTO,
}

impl ContactResponse {
    pub fn new(contact: Contact) -> Self {
        Self {
            contact: ContactDTO::new(contact),
        }
    }
}

pub mod submit_contact {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: String,
        pub email: String,
        pub phone: String,
        pub concern_type: ConcernType,
        pub subject: String,
        pub message: String,
        pub preferred_contact: Option<PreferredContact>,
        pub service_date: Option<NaiveDate>,
        pub service_location: Option<String>,
        pub reference_number: Option<String>,
        pub priority: Option<Priority>,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub message: String,
        pub contact: ContactDisplayDTO,
    }

    impl APIResponse {
        pub fn new(contact: Contact) -> Self {
            Self {
                message: format!(
                    "Thank you for reaching out. Your reference number is {}.",
                    contact.contact_number
                ),
                contact: ContactDisplayDTO::new(contact),
            }
        }
    }
}

pub mod get_contacts {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        pub status: Option<ContactStatus>,
        pub concern_type: Option<ConcernType>,
        pub priority: Option<Priority>,
        pub page: Option<usize>,
        pub limit: Option<usize>,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub contacts: Vec<ContactDTO>,
        pub pagination: Pagination,
    }

    impl APIResponse {
        pub fn new(contacts: Vec<Contact>, pagination: Pagination) -> Self {
            Self {
                contacts: contacts.into_iter().map(ContactDTO::new).collect(),
                pagination,
            }
        }
    }
}

pub mod get_contact {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub contact_id: ID,
    }

    pub type APIResponse = ContactResponse;
}

pub mod update_contact {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub contact_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub status: Option<ContactStatus>,
        pub priority: Option<Priority>,
        pub note: Option<String>,
    }

    pub type APIResponse = ContactResponse;
}

pub mod delete_contact {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub contact_id: ID,
    }

    pub type APIResponse = ContactResponse;
}
