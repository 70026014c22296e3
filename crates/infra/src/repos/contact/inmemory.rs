use super::{ContactQuery, IContactRepo};
use crate::repos::shared::inmemory_repo::*;
use sparkle_domain::{ChannelFlags, Contact, ID};
use std::sync::Mutex;

pub struct InMemoryContactRepo {
    contacts: Mutex<Vec<Contact>>,
}

impl InMemoryContactRepo {
    pub fn new() -> Self {
        Self {
            contacts: Mutex::new(Vec::new()),
        }
    }

    fn matches(contact: &Contact, query: &ContactQuery) -> bool {
        if let Some(status) = query.status {
            if contact.status != status {
                return false;
            }
        }
        if let Some(concern_type) = query.concern_type {
            if contact.concern_type != concern_type {
                return false;
            }
        }
        if let Some(priority) = query.priority {
            if contact.priority != priority {
                return false;
            }
        }
        true
    }
}

impl Default for InMemoryContactRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IContactRepo for InMemoryContactRepo {
    async fn insert(&self, contact: &Contact) -> anyhow::Result<()> {
        insert(contact, &self.contacts);
        Ok(())
    }

    async fn save(&self, contact: &Contact) -> anyhow::Result<()> {
        save(contact, &self.contacts);
        Ok(())
    }

    async fn find(&self, contact_id: &ID) -> Option<Contact> {
        find(contact_id, &self.contacts)
    }

    async fn delete(&self, contact_id: &ID) -> Option<Contact> {
        delete(contact_id, &self.contacts)
    }

    async fn find_by_query(&self, query: ContactQuery) -> anyhow::Result<Vec<Contact>> {
        let mut contacts = find_by(&self.contacts, |c| Self::matches(c, &query));
        contacts.sort_by_key(|c| std::cmp::Reverse(c.submitted_at));
        Ok(contacts
            .into_iter()
            .skip(query.skip)
            .take(query.limit)
            .collect())
    }

    async fn count_by_query(&self, query: ContactQuery) -> anyhow::Result<i64> {
        Ok(find_by(&self.contacts, |c| Self::matches(c, &query)).len() as i64)
    }

    async fn update_notification_flags(
        &self,
        contact_id: &ID,
        sms_sent: ChannelFlags,
    ) -> anyhow::Result<()> {
        update_one(contact_id, &self.contacts, |c| {
            c.sms_sent = sms_sent;
        });
        Ok(())
    }
}
