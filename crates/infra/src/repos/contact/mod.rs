mod inmemory;
mod postgres;

pub use inmemory::InMemoryContactRepo;
pub use postgres::PostgresContactRepo;

use sparkle_domain::{ChannelFlags, ConcernType, Contact, ContactStatus, Priority, ID};

#[derive(Debug, Clone, Default)]
pub struct ContactQuery {
    pub status: Option<ContactStatus>,
    pub concern_type: Option<ConcernType>,
    pub priority: Option<Priority>,
    pub skip: usize,
    pub limit: usize,
}

#[async_trait::async_trait]
pub trait IContactRepo: Send + Sync {
    async fn insert(&self, contact: &Contact) -> anyhow::Result<()>;
    async fn save(&self, contact: &Contact) -> anyhow::Result<()>;
    async fn find(&self, contact_id: &ID) -> Option<Contact>;
    async fn delete(&self, contact_id: &ID) -> Option<Contact>;
    async fn find_by_query(&self, query: ContactQuery) -> anyhow::Result<Vec<Contact>>;
    async fn count_by_query(&self, query: ContactQuery) -> anyhow::Result<i64>;
    /// The single post-dispatch write of the notification outcome flags
    async fn update_notification_flags(
        &self,
        contact_id: &ID,
        sms_sent: ChannelFlags,
    ) -> anyhow::Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SparkleContext;
    use sparkle_domain::PreferredContact;

    fn contact(concern_type: ConcernType, priority: Priority) -> Contact {
        Contact {
            id: Default::default(),
            contact_number: "CT-20260830-001".into(),
            name: "Robin Lee".into(),
            email: "robin@example.com".into(),
            phone: "+12025550188".into(),
            concern_type,
            subject: "Subject".into(),
            message: "Message".into(),
            preferred_contact: PreferredContact::Email,
            service_date: None,
            service_location: None,
            reference_number: None,
            status: ContactStatus::New,
            priority,
            notes: Vec::new(),
            sms_sent: Default::default(),
            submitted_at: 50,
            responded_at: None,
        }
    }

    #[tokio::test]
    async fn create_update_and_delete() {
        let ctx = SparkleContext::create_inmemory();
        let mut c = contact(ConcernType::General, Priority::Low);

        assert!(ctx.repos.contacts.insert(&c).await.is_ok());

        c.status = ContactStatus::InProgress;
        c.responded_at = Some(99);
        assert!(ctx.repos.contacts.save(&c).await.is_ok());

        let found = ctx.repos.contacts.find(&c.id).await.unwrap();
        assert_eq!(found.status, ContactStatus::InProgress);
        assert_eq!(found.responded_at, Some(99));

        assert!(ctx.repos.contacts.delete(&c.id).await.is_some());
        assert!(ctx.repos.contacts.find(&c.id).await.is_none());
    }

    #[tokio::test]
    async fn query_filters_by_priority() {
        let ctx = SparkleContext::create_inmemory();
        ctx.repos
            .contacts
            .insert(&contact(ConcernType::Complaint, Priority::Urgent))
            .await
            .unwrap();
        ctx.repos
            .contacts
            .insert(&contact(ConcernType::General, Priority::Low))
            .await
            .unwrap();

        let query = ContactQuery {
            priority: Some(Priority::Urgent),
            limit: 10,
            ..Default::default()
        };
        let found = ctx.repos.contacts.find_by_query(query.clone()).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].concern_type, ConcernType::Complaint);
        assert_eq!(ctx.repos.contacts.count_by_query(query).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn notification_flags_are_persisted() {
        let ctx = SparkleContext::create_inmemory();
        let c = contact(ConcernType::Feedback, Priority::Medium);
        ctx.repos.contacts.insert(&c).await.unwrap();

        let flags = ChannelFlags {
            admin: true,
            customer: false,
        };
        ctx.repos
            .contacts
            .update_notification_flags(&c.id, flags)
            .await
            .unwrap();

        let found = ctx.repos.contacts.find(&c.id).await.unwrap();
        assert_eq!(found.sms_sent, flags);
    }
}
