use super::{ContactQuery, IContactRepo};
use crate::repos::shared::repo::enum_from_str;
use chrono::NaiveDate;
use sparkle_domain::{ChannelFlags, Contact, ContactNote, ID};
use sqlx::{
    types::{Json, Uuid},
    FromRow, PgPool,
};
use std::convert::{TryFrom, TryInto};
use tracing::error;

pub struct PostgresContactRepo {
    pool: PgPool,
}

impl PostgresContactRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ContactRaw {
    contact_uid: Uuid,
    contact_number: String,
    name: String,
    email: String,
    phone: String,
    concern_type: String,
    subject: String,
    message: String,
    preferred_contact: String,
    service_date: Option<NaiveDate>,
    service_location: Option<String>,
    reference_number: Option<String>,
    status: String,
    priority: String,
    notes: Json<Vec<ContactNote>>,
    sms_sent_admin: bool,
    sms_sent_customer: bool,
    submitted_at: i64,
    responded_at: Option<i64>,
}

impl TryFrom<ContactRaw> for Contact {
    type Error = anyhow::Error;

    fn try_from(e: ContactRaw) -> anyhow::Result<Self> {
        Ok(Self {
            id: e.contact_uid.into(),
            contact_number: e.contact_number,
            name: e.name,
            email: e.email,
            phone: e.phone,
            concern_type: enum_from_str(&e.concern_type)?,
            subject: e.subject,
            message: e.message,
            preferred_contact: enum_from_str(&e.preferred_contact)?,
            service_date: e.service_date,
            service_location: e.service_location,
            reference_number: e.reference_number,
            status: enum_from_str(&e.status)?,
            priority: enum_from_str(&e.priority)?,
            notes: e.notes.0,
            sms_sent: ChannelFlags {
                admin: e.sms_sent_admin,
                customer: e.sms_sent_customer,
            },
            submitted_at: e.submitted_at,
            responded_at: e.responded_at,
        })
    }
}

#[async_trait::async_trait]
impl IContactRepo for PostgresContactRepo {
    async fn insert(&self, contact: &Contact) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO contacts(
                contact_uid, contact_number, name, email, phone, concern_type,
                subject, message, preferred_contact, service_date, service_location,
                reference_number, status, priority, notes, sms_sent_admin,
                sms_sent_customer, submitted_at, responded_at
            )
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19)
            "#,
        )
        .bind(contact.id.inner_ref())
        .bind(&contact.contact_number)
        .bind(&contact.name)
        .bind(&contact.email)
        .bind(&contact.phone)
        .bind(contact.concern_type.as_str())
        .bind(&contact.subject)
        .bind(&contact.message)
        .bind(contact.preferred_contact.as_str())
        .bind(contact.service_date)
        .bind(&contact.service_location)
        .bind(&contact.reference_number)
        .bind(contact.status.as_str())
        .bind(contact.priority.as_str())
        .bind(Json(&contact.notes))
        .bind(contact.sms_sent.admin)
        .bind(contact.sms_sent.customer)
        .bind(contact.submitted_at)
        .bind(contact.responded_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert contact: {:?}. DB returned error: {:?}",
                contact, e
            );
            e
        })?;
        Ok(())
    }

    async fn save(&self, contact: &Contact) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE contacts
            SET status = $2,
            priority = $3,
            notes = $4,
            responded_at = $5
            WHERE contact_uid = $1
            "#,
        )
        .bind(contact.id.inner_ref())
        .bind(contact.status.as_str())
        .bind(contact.priority.as_str())
        .bind(Json(&contact.notes))
        .bind(contact.responded_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to save contact: {:?}. DB returned error: {:?}",
                contact, e
            );
            e
        })?;
        Ok(())
    }

    async fn find(&self, contact_id: &ID) -> Option<Contact> {
        let res: Option<ContactRaw> = sqlx::query_as(
            r#"
            SELECT * FROM contacts
            WHERE contact_uid = $1
            "#,
        )
        .bind(contact_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find contact with id: {:?} failed. DB returned error: {:?}",
                contact_id, e
            );
            e
        })
        .ok()?;
        res.and_then(|contact| contact.try_into().ok())
    }

    async fn delete(&self, contact_id: &ID) -> Option<Contact> {
        let res: Option<ContactRaw> = sqlx::query_as(
            r#"
            DELETE FROM contacts
            WHERE contact_uid = $1
            RETURNING *
            "#,
        )
        .bind(contact_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Delete contact with id: {:?} failed. DB returned error: {:?}",
                contact_id, e
            );
            e
        })
        .ok()?;
        res.and_then(|contact| contact.try_into().ok())
    }

    async fn find_by_query(&self, query: ContactQuery) -> anyhow::Result<Vec<Contact>> {
        let rows: Vec<ContactRaw> = sqlx::query_as(
            r#"
            SELECT * FROM contacts
            WHERE ($1::text IS NULL OR status = $1)
            AND ($2::text IS NULL OR concern_type = $2)
            AND ($3::text IS NULL OR priority = $3)
            ORDER BY submitted_at DESC
            LIMIT $4 OFFSET $5
            "#,
        )
        .bind(query.status.map(|s| s.as_str()))
        .bind(query.concern_type.map(|c| c.as_str()))
        .bind(query.priority.map(|p| p.as_str()))
        .bind(query.limit as i64)
        .bind(query.skip as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find contacts by query: {:?} failed. DB returned error: {:?}",
                query, e
            );
            e
        })?;

        rows.into_iter().map(|c| c.try_into()).collect()
    }

    async fn count_by_query(&self, query: ContactQuery) -> anyhow::Result<i64> {
        let count: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM contacts
            WHERE ($1::text IS NULL OR status = $1)
            AND ($2::text IS NULL OR concern_type = $2)
            AND ($3::text IS NULL OR priority = $3)
            "#,
        )
        .bind(query.status.map(|s| s.as_str()))
        .bind(query.concern_type.map(|c| c.as_str()))
        .bind(query.priority.map(|p| p.as_str()))
        .fetch_one(&self.pool)
        .await?;

        Ok(count.0)
    }

    async fn update_notification_flags(
        &self,
        contact_id: &ID,
        sms_sent: ChannelFlags,
    ) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE contacts
            SET sms_sent_admin = $2,
            sms_sent_customer = $3
            WHERE contact_uid = $1
            "#,
        )
        .bind(contact_id.inner_ref())
        .bind(sms_sent.admin)
        .bind(sms_sent.customer)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to update notification flags for contact: {:?}. DB returned error: {:?}",
                contact_id, e
            );
            e
        })?;
        Ok(())
    }
}
