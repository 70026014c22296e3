use super::{BookingQuery, IBookingRepo};
use crate::repos::shared::repo::enum_from_str;
use chrono::NaiveDate;
use sparkle_domain::{Booking, ChannelFlags, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use std::convert::{TryFrom, TryInto};
use tracing::error;

pub struct PostgresBookingRepo {
    pool: PgPool,
}

impl PostgresBookingRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct BookingRaw {
    booking_uid: Uuid,
    booking_number: String,
    contact_name: String,
    contact_email: String,
    contact_phone: String,
    service_type: String,
    package_type: Option<String>,
    address: String,
    preferred_date: NaiveDate,
    preferred_time: String,
    notes: Option<String>,
    status: String,
    admin_notes: Option<String>,
    email_sent_admin: bool,
    email_sent_customer: bool,
    sms_sent_admin: bool,
    sms_sent_customer: bool,
    submitted_at: i64,
}

impl TryFrom<BookingRaw> for Booking {
    type Error = anyhow::Error;

    fn try_from(e: BookingRaw) -> anyhow::Result<Self> {
        Ok(Self {
            id: e.booking_uid.into(),
            booking_number: e.booking_number,
            contact_name: e.contact_name,
            contact_email: e.contact_email,
            contact_phone: e.contact_phone,
            service_type: enum_from_str(&e.service_type)?,
            package_type: e.package_type,
            address: e.address,
            preferred_date: e.preferred_date,
            preferred_time: enum_from_str(&e.preferred_time)?,
            notes: e.notes,
            status: enum_from_str(&e.status)?,
            admin_notes: e.admin_notes,
            email_sent: ChannelFlags {
                admin: e.email_sent_admin,
                customer: e.email_sent_customer,
            },
            sms_sent: ChannelFlags {
                admin: e.sms_sent_admin,
                customer: e.sms_sent_customer,
            },
            submitted_at: e.submitted_at,
        })
    }
}

#[async_trait::async_trait]
impl IBookingRepo for PostgresBookingRepo {
    async fn insert(&self, booking: &Booking) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO bookings(
                booking_uid, booking_number, contact_name, contact_email, contact_phone,
                service_type, package_type, address, preferred_date, preferred_time,
                notes, status, admin_notes, email_sent_admin, email_sent_customer,
                sms_sent_admin, sms_sent_customer, submitted_at
            )
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)
            "#,
        )
        .bind(booking.id.inner_ref())
        .bind(&booking.booking_number)
        .bind(&booking.contact_name)
        .bind(&booking.contact_email)
        .bind(&booking.contact_phone)
        .bind(booking.service_type.as_str())
        .bind(&booking.package_type)
        .bind(&booking.address)
        .bind(booking.preferred_date)
        .bind(booking.preferred_time.as_str())
        .bind(&booking.notes)
        .bind(booking.status.as_str())
        .bind(&booking.admin_notes)
        .bind(booking.email_sent.admin)
        .bind(booking.email_sent.customer)
        .bind(booking.sms_sent.admin)
        .bind(booking.sms_sent.customer)
        .bind(booking.submitted_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert booking: {:?}. DB returned error: {:?}",
                booking, e
            );
            e
        })?;
        Ok(())
    }

    async fn save(&self, booking: &Booking) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE bookings
            SET status = $2,
            admin_notes = $3,
            preferred_date = $4,
            preferred_time = $5,
            notes = $6
            WHERE booking_uid = $1
            "#,
        )
        .bind(booking.id.inner_ref())
        .bind(booking.status.as_str())
        .bind(&booking.admin_notes)
        .bind(booking.preferred_date)
        .bind(booking.preferred_time.as_str())
        .bind(&booking.notes)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to save booking: {:?}. DB returned error: {:?}",
                booking, e
            );
            e
        })?;
        Ok(())
    }

    async fn find(&self, booking_id: &ID) -> Option<Booking> {
        let res: Option<BookingRaw> = sqlx::query_as(
            r#"
            SELECT * FROM bookings
            WHERE booking_uid = $1
            "#,
        )
        .bind(booking_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find booking with id: {:?} failed. DB returned error: {:?}",
                booking_id, e
            );
            e
        })
        .ok()?;
        res.and_then(|booking| booking.try_into().ok())
    }

    async fn delete(&self, booking_id: &ID) -> Option<Booking> {
        let res: Option<BookingRaw> = sqlx::query_as(
            r#"
            DELETE FROM bookings
            WHERE booking_uid = $1
            RETURNING *
            "#,
        )
        .bind(booking_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Delete booking with id: {:?} failed. DB returned error: {:?}",
                booking_id, e
            );
            e
        })
        .ok()?;
        res.and_then(|booking| booking.try_into().ok())
    }

    async fn find_by_query(&self, query: BookingQuery) -> anyhow::Result<Vec<Booking>> {
        let rows: Vec<BookingRaw> = sqlx::query_as(
            r#"
            SELECT * FROM bookings
            WHERE ($1::text IS NULL OR status = $1)
            AND ($2::text IS NULL OR service_type = $2)
            AND ($3::date IS NULL OR preferred_date >= $3)
            AND ($4::date IS NULL OR preferred_date <= $4)
            ORDER BY submitted_at DESC
            LIMIT $5 OFFSET $6
            "#,
        )
        .bind(query.status.map(|s| s.as_str()))
        .bind(query.service_type.map(|s| s.as_str()))
        .bind(query.from_date)
        .bind(query.to_date)
        .bind(query.limit as i64)
        .bind(query.skip as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find bookings by query: {:?} failed. DB returned error: {:?}",
                query, e
            );
            e
        })?;

        rows.into_iter().map(|b| b.try_into()).collect()
    }

    async fn count_by_query(&self, query: BookingQuery) -> anyhow::Result<i64> {
        let count: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM bookings
            WHERE ($1::text IS NULL OR status = $1)
            AND ($2::text IS NULL OR service_type = $2)
            AND ($3::date IS NULL OR preferred_date >= $3)
            AND ($4::date IS NULL OR preferred_date <= $4)
            "#,
        )
        .bind(query.status.map(|s| s.as_str()))
        .bind(query.service_type.map(|s| s.as_str()))
        .bind(query.from_date)
        .bind(query.to_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(count.0)
    }

    async fn update_notification_flags(
        &self,
        booking_id: &ID,
        email_sent: ChannelFlags,
        sms_sent: ChannelFlags,
    ) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE bookings
            SET email_sent_admin = $2,
            email_sent_customer = $3,
            sms_sent_admin = $4,
            sms_sent_customer = $5
            WHERE booking_uid = $1
            "#,
        )
        .bind(booking_id.inner_ref())
        .bind(email_sent.admin)
        .bind(email_sent.customer)
        .bind(sms_sent.admin)
        .bind(sms_sent.customer)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to update notification flags for booking: {:?}. DB returned error: {:?}",
                booking_id, e
            );
            e
        })?;
        Ok(())
    }
}
