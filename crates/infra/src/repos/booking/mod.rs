mod inmemory;
mod postgres;

pub use inmemory::InMemoryBookingRepo;
pub use postgres::PostgresBookingRepo;

use chrono::NaiveDate;
use sparkle_domain::{Booking, BookingStatus, ChannelFlags, ServiceType, ID};

/// Filters for the admin booking list. `skip`/`limit` implement the
/// pagination envelope.
#[derive(Debug, Clone, Default)]
pub struct BookingQuery {
    pub status: Option<BookingStatus>,
    pub service_type: Option<ServiceType>,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
    pub skip: usize,
    pub limit: usize,
}

#[async_trait::async_trait]
pub trait IBookingRepo: Send + Sync {
    async fn insert(&self, booking: &Booking) -> anyhow::Result<()>;
    async fn save(&self, booking: &Booking) -> anyhow::Result<()>;
    async fn find(&self, booking_id: &ID) -> Option<Booking>;
    async fn delete(&self, booking_id: &ID) -> Option<Booking>;
    async fn find_by_query(&self, query: BookingQuery) -> anyhow::Result<Vec<Booking>>;
    async fn count_by_query(&self, query: BookingQuery) -> anyhow::Result<i64>;
    /// The single post-dispatch write of the notification outcome flags
    async fn update_notification_flags(
        &self,
        booking_id: &ID,
        email_sent: ChannelFlags,
        sms_sent: ChannelFlags,
    ) -> anyhow::Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SparkleContext;
    use sparkle_domain::PreferredTime;

    fn booking(service_type: ServiceType, status: BookingStatus) -> Booking {
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
            status,
            admin_notes: None,
            email_sent: Default::default(),
            sms_sent: Default::default(),
            submitted_at: 100,
        }
    }

    #[tokio::test]
    async fn create_and_delete() {
        let ctx = SparkleContext::create_inmemory();
        let b = booking(ServiceType::Residential, BookingStatus::Pending);

        assert!(ctx.repos.bookings.insert(&b).await.is_ok());
        let found = ctx.repos.bookings.find(&b.id).await.unwrap();
        assert_eq!(found.booking_number, b.booking_number);

        let deleted = ctx.repos.bookings.delete(&b.id).await;
        assert!(deleted.is_some());
        assert!(ctx.repos.bookings.find(&b.id).await.is_none());
    }

    #[tokio::test]
    async fn query_filters_by_status_and_service_type() {
        let ctx = SparkleContext::create_inmemory();
        ctx.repos
            .bookings
            .insert(&booking(ServiceType::Residential, BookingStatus::Pending))
            .await
            .unwrap();
        ctx.repos
            .bookings
            .insert(&booking(ServiceType::Commercial, BookingStatus::Confirmed))
            .await
            .unwrap();

        let query = BookingQuery {
            status: Some(BookingStatus::Pending),
            limit: 10,
            ..Default::default()
        };
        let found = ctx.repos.bookings.find_by_query(query.clone()).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].service_type, ServiceType::Residential);
        assert_eq!(ctx.repos.bookings.count_by_query(query).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn notification_flags_are_persisted_and_stable() {
        let ctx = SparkleContext::create_inmemory();
        let b = booking(ServiceType::Airbnb, BookingStatus::Pending);
        ctx.repos.bookings.insert(&b).await.unwrap();

        let email = ChannelFlags {
            admin: true,
            customer: false,
        };
        let sms = ChannelFlags {
            admin: true,
            customer: true,
        };
        ctx.repos
            .bookings
            .update_notification_flags(&b.id, email, sms)
            .await
            .unwrap();

        // Same flags on every subsequent read
        for _ in 0..3 {
            let found = ctx.repos.bookings.find(&b.id).await.unwrap();
            assert_eq!(found.email_sent, email);
            assert_eq!(found.sms_sent, sms);
        }
    }
}
