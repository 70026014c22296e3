use super::{BookingQuery, IBookingRepo};
use crate::repos::shared::inmemory_repo::*;
use sparkle_domain::{Booking, ChannelFlags, ID};
use std::sync::Mutex;

pub struct InMemoryBookingRepo {
    bookings: Mutex<Vec<Booking>>,
}

impl InMemoryBookingRepo {
    pub fn new() -> Self {
        Self {
            bookings: Mutex::new(Vec::new()),
        }
    }

    fn matches(booking: &Booking, query: &BookingQuery) -> bool {
        if let Some(status) = query.status {
            if booking.status != status {
                return false;
            }
        }
        if let Some(service_type) = query.service_type {
            if booking.service_type != service_type {
                return false;
            }
        }
        if let Some(from) = query.from_date {
            if booking.preferred_date < from {
                return false;
            }
        }
        if let Some(to) = query.to_date {
            if booking.preferred_date > to {
                return false;
            }
        }
        true
    }
}

impl Default for InMemoryBookingRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IBookingRepo for InMemoryBookingRepo {
    async fn insert(&self, booking: &Booking) -> anyhow::Result<()> {
        insert(booking, &self.bookings);
        Ok(())
    }

    async fn save(&self, booking: &Booking) -> anyhow::Result<()> {
        save(booking, &self.bookings);
        Ok(())
    }

    async fn find(&self, booking_id: &ID) -> Option<Booking> {
        find(booking_id, &self.bookings)
    }

    async fn delete(&self, booking_id: &ID) -> Option<Booking> {
        delete(booking_id, &self.bookings)
    }

    async fn find_by_query(&self, query: BookingQuery) -> anyhow::Result<Vec<Booking>> {
        let mut bookings = find_by(&self.bookings, |b| Self::matches(b, &query));
        bookings.sort_by_key(|b| std::cmp::Reverse(b.submitted_at));
        Ok(bookings
            .into_iter()
            .skip(query.skip)
            .take(query.limit)
            .collect())
    }

    async fn count_by_query(&self, query: BookingQuery) -> anyhow::Result<i64> {
        Ok(find_by(&self.bookings, |b| Self::matches(b, &query)).len() as i64)
    }

    async fn update_notification_flags(
        &self,
        booking_id: &ID,
        email_sent: ChannelFlags,
        sms_sent: ChannelFlags,
    ) -> anyhow::Result<()> {
        update_one(booking_id, &self.bookings, |b| {
            b.email_sent = email_sent;
            b.sms_sent = sms_sent;
        });
        Ok(())
    }
}
