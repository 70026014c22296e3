mod booking;
mod contact;
mod sequence;
mod service;
mod shared;
mod testimonial;

pub use booking::{BookingQuery, IBookingRepo};
use booking::{InMemoryBookingRepo, PostgresBookingRepo};
pub use contact::{ContactQuery, IContactRepo};
use contact::{InMemoryContactRepo, PostgresContactRepo};
pub use sequence::ISequenceRepo;
use sequence::{InMemorySequenceRepo, PostgresSequenceRepo};
pub use service::{IServiceRepo, ServiceQuery};
use service::{InMemoryServiceRepo, PostgresServiceRepo};
use sqlx::PgPool;
use std::sync::Arc;
pub use testimonial::{ITestimonialRepo, TestimonialQuery};
use testimonial::{InMemoryTestimonialRepo, PostgresTestimonialRepo};

#[derive(Clone)]
pub struct Repos {
    pub bookings: Arc<dyn IBookingRepo>,
    pub contacts: Arc<dyn IContactRepo>,
    pub services: Arc<dyn IServiceRepo>,
    pub testimonials: Arc<dyn ITestimonialRepo>,
    pub sequences: Arc<dyn ISequenceRepo>,
}

impl Repos {
    pub fn create_postgres(pool: PgPool) -> Self {
        Self {
            bookings: Arc::new(PostgresBookingRepo::new(pool.clone())),
            contacts: Arc::new(PostgresContactRepo::new(pool.clone())),
            services: Arc::new(PostgresServiceRepo::new(pool.clone())),
            testimonials: Arc::new(PostgresTestimonialRepo::new(pool.clone())),
            sequences: Arc::new(PostgresSequenceRepo::new(pool)),
        }
    }

    pub fn create_inmemory() -> Self {
        Self {
            bookings: Arc::new(InMemoryBookingRepo::new()),
            contacts: Arc::new(InMemoryContactRepo::new()),
            services: Arc::new(InMemoryServiceRepo::new()),
            testimonials: Arc::new(InMemoryTestimonialRepo::new()),
            sequences: Arc::new(InMemorySequenceRepo::new()),
        }
    }
}
