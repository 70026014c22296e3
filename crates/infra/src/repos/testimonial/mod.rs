mod inmemory;
mod postgres;

pub use inmemory::InMemoryTestimonialRepo;
pub use postgres::PostgresTestimonialRepo;

use sparkle_domain::{ServiceType, Testimonial, ID};

#[derive(Debug, Clone, Default)]
pub struct TestimonialQuery {
    pub service_type: Option<ServiceType>,
    pub is_approved: Option<bool>,
    pub is_featured: Option<bool>,
    /// Restrict to active and approved testimonials, for the public endpoints
    pub published_only: bool,
    pub skip: usize,
    pub limit: usize,
}

#[async_trait::async_trait]
pub trait ITestimonialRepo: Send + Sync {
    async fn insert(&self, testimonial: &Testimonial) -> anyhow::Result<()>;
    async fn save(&self, testimonial: &Testimonial) -> anyhow::Result<()>;
    async fn find(&self, testimonial_id: &ID) -> Option<Testimonial>;
    async fn delete(&self, testimonial_id: &ID) -> Option<Testimonial>;
    async fn find_by_query(&self, query: TestimonialQuery) -> anyhow::Result<Vec<Testimonial>>;
    async fn count_by_query(&self, query: TestimonialQuery) -> anyhow::Result<i64>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SparkleContext;
    use sparkle_domain::TestimonialSource;

    fn testimonial(name: &str) -> Testimonial {
        Testimonial {
            id: Default::default(),
            name: name.into(),
            rating: 5,
            text: "Great service".into(),
            location: "Riverside".into(),
            service_type: ServiceType::Residential,
            source: TestimonialSource::Website,
            is_active: false,
            is_approved: false,
            is_featured: false,
            sort_order: 0,
            created: 0,
            updated: 0,
        }
    }

    #[tokio::test]
    async fn published_query_excludes_unmoderated_entries() {
        let ctx = SparkleContext::create_inmemory();
        let pending = testimonial("Pending");
        let mut published = testimonial("Published");
        published.is_active = true;
        published.is_approved = true;
        ctx.repos.testimonials.insert(&pending).await.unwrap();
        ctx.repos.testimonials.insert(&published).await.unwrap();

        let found = ctx
            .repos
            .testimonials
            .find_by_query(TestimonialQuery {
                published_only: true,
                limit: 10,
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Published");

        let all = ctx
            .repos
            .testimonials
            .count_by_query(TestimonialQuery {
                limit: 10,
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(all, 2);
    }

    #[tokio::test]
    async fn moderation_flags_survive_save() {
        let ctx = SparkleContext::create_inmemory();
        let mut t = testimonial("Sam");
        ctx.repos.testimonials.insert(&t).await.unwrap();

        t.is_approved = true;
        t.is_active = true;
        ctx.repos.testimonials.save(&t).await.unwrap();

        let found = ctx.repos.testimonials.find(&t.id).await.unwrap();
        assert!(found.is_published());
    }
}
