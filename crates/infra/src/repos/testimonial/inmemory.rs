use super::{ITestimonialRepo, TestimonialQuery};
use crate::repos::shared::inmemory_repo::*;
use sparkle_domain::{Testimonial, ID};
use std::sync::Mutex;

pub struct InMemoryTestimonialRepo {
    testimonials: Mutex<Vec<Testimonial>>,
}

impl InMemoryTestimonialRepo {
    pub fn new() -> Self {
        Self {
            testimonials: Mutex::new(Vec::new()),
        }
    }

    fn matches(testimonial: &Testimonial, query: &TestimonialQuery) -> bool {
        if let Some(service_type) = query.service_type {
            if testimonial.service_type != service_type {
                return false;
            }
        }
        if let Some(is_approved) = query.is_approved {
            if testimonial.is_approved != is_approved {
                return false;
            }
        }
        if let Some(is_featured) = query.is_featured {
            if testimonial.is_featured != is_featured {
                return false;
            }
        }
        if query.published_only && !testimonial.is_published() {
            return false;
        }
        true
    }
}

impl Default for InMemoryTestimonialRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ITestimonialRepo for InMemoryTestimonialRepo {
    async fn insert(&self, testimonial: &Testimonial) -> anyhow::Result<()> {
        insert(testimonial, &self.testimonials);
        Ok(())
    }

    async fn save(&self, testimonial: &Testimonial) -> anyhow::Result<()> {
        save(testimonial, &self.testimonials);
        Ok(())
    }

    async fn find(&self, testimonial_id: &ID) -> Option<Testimonial> {
        find(testimonial_id, &self.testimonials)
    }

    async fn delete(&self, testimonial_id: &ID) -> Option<Testimonial> {
        delete(testimonial_id, &self.testimonials)
    }

    async fn find_by_query(&self, query: TestimonialQuery) -> anyhow::Result<Vec<Testimonial>> {
        let mut testimonials = find_by(&self.testimonials, |t| Self::matches(t, &query));
        testimonials.sort_by(|a, b| {
            a.sort_order
                .cmp(&b.sort_order)
                .then(b.created.cmp(&a.created))
        });
        Ok(testimonials
            .into_iter()
            .skip(query.skip)
            .take(query.limit)
            .collect())
    }

    async fn count_by_query(&self, query: TestimonialQuery) -> anyhow::Result<i64> {
        Ok(find_by(&self.testimonials, |t| Self::matches(t, &query)).len() as i64)
    }
}
