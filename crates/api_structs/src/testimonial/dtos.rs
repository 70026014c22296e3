use sparkle_domain::{ServiceType, Testimonial, TestimonialSource, ID};
use serde::{Deserialize, Serialize};

/// Public view of a published testimonial, without the moderation flags
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialDTO {
    pub id: ID,
    pub name: String,
    pub rating: i32,
    pub text: String,
    pub location: String,
    pub service_type: ServiceType,
    pub is_featured: bool,
}

impl TestimonialDTO {
    pub fn new(testimonial: Testimonial) -> Self {
        Self {
            id: testimonial.id.clone(),
            name: testimonial.name,
            rating: testimonial.rating,
            text: testimonial.text,
            location: testimonial.location,
            service_type: testimonial.service_type,
            is_featured: testimonial.is_featured,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialAdminDTO {
    pub id: ID,
    pub name: String,
    pub rating: i32,
    pub text: String,
    pub location: String,
    pub service_type: ServiceType,
    pub source: TestimonialSource,
    pub is_active: bool,
    pub is_approved: bool,
    pub is_featured: bool,
    pub sort_order: i32,
    pub created: i64,
    pub updated: i64,
}

impl TestimonialAdminDTO {
    pub fn new(testimonial: Testimonial) -> Self {
        Self {
            id: testimonial.id.clone(),
            name: testimonial.name,
            rating: testimonial.rating,
            text: testimonial.text,
            location: testimonial.location,
            service_type: testimonial.service_type,
            source: testimonial.source,
            is_active: testimonial.is_active,
            is_approved: testimonial.is_approved,
            is_featured: testimonial.is_featured,
            sort_order: testimonial.sort_order,
            created: testimonial.created,
            updated: testimonial.updated,
        }
    }
}
