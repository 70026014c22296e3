use crate::dtos::{TestimonialAdminDTO, TestimonialDTO};
use crate::Pagination;
use sparkle_domain::{ServiceType, Testimonial, TestimonialSource, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialAdminResponse {
    pub testimonial: TestimonialAdminDTO,
}

impl TestimonialAdminResponse {
    pub fn new(testimonial: Testimonial) -> Self {
        Self {
            testimonial: TestimonialAdminDTO::new(testimonial),
        }
    }
}

pub mod list_testimonials {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        pub service_type: Option<ServiceType>,
        pub page: Option<usize>,
        pub limit: Option<usize>,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub testimonials: Vec<TestimonialDTO>,
        pub pagination: Pagination,
    }

    impl APIResponse {
        pub fn new(testimonials: Vec<Testimonial>, pagination: Pagination) -> Self {
            Self {
                testimonials: testimonials.into_iter().map(TestimonialDTO::new).collect(),
                pagination,
            }
        }
    }
}

pub mod get_featured_testimonials {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        pub limit: Option<usize>,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub testimonials: Vec<TestimonialDTO>,
    }

    impl APIResponse {
        pub fn new(testimonials: Vec<Testimonial>) -> Self {
            Self {
                testimonials: testimonials.into_iter().map(TestimonialDTO::new).collect(),
            }
        }
    }
}

pub mod submit_testimonial {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: String,
        pub rating: i32,
        pub text: String,
        pub location: Option<String>,
        pub service_type: Option<ServiceType>,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub message: String,
    }
}

pub mod get_testimonials_admin {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        pub service_type: Option<ServiceType>,
        pub approved: Option<bool>,
        pub featured: Option<bool>,
        pub page: Option<usize>,
        pub limit: Option<usize>,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub testimonials: Vec<TestimonialAdminDTO>,
        pub pagination: Pagination,
    }

    impl APIResponse {
        pub fn new(testimonials: Vec<Testimonial>, pagination: Pagination) -> Self {
            Self {
                testimonials: testimonials
                    .into_iter()
                    .map(TestimonialAdminDTO::new)
                    .collect(),
                pagination,
            }
        }
    }
}

pub mod create_testimonial {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: String,
        pub rating: i32,
        pub text: String,
        pub location: Option<String>,
        pub service_type: ServiceType,
        pub source: Option<TestimonialSource>,
        pub is_featured: Option<bool>,
        pub sort_order: Option<i32>,
    }

    pub type APIResponse = TestimonialAdminResponse;
}

pub mod update_testimonial {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub testimonial_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: Option<String>,
        pub rating: Option<i32>,
        pub text: Option<String>,
        pub location: Option<String>,
        pub service_type: Option<ServiceType>,
        pub is_active: Option<bool>,
        pub sort_order: Option<i32>,
    }

    pub type APIResponse = TestimonialAdminResponse;
}

pub mod approve_testimonial {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub testimonial_id: ID,
    }

    pub type APIResponse = TestimonialAdminResponse;
}

pub mod set_testimonial_featured {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub testimonial_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub is_featured: bool,
    }

    pub type APIResponse = TestimonialAdminResponse;
}

pub mod delete_testimonial {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub testimonial_id: ID,
    }

    pub type APIResponse = TestimonialAdminResponse;
}
