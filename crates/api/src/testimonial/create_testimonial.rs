use crate::{
    error::SparkleError,
    shared::{
        auth::protect_admin_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use sparkle_api_structs::create_testimonial::*;
use sparkle_domain::{
    InvalidTestimonialError, ServiceType, Testimonial, TestimonialSource,
};
use sparkle_infra::SparkleContext;

fn handle_error(e: UseCaseErrors) -> SparkleError {
    match e {
        UseCaseErrors::Invalid(e) => SparkleError::BadClientData(e.to_string()),
        UseCaseErrors::StorageError => SparkleError::InternalError,
    }
}

pub async fn create_testimonial_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<SparkleContext>,
) -> Result<HttpResponse, SparkleError> {
    protect_admin_route(&http_req, &ctx)?;

    let body = body.0;
    let usecase = CreateTestimonialUseCase {
        name: body.name,
        rating: body.rating,
        text: body.text,
        location: body.location,
        service_type: body.service_type,
        source: body.source,
        is_featured: body.is_featured.unwrap_or(false),
        sort_order: body.sort_order.unwrap_or(0),
    };

    execute(usecase, &ctx)
        .await
        .map(|testimonial| HttpResponse::Created().json(APIResponse::new(testimonial)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct CreateTestimonialUseCase {
    pub name: String,
    pub rating: i32,
    pub text: String,
    pub location: Option<String>,
    pub service_type: ServiceType,
    pub source: Option<TestimonialSource>,
    pub is_featured: bool,
    pub sort_order: i32,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    Invalid(InvalidTestimonialError),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateTestimonialUseCase {
    type Response = Testimonial;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &SparkleContext) -> Result<Self::Response, Self::Errors> {
        let now = ctx.sys.get_timestamp_millis();
        // Staff entries (imported reviews etc.) go live immediately.
        let testimonial = Testimonial {
            id: Default::default(),
            name: self.name.clone(),
            rating: self.rating,
            text: self.text.clone(),
            location: self.location.clone().unwrap_or_default(),
            service_type: self.service_type,
            source: self.source.unwrap_or(TestimonialSource::Manual),
            is_active: true,
            is_approved: true,
            is_featured: self.is_featured,
            sort_order: self.sort_order,
            created: now,
            updated: now,
        };
        testimonial.validate().map_err(UseCaseErrors::Invalid)?;

        ctx.repos
            .testimonials
            .insert(&testimonial)
            .await
            .map(|_| testimonial)
            .map_err(|_| UseCaseErrors::StorageError)
    }
}
