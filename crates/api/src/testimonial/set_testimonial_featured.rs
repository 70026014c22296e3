use crate::{
    error::SparkleError,
    shared::{
        auth::protect_admin_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use sparkle_api_structs::set_testimonial_featured::*;
use sparkle_domain::{Testimonial, ID};
use sparkle_infra::SparkleContext;

fn handle_error(e: UseCaseErrors) -> SparkleError {
    match e {
        UseCaseErrors::NotFound(testimonial_id) => SparkleError::NotFound(format!(
            "The testimonial with id: {}, was not found.",
            testimonial_id
        )),
        UseCaseErrors::NotPublished => SparkleError::Conflict(
            "Only approved and active testimonials can be featured.".to_string(),
        ),
        UseCaseErrors::StorageError => SparkleError::InternalError,
    }
}

pub async fn set_testimonial_featured_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<SparkleContext>,
) -> Result<HttpResponse, SparkleError> {
    protect_admin_route(&http_req, &ctx)?;

    let usecase = SetTestimonialFeaturedUseCase {
        testimonial_id: path_params.testimonial_id.clone(),
        is_featured: body.0.is_featured,
    };

    execute(usecase, &ctx)
        .await
        .map(|testimonial| HttpResponse::Ok().json(APIResponse::new(testimonial)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct SetTestimonialFeaturedUseCase {
    pub testimonial_id: ID,
    pub is_featured: bool,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
    NotPublished,
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for SetTestimonialFeaturedUseCase {
    type Response = Testimonial;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &SparkleContext) -> Result<Self::Response, Self::Errors> {
        let mut testimonial = ctx
            .repos
            .testimonials
            .find(&self.testimonial_id)
            .await
            .ok_or_else(|| UseCaseErrors::NotFound(self.testimonial_id.clone()))?;

        if self.is_featured && !testimonial.is_published() {
            return Err(UseCaseErrors::NotPublished);
        }

        testimonial.is_featured = self.is_featured;
        testimonial.updated = ctx.sys.get_timestamp_millis();

        ctx.repos
            .testimonials
            .save(&testimonial)
            .await
            .map(|_| testimonial)
            .map_err(|_| UseCaseErrors::StorageError)
    }
}
