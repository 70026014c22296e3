use crate::{
    error::SparkleError,
    shared::{
        auth::protect_admin_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use sparkle_api_structs::delete_testimonial::*;
use sparkle_domain::{Testimonial, ID};
use sparkle_infra::SparkleContext;

fn handle_error(e: UseCaseErrors) -> SparkleError {
    match e {
        UseCaseErrors::NotFound(testimonial_id) => SparkleError::NotFound(format!(
            "The testimonial with id: {}, was not found.",
            testimonial_id
        )),
    }
}

pub async fn delete_testimonial_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<SparkleContext>,
) -> Result<HttpResponse, SparkleError> {
    protect_admin_route(&http_req, &ctx)?;

    let usecase = DeleteTestimonialUseCase {
        testimonial_id: path_params.testimonial_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|testimonial| HttpResponse::Ok().json(APIResponse::new(testimonial)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct DeleteTestimonialUseCase {
    pub testimonial_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteTestimonialUseCase {
    type Response = Testimonial;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &SparkleContext) -> Result<Self::Response, Self::Errors> {
        ctx.repos
            .testimonials
            .delete(&self.testimonial_id)
            .await
            .ok_or_else(|| UseCaseErrors::NotFound(self.testimonial_id.clone()))
    }
}
