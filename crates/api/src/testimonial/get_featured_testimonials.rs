use crate::{
    error::SparkleError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use sparkle_api_structs::get_featured_testimonials::*;
use sparkle_domain::Testimonial;
use sparkle_infra::{SparkleContext, TestimonialQuery};

const DEFAULT_FEATURED_LIMIT: usize = 6;

fn handle_error(e: UseCaseErrors) -> SparkleError {
    match e {
        UseCaseErrors::StorageError => SparkleError::InternalError,
    }
}

pub async fn get_featured_testimonials_controller(
    query_params: web::Query<QueryParams>,
    ctx: web::Data<SparkleContext>,
) -> Result<HttpResponse, SparkleError> {
    let usecase = GetFeaturedTestimonialsUseCase {
        limit: query_params.0.limit.unwrap_or(DEFAULT_FEATURED_LIMIT),
    };

    execute(usecase, &ctx)
        .await
        .map(|testimonials| HttpResponse::Ok().json(APIResponse::new(testimonials)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct GetFeaturedTestimonialsUseCase {
    pub limit: usize,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetFeaturedTestimonialsUseCase {
    type Response = Vec<Testimonial>;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &SparkleContext) -> Result<Self::Response, Self::Errors> {
        ctx.repos
            .testimonials
            .find_by_query(TestimonialQuery {
                is_featured: Some(true),
                published_only: true,
                limit: self.limit,
                ..Default::default()
            })
            .await
            .map_err(|_| UseCaseErrors::StorageError)
    }
}
