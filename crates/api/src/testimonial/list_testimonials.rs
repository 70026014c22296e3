use crate::{
    error::SparkleError,
    shared::{
        usecase::{execute, UseCase},
        DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
    },
};
use actix_web::{web, HttpResponse};
use sparkle_api_structs::list_testimonials::*;
use sparkle_api_structs::Pagination;
use sparkle_domain::{ServiceType, Testimonial};
use sparkle_infra::{SparkleContext, TestimonialQuery};

fn handle_error(e: UseCaseErrors) -> SparkleError {
    match e {
        UseCaseErrors::StorageError => SparkleError::InternalError,
    }
}

pub async fn list_testimonials_controller(
    query_params: web::Query<QueryParams>,
    ctx: web::Data<SparkleContext>,
) -> Result<HttpResponse, SparkleError> {
    let params = query_params.0;
    let usecase = ListTestimonialsUseCase {
        service_type: params.service_type,
        page: params.page.unwrap_or(1).max(1),
        limit: params
            .limit
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE),
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(APIResponse::new(res.testimonials, res.pagination)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct ListTestimonialsUseCase {
    pub service_type: Option<ServiceType>,
    pub page: usize,
    pub limit: usize,
}

#[derive(Debug)]
pub struct UseCaseResponse {
    pub testimonials: Vec<Testimonial>,
    pub pagination: Pagination,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for ListTestimonialsUseCase {
    type Response = UseCaseResponse;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &SparkleContext) -> Result<Self::Response, Self::Errors> {
        let query = TestimonialQuery {
            service_type: self.service_type,
            published_only: true,
            skip: (self.page - 1) * self.limit,
            limit: self.limit,
            ..Default::default()
        };

        let total = ctx
            .repos
            .testimonials
            .count_by_query(query.clone())
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;
        let testimonials = ctx
            .repos
            .testimonials
            .find_by_query(query)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        Ok(UseCaseResponse {
            testimonials,
            pagination: Pagination {
                page: self.page,
                limit: self.limit,
                total,
            },
        })
    }
}
