use crate::{
    error::SparkleError,
    shared::{
        auth::protect_admin_route,
        usecase::{execute, UseCase},
        DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use sparkle_api_structs::get_testimonials_admin::*;
use sparkle_api_structs::Pagination;
use sparkle_domain::{ServiceType, Testimonial};
use sparkle_infra::{SparkleContext, TestimonialQuery};

fn handle_error(e: UseCaseErrors) -> SparkleError {
    match e {
        UseCaseErrors::StorageError => SparkleError::InternalError,
    }
}

pub async fn get_testimonials_admin_controller(
    http_req: HttpRequest,
    query_params: web::Query<QueryParams>,
    ctx: web::Data<SparkleContext>,
) -> Result<HttpResponse, SparkleError> {
    protect_admin_route(&http_req, &ctx)?;

    let params = query_params.0;
    let usecase = GetTestimonialsAdminUseCase {
        service_type: params.service_type,
        approved: params.approved,
        featured: params.featured,
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
pub struct GetTestimonialsAdminUseCase {
    pub service_type: Option<ServiceType>,
    pub approved: Option<bool>,
    pub featured: Option<bool>,
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
impl UseCase for GetTestimonialsAdminUseCase {
    type Response = UseCaseResponse;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &SparkleContext) -> Result<Self::Response, Self::Errors> {
        let query = TestimonialQuery {
            service_type: self.service_type,
            is_approved: self.approved,
            is_featured: self.featured,
            published_only: false,
            skip: (self.page - 1) * self.limit,
            limit: self.limit,
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
