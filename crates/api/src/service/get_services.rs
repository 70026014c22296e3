use crate::{
    error::SparkleError,
    shared::{
        usecase::{execute, UseCase},
        DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
    },
};
use actix_web::{web, HttpResponse};
use sparkle_api_structs::get_services::*;
use sparkle_api_structs::Pagination;
use sparkle_domain::{CleaningService, ServiceType};
use sparkle_infra::{ServiceQuery, SparkleContext};

fn handle_error(e: UseCaseErrors) -> SparkleError {
    match e {
        UseCaseErrors::StorageError => SparkleError::InternalError,
    }
}

pub async fn get_services_controller(
    query_params: web::Query<QueryParams>,
    ctx: web::Data<SparkleContext>,
) -> Result<HttpResponse, SparkleError> {
    let params = query_params.0;
    let usecase = GetServicesUseCase {
        category: params.category,
        featured: params.featured,
        page: params.page.unwrap_or(1).max(1),
        limit: params
            .limit
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE),
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(APIResponse::new(res.services, res.pagination)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct GetServicesUseCase {
    pub category: Option<ServiceType>,
    pub featured: Option<bool>,
    pub page: usize,
    pub limit: usize,
}

#[derive(Debug)]
pub struct UseCaseResponse {
    pub services: Vec<CleaningService>,
    pub pagination: Pagination,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetServicesUseCase {
    type Response = UseCaseResponse;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &SparkleContext) -> Result<Self::Response, Self::Errors> {
        // The public catalog only ever shows active offerings
        let query = ServiceQuery {
            category: self.category,
            is_active: Some(true),
            is_featured: self.featured,
            skip: (self.page - 1) * self.limit,
            limit: self.limit,
        };

        let total = ctx
            .repos
            .services
            .count_by_query(query.clone())
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;
        let services = ctx
            .repos
            .services
            .find_by_query(query)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        Ok(UseCaseResponse {
            services,
            pagination: Pagination {
                page: self.page,
                limit: self.limit,
                total,
            },
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn inactive_services_are_hidden_from_the_catalog() {
        let ctx = SparkleContext::create_inmemory();
        let active = CleaningService::new("Deep clean".into(), ServiceType::Residential, 10);
        let mut inactive = CleaningService::new("Old offer".into(), ServiceType::Residential, 10);
        inactive.is_active = false;
        ctx.repos.services.insert(&active).await.unwrap();
        ctx.repos.services.insert(&inactive).await.unwrap();

        let res = execute(
            GetServicesUseCase {
                category: None,
                featured: None,
                page: 1,
                limit: 20,
            },
            &ctx,
        )
        .await
        .unwrap();

        assert_eq!(res.services.len(), 1);
        assert_eq!(res.services[0].name, "Deep clean");
        assert_eq!(res.pagination.total, 1);
    }
}
