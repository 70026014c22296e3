use crate::{
    error::SparkleError,
    shared::{
        auth::protect_admin_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use sparkle_api_structs::create_service::*;
use sparkle_domain::{CleaningService, PriceUnit, ServiceType};
use sparkle_infra::SparkleContext;

fn handle_error(e: UseCaseErrors) -> SparkleError {
    match e {
        UseCaseErrors::StorageError => SparkleError::InternalError,
    }
}

pub async fn create_service_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<SparkleContext>,
) -> Result<HttpResponse, SparkleError> {
    protect_admin_route(&http_req, &ctx)?;

    let body = body.0;
    let usecase = CreateServiceUseCase {
        name: body.name,
        category: body.category,
        short_description: body.short_description,
        full_description: body.full_description,
        base_price: body.base_price,
        price_unit: body.price_unit,
        duration_minutes: body.duration_minutes,
        is_featured: body.is_featured.unwrap_or(false),
        sort_order: body.sort_order.unwrap_or(0),
    };

    execute(usecase, &ctx)
        .await
        .map(|service| HttpResponse::Created().json(APIResponse::new(service)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct CreateServiceUseCase {
    pub name: String,
    pub category: ServiceType,
    pub short_description: String,
    pub full_description: String,
    pub base_price: f64,
    pub price_unit: PriceUnit,
    pub duration_minutes: i32,
    pub is_featured: bool,
    pub sort_order: i32,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateServiceUseCase {
    type Response = CleaningService;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &SparkleContext) -> Result<Self::Response, Self::Errors> {
        let mut service = CleaningService::new(
            self.name.clone(),
            self.category,
            ctx.sys.get_timestamp_millis(),
        );
        service.short_description = self.short_description.clone();
        service.full_description = self.full_description.clone();
        service.base_price = self.base_price;
        service.price_unit = self.price_unit;
        service.duration_minutes = self.duration_minutes;
        service.is_featured = self.is_featured;
        service.sort_order = self.sort_order;

        ctx.repos
            .services
            .insert(&service)
            .await
            .map(|_| service)
            .map_err(|_| UseCaseErrors::StorageError)
    }
}
