use crate::{
    error::SparkleError,
    shared::{
        auth::protect_admin_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use sparkle_api_structs::update_service::*;
use sparkle_domain::{CleaningService, PriceUnit, ServiceType, ID};
use sparkle_infra::SparkleContext;

fn handle_error(e: UseCaseErrors) -> SparkleError {
    match e {
        UseCaseErrors::NotFound(service_id) => SparkleError::NotFound(format!(
            "The service with id: {}, was not found.",
            service_id
        )),
        UseCaseErrors::StorageError => SparkleError::InternalError,
    }
}

pub async fn update_service_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<SparkleContext>,
) -> Result<HttpResponse, SparkleError> {
    protect_admin_route(&http_req, &ctx)?;

    let body = body.0;
    let usecase = UpdateServiceUseCase {
        service_id: path_params.service_id.clone(),
        name: body.name,
        category: body.category,
        short_description: body.short_description,
        full_description: body.full_description,
        base_price: body.base_price,
        price_unit: body.price_unit,
        duration_minutes: body.duration_minutes,
        is_active: body.is_active,
        is_featured: body.is_featured,
        sort_order: body.sort_order,
    };

    execute(usecase, &ctx)
        .await
        .map(|service| HttpResponse::Ok().json(APIResponse::new(service)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct UpdateServiceUseCase {
    pub service_id: ID,
    pub name: Option<String>,
    pub category: Option<ServiceType>,
    pub short_description: Option<String>,
    pub full_description: Option<String>,
    pub base_price: Option<f64>,
    pub price_unit: Option<PriceUnit>,
    pub duration_minutes: Option<i32>,
    pub is_active: Option<bool>,
    pub is_featured: Option<bool>,
    pub sort_order: Option<i32>,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateServiceUseCase {
    type Response = CleaningService;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &SparkleContext) -> Result<Self::Response, Self::Errors> {
        let mut service = ctx
            .repos
            .services
            .find(&self.service_id)
            .await
            .ok_or_else(|| UseCaseErrors::NotFound(self.service_id.clone()))?;

        if let Some(name) = &self.name {
            service.name = name.clone();
        }
        if let Some(category) = self.category {
            service.category = category;
        }
        if let Some(short_description) = &self.short_description {
            service.short_description = short_description.clone();
        }
        if let Some(full_description) = &self.full_description {
            service.full_description = full_description.clone();
        }
        if let Some(base_price) = self.base_price {
            service.base_price = base_price;
        }
        if let Some(price_unit) = self.price_unit {
            service.price_unit = price_unit;
        }
        if let Some(duration_minutes) = self.duration_minutes {
            service.duration_minutes = duration_minutes;
        }
        if let Some(is_active) = self.is_active {
            service.is_active = is_active;
        }
        if let Some(is_featured) = self.is_featured {
            service.is_featured = is_featured;
        }
        if let Some(sort_order) = self.sort_order {
            service.sort_order = sort_order;
        }
        service.updated = ctx.sys.get_timestamp_millis();

        ctx.repos
            .services
            .save(&service)
            .await
            .map(|_| service)
            .map_err(|_| UseCaseErrors::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn applies_partial_updates_and_bumps_updated() {
        let ctx = SparkleContext::create_inmemory();
        let service = CleaningService::new("Deep clean".into(), ServiceType::Residential, 10);
        ctx.repos.services.insert(&service).await.unwrap();

        let usecase = UpdateServiceUseCase {
            service_id: service.id.clone(),
            name: None,
            category: None,
            short_description: None,
            full_description: None,
            base_price: Some(149.0),
            price_unit: None,
            duration_minutes: None,
            is_active: Some(false),
            is_featured: None,
            sort_order: None,
        };
        let updated = execute(usecase, &ctx).await.unwrap();

        assert_eq!(updated.base_price, 149.0);
        assert!(!updated.is_active);
        assert_eq!(updated.name, "Deep clean");
        assert!(updated.updated >= updated.created);
    }
}
