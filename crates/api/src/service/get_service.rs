use crate::{
    error::SparkleError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use sparkle_api_structs::get_service::*;
use sparkle_domain::{CleaningService, ID};
use sparkle_infra::SparkleContext;

fn handle_error(e: UseCaseErrors) -> SparkleError {
    match e {
        UseCaseErrors::NotFound(service_id) => SparkleError::NotFound(format!(
            "The service with id: {}, was not found.",
            service_id
        )),
    }
}

pub async fn get_service_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<SparkleContext>,
) -> Result<HttpResponse, SparkleError> {
    let usecase = GetServiceUseCase {
        service_id: path_params.service_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|service| HttpResponse::Ok().json(APIResponse::new(service)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct GetServiceUseCase {
    pub service_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetServiceUseCase {
    type Response = CleaningService;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &SparkleContext) -> Result<Self::Response, Self::Errors> {
        // Deactivated offerings are indistinguishable from missing ones
        // on the public route.
        match ctx.repos.services.find(&self.service_id).await {
            Some(service) if service.is_active => Ok(service),
            _ => Err(UseCaseErrors::NotFound(self.service_id.clone())),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use sparkle_domain::ServiceType;

    #[tokio::test]
    async fn inactive_service_reads_as_not_found() {
        let ctx = SparkleContext::create_inmemory();
        let mut service = CleaningService::new("Old offer".into(), ServiceType::Specialty, 10);
        service.is_active = false;
        ctx.repos.services.insert(&service).await.unwrap();

        let res = execute(
            GetServiceUseCase {
                service_id: service.id.clone(),
            },
            &ctx,
        )
        .await;
        assert!(matches!(res, Err(UseCaseErrors::NotFound(_))));
    }
}
