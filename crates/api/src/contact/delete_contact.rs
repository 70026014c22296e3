use crate::{
    error::SparkleError,
    shared::{
        auth::protect_admin_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use sparkle_api_structs::delete_contact::*;
use sparkle_domain::{Contact, ID};
use sparkle_infra::SparkleContext;

fn handle_error(e: UseCaseErrors) -> SparkleError {
    match e {
        UseCaseErrors::NotFound(contact_id) => SparkleError::NotFound(format!(
            "The contact with id: {}, was not found.",
            contact_id
        )),
    }
}

pub async fn delete_contact_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<SparkleContext>,
) -> Result<HttpResponse, SparkleError> {
    protect_admin_route(&http_req, &ctx)?;

    let usecase = DeleteContactUseCase {
        contact_id: path_params.contact_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|contact| HttpResponse::Ok().json(APIResponse::new(contact)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct DeleteContactUseCase {
    pub contact_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteContactUseCase {
    type Response = Contact;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &SparkleContext) -> Result<Self::Response, Self::Errors> {
        ctx.repos
            .contacts
            .delete(&self.contact_id)
            .await
            .ok_or_else(|| UseCaseErrors::NotFound(self.contact_id.clone()))
    }
}
