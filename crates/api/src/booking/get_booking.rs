use crate::{
    error::SparkleError,
    shared::{
        auth::protect_admin_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use sparkle_api_structs::get_booking::*;
use sparkle_domain::{Booking, ID};
use sparkle_infra::SparkleContext;

fn handle_error(e: UseCaseErrors) -> SparkleError {
    match e {
        UseCaseErrors::NotFound(booking_id) => SparkleError::NotFound(format!(
            "The booking with id: {}, was not found.",
            booking_id
        )),
    }
}

pub async fn get_booking_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<SparkleContext>,
) -> Result<HttpResponse, SparkleError> {
    protect_admin_route(&http_req, &ctx)?;

    let usecase = GetBookingUseCase {
        booking_id: path_params.booking_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|booking| HttpResponse::Ok().json(APIResponse::new(booking)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct GetBookingUseCase {
    pub booking_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetBookingUseCase {
    type Response = Booking;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &SparkleContext) -> Result<Self::Response, Self::Errors> {
        ctx.repos
            .bookings
            .find(&self.booking_id)
            .await
            .ok_or_else(|| UseCaseErrors::NotFound(self.booking_id.clone()))
    }
}
