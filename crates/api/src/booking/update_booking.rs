use crate::{
    error::SparkleError,
    shared::{
        auth::protect_admin_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use sparkle_api_structs::update_booking::*;
use sparkle_domain::{Booking, BookingStatus, ID};
use sparkle_infra::SparkleContext;

fn handle_error(e: UseCaseErrors) -> SparkleError {
    match e {
        UseCaseErrors::NotFound(booking_id) => SparkleError::NotFound(format!(
            "The booking with id: {}, was not found.",
            booking_id
        )),
        UseCaseErrors::StorageError => SparkleError::InternalError,
    }
}

pub async fn update_booking_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<SparkleContext>,
) -> Result<HttpResponse, SparkleError> {
    protect_admin_route(&http_req, &ctx)?;

    let usecase = UpdateBookingUseCase {
        booking_id: path_params.booking_id.clone(),
        status: body.0.status,
        admin_notes: body.0.admin_notes,
    };

    execute(usecase, &ctx)
        .await
        .map(|booking| HttpResponse::Ok().json(APIResponse::new(booking)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct UpdateBookingUseCase {
    pub booking_id: ID,
    pub status: Option<BookingStatus>,
    pub admin_notes: Option<String>,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateBookingUseCase {
    type Response = Booking;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &SparkleContext) -> Result<Self::Response, Self::Errors> {
        let mut booking = ctx
            .repos
            .bookings
            .find(&self.booking_id)
            .await
            .ok_or_else(|| UseCaseErrors::NotFound(self.booking_id.clone()))?;

        if let Some(status) = self.status {
            booking.status = status;
        }
        if let Some(admin_notes) = &self.admin_notes {
            booking.admin_notes = Some(admin_notes.clone());
        }

        ctx.repos
            .bookings
            .save(&booking)
            .await
            .map(|_| booking)
            .map_err(|_| UseCaseErrors::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;
    use sparkle_domain::{PreferredTime, ServiceType};

    #[tokio::test]
    async fn updates_status_and_admin_notes() {
        let ctx = SparkleContext::create_inmemory();
        let booking = Booking {
            id: Default::default(),
            booking_number: "BK2609010001".to_string(),
            contact_name: "Dana".to_string(),
            contact_email: "dana@example.com".to_string(),
            contact_phone: "+15552230001".to_string(),
            service_type: ServiceType::Residential,
            package_type: None,
            address: "12 Main St".to_string(),
            preferred_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            preferred_time: PreferredTime::Morning,
            notes: None,
            status: BookingStatus::Pending,
            admin_notes: None,
            email_sent: Default::default(),
            sms_sent: Default::default(),
            submitted_at: 0,
        };
        ctx.repos.bookings.insert(&booking).await.unwrap();

        let usecase = UpdateBookingUseCase {
            booking_id: booking.id.clone(),
            status: Some(BookingStatus::Confirmed),
            admin_notes: Some("Crew assigned".to_string()),
        };
        let updated = execute(usecase, &ctx).await.unwrap();

        assert_eq!(updated.status, BookingStatus::Confirmed);
        assert_eq!(updated.admin_notes.as_deref(), Some("Crew assigned"));
    }

    #[tokio::test]
    async fn unknown_booking_is_not_found() {
        let ctx = SparkleContext::create_inmemory();
        let usecase = UpdateBookingUseCase {
            booking_id: Default::default(),
            status: Some(BookingStatus::Confirmed),
            admin_notes: None,
        };
        assert!(matches!(
            execute(usecase, &ctx).await,
            Err(UseCaseErrors::NotFound(_))
        ));
    }
}
