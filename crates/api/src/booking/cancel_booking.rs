use crate::{
    error::SparkleError,
    shared::{
        auth::protect_admin_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use sparkle_api_structs::cancel_booking::*;
use sparkle_domain::{Booking, BookingStatus, ID};
use sparkle_infra::SparkleContext;

fn handle_error(e: UseCaseErrors) -> SparkleError {
    match e {
        UseCaseErrors::NotFound(booking_id) => SparkleError::NotFound(format!(
            "The booking with id: {}, was not found.",
            booking_id
        )),
        UseCaseErrors::AlreadyTerminal(status) => SparkleError::Conflict(format!(
            "The booking is already {} and cannot be cancelled.",
            status.as_str()
        )),
        UseCaseErrors::StorageError => SparkleError::InternalError,
    }
}

pub async fn cancel_booking_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<SparkleContext>,
) -> Result<HttpResponse, SparkleError> {
    protect_admin_route(&http_req, &ctx)?;

    let usecase = CancelBookingUseCase {
        booking_id: path_params.booking_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|booking| HttpResponse::Ok().json(APIResponse::new(booking)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct CancelBookingUseCase {
    pub booking_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
    AlreadyTerminal(BookingStatus),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CancelBookingUseCase {
    type Response = Booking;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &SparkleContext) -> Result<Self::Response, Self::Errors> {
        let mut booking = ctx
            .repos
            .bookings
            .find(&self.booking_id)
            .await
            .ok_or_else(|| UseCaseErrors::NotFound(self.booking_id.clone()))?;

        if booking.status.is_terminal() {
            return Err(UseCaseErrors::AlreadyTerminal(booking.status));
        }

        booking.status = BookingStatus::Cancelled;
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

    fn booking(status: BookingStatus) -> Booking {
        Booking {
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
            status,
            admin_notes: None,
            email_sent: Default::default(),
            sms_sent: Default::default(),
            submitted_at: 0,
        }
    }

    #[tokio::test]
    async fn cancels_a_pending_booking() {
        let ctx = SparkleContext::create_inmemory();
        let b = booking(BookingStatus::Pending);
        ctx.repos.bookings.insert(&b).await.unwrap();

        let cancelled = execute(
            CancelBookingUseCase {
                booking_id: b.id.clone(),
            },
            &ctx,
        )
        .await
        .unwrap();

        assert_eq!(cancelled.status, BookingStatus::Cancelled);
    }

    #[tokio::test]
    async fn completed_and_cancelled_bookings_cannot_be_cancelled() {
        let ctx = SparkleContext::create_inmemory();
        for status in [BookingStatus::Completed, BookingStatus::Cancelled] {
            let b = booking(status);
            ctx.repos.bookings.insert(&b).await.unwrap();

            let res = execute(
                CancelBookingUseCase {
                    booking_id: b.id.clone(),
                },
                &ctx,
            )
            .await;
            assert!(matches!(res, Err(UseCaseErrors::AlreadyTerminal(_))));
        }
    }
}
